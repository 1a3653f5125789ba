//! Value inversion
//!
//! Bit rasters are negated; grey and color samples are reflected about the
//! raster's max value (`sample' = max_value - sample`, per channel).

use super::{Pixel, Raster};

impl<P: Pixel> Raster<P> {
    /// Invert all pixels.
    ///
    /// # Returns
    ///
    /// New raster with inverted pixels; `self` is unchanged.
    pub fn invert(&self) -> Raster<P> {
        let mut out = self.clone();
        out.invert_inplace();
        out
    }

    /// Invert all pixels in-place.
    ///
    /// Applying this twice restores the original raster as long as every
    /// sample lies within `0..=max_value`.
    pub fn invert_inplace(&mut self) {
        let max = self.sample_max();
        for px in self.data_mut() {
            *px = px.inverted(max);
        }
    }
}
