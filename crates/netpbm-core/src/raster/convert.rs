//! Pixel kind conversion functions
//!
//! Lossy conversions color -> grey -> bit. Each conversion builds a new
//! raster; the result keeps the source's encoding family, so an ASCII
//! pixmap becomes an ASCII greymap (`P3` -> `P2`) and a binary pixmap a
//! binary greymap (`P6` -> `P5`).

use super::{MAX_SAMPLE_VALUE, PixelKind, PnmFormat, Raster, Rgb};
use log::debug;

/// Thresholding policy used when reducing samples to bits.
///
/// The two source kinds use different thresholds:
///
/// | policy    | threshold          | applied to      |
/// |-----------|--------------------|-----------------|
/// | `Greymap` | `max / 2`          | the raw sample  |
/// | `Pixmap`  | `max / 2 + 1`      | the RGB average |
///
/// A pixel becomes set when its level is strictly greater than the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapThreshold {
    /// Threshold for greymap sources
    Greymap,
    /// Threshold for pixmap sources
    Pixmap,
}

impl BitmapThreshold {
    /// Threshold level for the given max value.
    pub fn level(self, max_value: u8) -> u16 {
        match self {
            BitmapThreshold::Greymap => max_value as u16 / 2,
            BitmapThreshold::Pixmap => max_value as u16 / 2 + 1,
        }
    }

    /// Whether `sample` maps to a set bit.
    #[inline]
    pub fn is_set(self, sample: u8, max_value: u8) -> bool {
        sample as u16 > self.level(max_value)
    }
}

impl Raster<Rgb> {
    /// Convert to a greymap by averaging channels.
    ///
    /// Each sample is `(r + g + b) / 3` with truncating division. The result
    /// always has a max value of 255, whatever the source max value was.
    pub fn to_grey(&self) -> Raster<u8> {
        debug!(
            "converting {}x{} pixmap to greymap",
            self.width(),
            self.height()
        );
        let data: Vec<u8> = self.data().iter().map(Rgb::average).collect();
        let format = PnmFormat::for_kind(PixelKind::Grey, self.format().is_binary());
        Raster {
            width: self.width(),
            height: self.height(),
            format,
            max_value: MAX_SAMPLE_VALUE,
            data,
        }
    }

    /// Convert to a bitmap using [`BitmapThreshold::Pixmap`] on the
    /// channel average.
    pub fn to_bitmap(&self) -> Raster<bool> {
        let max = self.sample_max();
        debug!(
            "thresholding {}x{} pixmap at {}",
            self.width(),
            self.height(),
            BitmapThreshold::Pixmap.level(max)
        );
        let data: Vec<bool> = self
            .data()
            .iter()
            .map(|px| BitmapThreshold::Pixmap.is_set(px.average(), max))
            .collect();
        bitmap_like(self.width(), self.height(), self.format(), data)
    }
}

impl Raster<u8> {
    /// Convert to a bitmap using [`BitmapThreshold::Greymap`].
    pub fn to_bitmap(&self) -> Raster<bool> {
        let max = self.sample_max();
        debug!(
            "thresholding {}x{} greymap at {}",
            self.width(),
            self.height(),
            BitmapThreshold::Greymap.level(max)
        );
        let data: Vec<bool> = self
            .data()
            .iter()
            .map(|&v| BitmapThreshold::Greymap.is_set(v, max))
            .collect();
        bitmap_like(self.width(), self.height(), self.format(), data)
    }
}

fn bitmap_like(width: u32, height: u32, source: PnmFormat, data: Vec<bool>) -> Raster<bool> {
    Raster {
        width,
        height,
        format: PnmFormat::for_kind(PixelKind::Bit, source.is_binary()),
        max_value: 1,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_levels() {
        assert_eq!(BitmapThreshold::Greymap.level(255), 127);
        assert_eq!(BitmapThreshold::Pixmap.level(255), 128);
        assert_eq!(BitmapThreshold::Greymap.level(1), 0);
        assert_eq!(BitmapThreshold::Pixmap.level(1), 1);
    }

    #[test]
    fn test_grey_to_bitmap_boundary() {
        let r = Raster::from_pixels(3, 1, PnmFormat::AsciiGreymap, 255, vec![127u8, 128, 255])
            .unwrap();
        let b = r.to_bitmap();
        assert_eq!(b.format(), PnmFormat::AsciiBitmap);
        assert_eq!(b.data(), &[false, true, true]);
    }

    #[test]
    fn test_rgb_to_bitmap_uses_higher_threshold() {
        // average 128: set for a greymap, not for a pixmap
        let r = Raster::from_pixels(
            2,
            1,
            PnmFormat::BinaryPixmap,
            255,
            vec![Rgb::new(128, 128, 128), Rgb::new(129, 129, 129)],
        )
        .unwrap();
        let b = r.to_bitmap();
        assert_eq!(b.format(), PnmFormat::BinaryBitmap);
        assert_eq!(b.data(), &[false, true]);
    }

    #[test]
    fn test_rgb_to_grey() {
        let r = Raster::from_pixels(
            2,
            1,
            PnmFormat::AsciiPixmap,
            100,
            vec![Rgb::new(10, 20, 31), Rgb::new(100, 100, 100)],
        )
        .unwrap();
        let g = r.to_grey();
        assert_eq!(g.format(), PnmFormat::AsciiGreymap);
        assert_eq!(g.max_value(), Some(255));
        assert_eq!(g.data(), &[20, 100]);
    }
}
