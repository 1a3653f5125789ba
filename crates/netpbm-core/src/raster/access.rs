//! Pixel access functions
//!
//! Getting and setting individual pixels and rows. Coordinates are
//! `(x, y)` with `x` the column and `y` the row, origin at the top left.

use super::{Pixel, Raster};
use crate::error::{Error, Result};

impl<P: Pixel> Raster<P> {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get the pixel at (x, y) without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> P {
        self.data[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: P) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x, y);
        self.data[i] = val;
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: P) {
        let i = self.index(x, y);
        self.data[i] = val;
    }

    /// Set a pixel given signed coordinates, ignoring writes off the canvas.
    ///
    /// Returns whether the pixel was written.
    #[inline]
    pub(crate) fn put_clipped(&mut self, x: i64, y: i64, val: P) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        let i = self.index(x as u32, y as u32);
        self.data[i] = val;
        true
    }

    /// Get row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[P] {
        assert!(y < self.height, "row {y} out of range");
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Get row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        assert!(y < self.height, "row {y} out of range");
        let start = self.index(0, y);
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    /// Iterate over rows top to bottom.
    ///
    /// Yields `height` slices even when the width is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: P) {
        self.data.fill(val);
    }
}
