//! Decode limits
//!
//! Bounds checked against a parsed header before any body byte is read.
//! The defaults place no bound on width or height and cap the pixel count
//! at [`Limits::DEFAULT_MAX_PIXELS`].

use crate::header::PnmHeader;
use crate::{IoError, IoResult};

/// Limits applied while decoding
///
/// # Examples
///
/// ```
/// use netpbm_io::Limits;
///
/// let limits = Limits::default().with_max_width(4096).with_max_height(4096);
/// assert_eq!(limits.max_width, Some(4096));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted width
    pub max_width: Option<u32>,
    /// Largest accepted height
    pub max_height: Option<u32>,
    /// Largest accepted `width * height`
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// Default pixel-count cap (1 << 30)
    pub const DEFAULT_MAX_PIXELS: u64 = 1 << 30;

    /// Limits that accept any header.
    pub const fn none() -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_pixels: None,
        }
    }

    /// Set the largest accepted width.
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Set the largest accepted height.
    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Set the largest accepted pixel count.
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = Some(max_pixels);
        self
    }

    /// Check a parsed header against these limits.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::LimitExceeded`] naming the first bound violated.
    pub fn check(&self, header: &PnmHeader) -> IoResult<()> {
        if let Some(max) = self.max_width
            && header.width > max
        {
            return Err(IoError::LimitExceeded(format!(
                "width {} > {max}",
                header.width
            )));
        }
        if let Some(max) = self.max_height
            && header.height > max
        {
            return Err(IoError::LimitExceeded(format!(
                "height {} > {max}",
                header.height
            )));
        }
        let pixels = header.width as u64 * header.height as u64;
        if let Some(max) = self.max_pixels
            && pixels > max
        {
            return Err(IoError::LimitExceeded(format!(
                "{}x{} = {pixels} pixels > {max}",
                header.width, header.height
            )));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_pixels: Some(Self::DEFAULT_MAX_PIXELS),
        }
    }
}
