//! Raster - The main image container
//!
//! `Raster<P>` is the in-memory form of every Netpbm image. It is generic
//! over the pixel kind `P` (see [`Pixel`]) and carries the metadata the
//! codec needs to write it back out: the format tag and the max sample value.
//!
//! # Pixel layout
//!
//! - One contiguous row-major buffer of `width * height` pixels
//! - Row `y` occupies `data[y * width .. (y + 1) * width]`
//! - Zero-sized rasters (either dimension 0) are legal and hold no pixels
//!
//! # Ownership model
//!
//! A raster exclusively owns its storage. All mutation goes through
//! `&mut self`; operations that change dimensions swap in a freshly built
//! buffer together with the new width and height.

mod access;
pub mod convert;
pub mod graphics;
mod pixel;
mod rop;

pub use convert::BitmapThreshold;
pub use graphics::Point;
pub use pixel::{Pixel, PixelKind, Rgb};

use crate::error::{Error, Result};
use std::fmt;

/// Largest max value a grey or color raster may carry.
///
/// Samples are stored in one byte; two-byte Netpbm samples are not supported.
pub const MAX_SAMPLE_VALUE: u8 = 255;

/// Netpbm format tag
///
/// Selects both the pixel kind and the body encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// `P1` - ASCII bitmap
    AsciiBitmap,
    /// `P2` - ASCII greymap
    AsciiGreymap,
    /// `P3` - ASCII pixmap
    AsciiPixmap,
    /// `P4` - packed binary bitmap
    BinaryBitmap,
    /// `P5` - binary greymap
    BinaryGreymap,
    /// `P6` - binary pixmap
    BinaryPixmap,
}

impl PnmFormat {
    /// All six variants in magic-number order.
    pub const ALL: [PnmFormat; 6] = [
        PnmFormat::AsciiBitmap,
        PnmFormat::AsciiGreymap,
        PnmFormat::AsciiPixmap,
        PnmFormat::BinaryBitmap,
        PnmFormat::BinaryGreymap,
        PnmFormat::BinaryPixmap,
    ];

    /// The two-character magic number (`"P1"` .. `"P6"`).
    pub fn magic(self) -> &'static str {
        match self {
            Self::AsciiBitmap => "P1",
            Self::AsciiGreymap => "P2",
            Self::AsciiPixmap => "P3",
            Self::BinaryBitmap => "P4",
            Self::BinaryGreymap => "P5",
            Self::BinaryPixmap => "P6",
        }
    }

    /// Parse a magic number token. Returns `None` for anything but `P1`..`P6`.
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"P1" => Some(Self::AsciiBitmap),
            b"P2" => Some(Self::AsciiGreymap),
            b"P3" => Some(Self::AsciiPixmap),
            b"P4" => Some(Self::BinaryBitmap),
            b"P5" => Some(Self::BinaryGreymap),
            b"P6" => Some(Self::BinaryPixmap),
            _ => None,
        }
    }

    /// Format for a pixel kind and encoding.
    pub fn for_kind(kind: PixelKind, binary: bool) -> Self {
        match (kind, binary) {
            (PixelKind::Bit, false) => Self::AsciiBitmap,
            (PixelKind::Grey, false) => Self::AsciiGreymap,
            (PixelKind::Rgb, false) => Self::AsciiPixmap,
            (PixelKind::Bit, true) => Self::BinaryBitmap,
            (PixelKind::Grey, true) => Self::BinaryGreymap,
            (PixelKind::Rgb, true) => Self::BinaryPixmap,
        }
    }

    /// Pixel kind stored by this format.
    pub fn kind(self) -> PixelKind {
        match self {
            Self::AsciiBitmap | Self::BinaryBitmap => PixelKind::Bit,
            Self::AsciiGreymap | Self::BinaryGreymap => PixelKind::Grey,
            Self::AsciiPixmap | Self::BinaryPixmap => PixelKind::Rgb,
        }
    }

    /// Whether the body is raw bytes rather than decimal tokens.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Self::BinaryBitmap | Self::BinaryGreymap | Self::BinaryPixmap
        )
    }

    /// Whether the header carries a max-value line.
    pub fn has_max_value(self) -> bool {
        self.kind() != PixelKind::Bit
    }

    /// Get the conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self.kind() {
            PixelKind::Bit => "pbm",
            PixelKind::Grey => "pgm",
            PixelKind::Rgb => "ppm",
        }
    }
}

impl fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

/// Raster - Main image container
///
/// # Examples
///
/// ```
/// use netpbm_core::{PnmFormat, Raster};
///
/// let raster: Raster<u8> = Raster::new(640, 480, PnmFormat::BinaryGreymap).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.max_value(), Some(255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<P: Pixel> {
    width: u32,
    height: u32,
    format: PnmFormat,
    /// Max sample value; always 1 for bit rasters
    max_value: u8,
    data: Vec<P>,
}

impl<P: Pixel> Raster<P> {
    /// Create a new raster with every pixel set to `P::default()`.
    ///
    /// Grey and color rasters get a max value of 255.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] if `format` does not store `P`.
    pub fn new(width: u32, height: u32, format: PnmFormat) -> Result<Self> {
        Self::new_with_max_value(width, height, format, MAX_SAMPLE_VALUE)
    }

    /// Create a new raster with an explicit max value.
    ///
    /// `max_value` is ignored for bit rasters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] if `format` does not store `P`, or
    /// [`Error::InvalidParameter`] if `max_value` is 0 for a grey/color raster.
    pub fn new_with_max_value(
        width: u32,
        height: u32,
        format: PnmFormat,
        max_value: u8,
    ) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Self::from_pixels(width, height, format, max_value, vec![P::default(); len])
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `data.len() != width * height`,
    /// plus the errors of [`Raster::new_with_max_value`].
    pub fn from_pixels(
        width: u32,
        height: u32,
        format: PnmFormat,
        max_value: u8,
        data: Vec<P>,
    ) -> Result<Self> {
        check_format::<P>(format)?;
        let max_value = Self::checked_max_value(max_value)?;
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::InvalidDimension {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            format,
            max_value,
            data,
        })
    }

    fn checked_max_value(max_value: u8) -> Result<u8> {
        match P::KIND {
            PixelKind::Bit => Ok(1),
            _ if max_value == 0 => Err(Error::InvalidParameter(
                "max value must be at least 1".to_string(),
            )),
            _ => Ok(max_value),
        }
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the format tag.
    #[inline]
    pub fn format(&self) -> PnmFormat {
        self.format
    }

    /// Get the max sample value. `None` for bit rasters.
    #[inline]
    pub fn max_value(&self) -> Option<u8> {
        match P::KIND {
            PixelKind::Bit => None,
            _ => Some(self.max_value),
        }
    }

    /// Max value used by sample arithmetic (1 for bit rasters).
    #[inline]
    pub(crate) fn sample_max(&self) -> u8 {
        self.max_value
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replace the stored max value.
    ///
    /// Samples are left untouched; only the value written to the header and
    /// used by inversion and thresholding changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] for bit rasters and
    /// [`Error::InvalidParameter`] for a max value of 0.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<()> {
        if P::KIND == PixelKind::Bit {
            return Err(Error::NotSupported(
                "bit rasters have no max value".to_string(),
            ));
        }
        self.max_value = Self::checked_max_value(max_value)?;
        Ok(())
    }

    /// Re-tag the raster with another format storing the same pixel kind.
    ///
    /// Used to switch between the ASCII and binary encoding of one class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] if `format` does not store `P`.
    pub fn into_format(self, format: PnmFormat) -> Result<Self> {
        check_format::<P>(format)?;
        Ok(Raster { format, ..self })
    }

    /// Get the raw pixel buffer.
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.data
    }

    /// Get the raw pixel buffer mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Consume the raster and return its pixel buffer.
    pub fn into_data(self) -> Vec<P> {
        self.data
    }

    /// Swap in a new buffer with new dimensions.
    ///
    /// Width, height and storage change together; on error the raster is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `data.len() != width * height`.
    pub fn replace_data(&mut self, width: u32, height: u32, data: Vec<P>) -> Result<()> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::InvalidDimension {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        self.width = width;
        self.height = height;
        self.data = data;
        Ok(())
    }
}

fn check_format<P: Pixel>(format: PnmFormat) -> Result<()> {
    if format.kind() != P::KIND {
        return Err(Error::FormatMismatch {
            format,
            kind: P::KIND,
        });
    }
    Ok(())
}

/// Compute `width * height`, guarding against overflow on 32-bit targets.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::InvalidParameter(format!("raster too large: {width}x{height}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let r: Raster<u8> = Raster::new(3, 2, PnmFormat::AsciiGreymap).unwrap();
        assert_eq!(r.size(), (3, 2));
        assert_eq!(r.pixel_count(), 6);
        assert!(r.data().iter().all(|&v| v == 0));
        assert_eq!(r.max_value(), Some(255));
    }

    #[test]
    fn test_zero_sized() {
        let r: Raster<bool> = Raster::new(0, 5, PnmFormat::BinaryBitmap).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.height(), 5);
        assert_eq!(r.max_value(), None);
    }

    #[test]
    fn test_format_mismatch() {
        let err = Raster::<Rgb>::new(1, 1, PnmFormat::AsciiGreymap).unwrap_err();
        assert!(matches!(
            err,
            Error::FormatMismatch {
                format: PnmFormat::AsciiGreymap,
                kind: PixelKind::Rgb
            }
        ));
    }

    #[test]
    fn test_from_pixels_length_checked() {
        let err =
            Raster::from_pixels(2, 2, PnmFormat::BinaryGreymap, 255, vec![0u8; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimension {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_max_value_rules() {
        assert!(Raster::<u8>::new_with_max_value(1, 1, PnmFormat::BinaryGreymap, 0).is_err());

        let mut grey: Raster<u8> =
            Raster::new_with_max_value(1, 1, PnmFormat::BinaryGreymap, 15).unwrap();
        assert_eq!(grey.max_value(), Some(15));
        grey.set_max_value(100).unwrap();
        assert_eq!(grey.max_value(), Some(100));
        assert!(grey.set_max_value(0).is_err());

        let mut bits: Raster<bool> = Raster::new(1, 1, PnmFormat::AsciiBitmap).unwrap();
        assert!(matches!(bits.set_max_value(3), Err(Error::NotSupported(_))));
    }

    #[test]
    fn test_into_format() {
        let r: Raster<Rgb> = Raster::new(1, 1, PnmFormat::AsciiPixmap).unwrap();
        let r = r.into_format(PnmFormat::BinaryPixmap).unwrap();
        assert_eq!(r.format(), PnmFormat::BinaryPixmap);
        assert!(r.into_format(PnmFormat::BinaryBitmap).is_err());
    }

    #[test]
    fn test_replace_data_atomic() {
        let mut r: Raster<u8> = Raster::new(2, 3, PnmFormat::BinaryGreymap).unwrap();
        assert!(r.replace_data(3, 3, vec![1; 6]).is_err());
        assert_eq!(r.size(), (2, 3));
        r.replace_data(3, 2, vec![1; 6]).unwrap();
        assert_eq!(r.size(), (3, 2));
    }

    #[test]
    fn test_format_tables() {
        for format in PnmFormat::ALL {
            assert_eq!(PnmFormat::from_magic(format.magic().as_bytes()), Some(format));
            assert_eq!(PnmFormat::for_kind(format.kind(), format.is_binary()), format);
        }
        assert_eq!(PnmFormat::from_magic(b"P7"), None);
        assert_eq!(PnmFormat::BinaryPixmap.to_string(), "P6");
        assert_eq!(PnmFormat::AsciiGreymap.extension(), "pgm");
        assert!(!PnmFormat::BinaryBitmap.has_max_value());
    }
}
