//! Image - a raster of any pixel kind
//!
//! Decoding produces whichever raster the header names, so the result is an
//! enum over the three typed rasters. Operations dispatch on the variant.

use crate::error::{Error, Result};
use crate::raster::{PixelKind, PnmFormat, Raster, Rgb};

/// A decoded Netpbm image of any class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image {
    /// `P1` / `P4`
    Bitmap(Raster<bool>),
    /// `P2` / `P5`
    Greymap(Raster<u8>),
    /// `P3` / `P6`
    Pixmap(Raster<Rgb>),
}

macro_rules! dispatch {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            Image::Bitmap($r) => $body,
            Image::Greymap($r) => $body,
            Image::Pixmap($r) => $body,
        }
    };
}

impl Image {
    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        dispatch!(self, r => r.width())
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        dispatch!(self, r => r.height())
    }

    /// Get the format tag.
    pub fn format(&self) -> PnmFormat {
        dispatch!(self, r => r.format())
    }

    /// Get the pixel kind.
    pub fn kind(&self) -> PixelKind {
        match self {
            Image::Bitmap(_) => PixelKind::Bit,
            Image::Greymap(_) => PixelKind::Grey,
            Image::Pixmap(_) => PixelKind::Rgb,
        }
    }

    /// Get the max sample value. `None` for bitmaps.
    pub fn max_value(&self) -> Option<u8> {
        dispatch!(self, r => r.max_value())
    }

    /// Invert all pixels in-place.
    pub fn invert_inplace(&mut self) {
        dispatch!(self, r => r.invert_inplace())
    }

    /// Return an inverted copy.
    pub fn invert(&self) -> Image {
        let mut out = self.clone();
        out.invert_inplace();
        out
    }

    /// Convert to a greymap.
    ///
    /// Greymaps are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] for bitmaps; there is no grey
    /// expansion of a bit raster.
    pub fn to_grey(&self) -> Result<Raster<u8>> {
        match self {
            Image::Bitmap(_) => Err(Error::NotSupported(
                "bitmap to greymap conversion".to_string(),
            )),
            Image::Greymap(r) => Ok(r.clone()),
            Image::Pixmap(r) => Ok(r.to_grey()),
        }
    }

    /// Convert to a bitmap. Bitmaps are returned unchanged.
    pub fn to_bitmap(&self) -> Raster<bool> {
        match self {
            Image::Bitmap(r) => r.clone(),
            Image::Greymap(r) => r.to_bitmap(),
            Image::Pixmap(r) => r.to_bitmap(),
        }
    }

    /// Re-tag with another format of the same class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] if `format` names another class.
    pub fn into_format(self, format: PnmFormat) -> Result<Image> {
        Ok(match self {
            Image::Bitmap(r) => Image::Bitmap(r.into_format(format)?),
            Image::Greymap(r) => Image::Greymap(r.into_format(format)?),
            Image::Pixmap(r) => Image::Pixmap(r.into_format(format)?),
        })
    }

    /// Borrow the bit raster, if this is a bitmap.
    pub fn as_bitmap(&self) -> Option<&Raster<bool>> {
        match self {
            Image::Bitmap(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the grey raster, if this is a greymap.
    pub fn as_greymap(&self) -> Option<&Raster<u8>> {
        match self {
            Image::Greymap(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the color raster, if this is a pixmap.
    pub fn as_pixmap(&self) -> Option<&Raster<Rgb>> {
        match self {
            Image::Pixmap(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Raster<bool>> for Image {
    fn from(r: Raster<bool>) -> Self {
        Image::Bitmap(r)
    }
}

impl From<Raster<u8>> for Image {
    fn from(r: Raster<u8>) -> Self {
        Image::Greymap(r)
    }
}

impl From<Raster<Rgb>> for Image {
    fn from(r: Raster<Rgb>) -> Self {
        Image::Pixmap(r)
    }
}
