//! netpbm-io - Netpbm image I/O
//!
//! Decodes and encodes the six Netpbm variants:
//!
//! | magic | class  | body   |
//! |-------|--------|--------|
//! | `P1`  | bitmap | ASCII  |
//! | `P2`  | grey   | ASCII  |
//! | `P3`  | color  | ASCII  |
//! | `P4`  | bitmap | packed |
//! | `P5`  | grey   | raw    |
//! | `P6`  | color  | raw    |
//!
//! # Examples
//!
//! ```
//! use netpbm_io::{decode_mem, encode_mem};
//! use netpbm_core::PnmFormat;
//!
//! let image = decode_mem(b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
//! let bits = image.as_bitmap().unwrap();
//! assert_eq!(bits.get_pixel(0, 0), Some(true));
//!
//! let packed = encode_mem(bits, PnmFormat::BinaryBitmap).unwrap();
//! assert_eq!(packed, b"P4\n3 2\n\xa0\x40");
//! ```

pub mod error;
pub mod format;
pub mod header;
pub mod limits;
pub mod pnm;
mod reader;

pub use error::{IoError, IoResult};
pub use format::detect_format_from_bytes;
pub use header::{PnmHeader, read_header, read_image_header_mem, write_header};
pub use limits::Limits;
pub use netpbm_core::{Image, PnmFormat};
pub use pnm::{PnmPixel, read_pnm, write_pnm};

use netpbm_core::Raster;
use std::io::{BufRead, Write};

/// Decode an image from a buffered reader with the default [`Limits`].
pub fn decode<R: BufRead>(reader: R) -> IoResult<Image> {
    read_pnm(reader, &Limits::default())
}

/// Decode an image with explicit limits.
pub fn decode_with_limits<R: BufRead>(reader: R, limits: &Limits) -> IoResult<Image> {
    read_pnm(reader, limits)
}

/// Decode an image from memory.
pub fn decode_mem(data: &[u8]) -> IoResult<Image> {
    decode(data)
}

/// Encode a raster as `format` into a writer.
pub fn encode<P: PnmPixel, W: Write>(
    raster: &Raster<P>,
    format: PnmFormat,
    writer: W,
) -> IoResult<()> {
    write_pnm(raster, format, writer)
}

/// Encode a raster as `format` into memory.
pub fn encode_mem<P: PnmPixel>(raster: &Raster<P>, format: PnmFormat) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_pnm(raster, format, &mut out)?;
    Ok(out)
}

/// Encode an image of any class as `format`.
///
/// # Errors
///
/// Returns [`IoError::FormatMismatch`] if `format` names another class.
pub fn encode_image<W: Write>(image: &Image, format: PnmFormat, writer: W) -> IoResult<()> {
    match image {
        Image::Bitmap(r) => write_pnm(r, format, writer),
        Image::Greymap(r) => write_pnm(r, format, writer),
        Image::Pixmap(r) => write_pnm(r, format, writer),
    }
}

/// Write an image to memory in its own format
pub fn write_image_mem(image: &Image) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_image(image, image.format(), &mut out)?;
    Ok(out)
}
