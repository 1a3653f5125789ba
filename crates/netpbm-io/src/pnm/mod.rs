//! PNM (Portable Any Map) body codec
//!
//! Reads and writes all six variants: PBM (P1 ASCII, P4 binary), PGM (P2
//! ASCII, P5 binary) and PPM (P3 ASCII, P6 binary). Samples are one byte;
//! two-byte samples (max value above 255) are rejected by the header codec
//! and never written.

mod ascii;
mod binary;
mod pixel;

pub use pixel::PnmPixel;

use crate::header::{PnmHeader, parse_header, write_header};
use crate::reader::TokenReader;
use crate::{IoError, IoResult, Limits};
use log::debug;
use netpbm_core::{Image, PixelKind, PnmFormat, Raster};
use std::io::{BufRead, Write};

/// Decode the body described by `header` into a typed raster.
fn read_raster<P: PnmPixel, R: BufRead>(
    tokens: &mut TokenReader<R>,
    header: &PnmHeader,
) -> IoResult<Raster<P>> {
    let data = if header.format.is_binary() {
        binary::read_pixels(tokens.inner_mut(), header)?
    } else {
        ascii::read_pixels(tokens, header)?
    };
    let raster = Raster::from_pixels(
        header.width,
        header.height,
        header.format,
        header.max_value.unwrap_or(1),
        data,
    )?;
    Ok(raster)
}

/// Decode the body described by `header`.
pub(crate) fn read_body<R: BufRead>(
    tokens: &mut TokenReader<R>,
    header: &PnmHeader,
) -> IoResult<Image> {
    let image = match header.kind() {
        PixelKind::Bit => Image::Bitmap(read_raster(tokens, header)?),
        PixelKind::Grey => Image::Greymap(read_raster(tokens, header)?),
        PixelKind::Rgb => Image::Pixmap(read_raster(tokens, header)?),
    };
    Ok(image)
}

/// Read a PNM image (P1..P6) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the magic number
/// * `limits` - Bounds checked against the header before the body is read
///
/// # Returns
/// The decoded image; its class follows the magic number.
pub fn read_pnm<R: BufRead>(reader: R, limits: &Limits) -> IoResult<Image> {
    let mut tokens = TokenReader::new(reader);
    let header = parse_header(&mut tokens)?;
    limits.check(&header)?;
    read_body(&mut tokens, &header)
}

/// Write a raster as PNM to a writer.
///
/// # Arguments
/// * `raster` - The image to encode
/// * `format` - Target variant; must store the raster's pixel kind
/// * `writer` - Destination writer
///
/// # Errors
///
/// Returns [`IoError::FormatMismatch`] if `format` is for another pixel kind,
/// or [`IoError::Io`] if the writer fails.
pub fn write_pnm<P: PnmPixel, W: Write>(
    raster: &Raster<P>,
    format: PnmFormat,
    mut writer: W,
) -> IoResult<()> {
    if format.kind() != P::KIND {
        return Err(IoError::FormatMismatch {
            format,
            kind: P::KIND,
        });
    }
    let header = PnmHeader::for_raster(raster, format);
    debug!(
        "writing {}x{} raster as {}",
        header.width, header.height, format
    );
    write_header(&header, &mut writer)?;
    if format.is_binary() {
        binary::write_pixels(raster, &mut writer)?;
    } else {
        ascii::write_pixels(raster, &mut writer)?;
    }
    writer.flush()?;
    Ok(())
}
