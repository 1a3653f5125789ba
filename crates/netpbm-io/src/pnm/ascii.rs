//! ASCII bodies (P1, P2, P3)

use super::pixel::PnmPixel;
use crate::IoResult;
use crate::header::PnmHeader;
use crate::reader::TokenReader;
use log::trace;
use netpbm_core::Raster;
use std::io::{BufRead, Write};

/// Read `width * height` pixels as decimal tokens, row-major.
///
/// A zero-width image has no tokens and is returned without visiting its
/// rows.
pub(super) fn read_pixels<P: PnmPixel, R: BufRead>(
    tokens: &mut TokenReader<R>,
    header: &PnmHeader,
) -> IoResult<Vec<P>> {
    if header.width == 0 {
        return Ok(Vec::new());
    }
    let max_value = header.max_value.unwrap_or(1);
    let mut data = Vec::new();
    for y in 0..header.height {
        for x in 0..header.width {
            data.push(P::read_ascii(tokens, max_value, y, x)?);
        }
        trace!("{}: read row {y}", header.format);
    }
    Ok(data)
}

/// Write each row as one line of single-space-separated samples.
///
/// An empty raster writes no body at all.
pub(super) fn write_pixels<P: PnmPixel, W: Write>(
    raster: &Raster<P>,
    writer: &mut W,
) -> IoResult<()> {
    if raster.is_empty() {
        return Ok(());
    }
    let mut line = Vec::new();
    for row in raster.rows() {
        line.clear();
        for (i, &px) in row.iter().enumerate() {
            if i > 0 {
                line.push(b' ');
            }
            px.write_ascii(&mut line);
        }
        line.push(b'\n');
        writer.write_all(&line)?;
    }
    Ok(())
}
