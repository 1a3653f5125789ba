//! Binary bodies (P4, P5, P6)
//!
//! Bitmap rows are packed MSB first into `ceil(width / 8)` bytes; padding
//! bits are ignored on read and written as zero. Grey and color samples are
//! one byte each with no row padding.

use super::pixel::PnmPixel;
use crate::header::PnmHeader;
use crate::{IoError, IoResult};
use log::{trace, warn};
use netpbm_core::Raster;
use std::io::{BufRead, Read, Write};

/// Read `height` binary rows.
///
/// Each row buffer grows only as bytes arrive, so a header that overstates
/// the body size fails with [`IoError::TruncatedBody`] without allocating
/// the full image up front. A zero-width image has no body bytes and is
/// returned without visiting its rows.
pub(super) fn read_pixels<P: PnmPixel, R: BufRead>(
    reader: &mut R,
    header: &PnmHeader,
) -> IoResult<Vec<P>> {
    let width = header.width as usize;
    let row_len = header.binary_row_len();
    let max_value = header.max_value.unwrap_or(1);
    if row_len == 0 {
        return Ok(Vec::new());
    }

    let mut data = Vec::new();
    let mut row_buf = Vec::new();
    let mut out_of_range = 0usize;
    for y in 0..header.height {
        row_buf.clear();
        let n = reader.by_ref().take(row_len).read_to_end(&mut row_buf)?;
        if (n as u64) < row_len {
            return Err(IoError::TruncatedBody {
                row: y,
                column: P::pixels_in(n) as u32,
            });
        }
        out_of_range += P::unpack_row(&row_buf, width, max_value, &mut data);
        trace!("{}: read row {y}", header.format);
    }

    if out_of_range > 0 {
        warn!(
            "{}: {out_of_range} samples exceed max value {max_value}; kept unchanged",
            header.format
        );
    }
    Ok(data)
}

/// Write every row in binary layout.
pub(super) fn write_pixels<P: PnmPixel, W: Write>(
    raster: &Raster<P>,
    writer: &mut W,
) -> IoResult<()> {
    if raster.is_empty() {
        return Ok(());
    }
    let mut buf = Vec::new();
    for row in raster.rows() {
        buf.clear();
        P::pack_row(row, &mut buf);
        writer.write_all(&buf)?;
    }
    Ok(())
}
