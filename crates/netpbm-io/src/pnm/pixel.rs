//! Per-kind sample encoding
//!
//! [`PnmPixel`] ties each pixel kind to its ASCII tokens and its binary row
//! layout.

use crate::reader::{TokenReader, parse_number};
use crate::{IoError, IoResult};
use netpbm_core::{Pixel, Rgb};
use std::io::BufRead;

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for u8 {}
    impl Sealed for netpbm_core::Rgb {}
}

/// Pixel kinds that can be encoded in a Netpbm body
///
/// Implemented for `bool`, `u8` and [`Rgb`]; sealed.
pub trait PnmPixel: Pixel + sealed::Sealed {
    /// Read one pixel from ASCII tokens.
    ///
    /// `row` and `column` locate the pixel for error reporting.
    fn read_ascii<R: BufRead>(
        tokens: &mut TokenReader<R>,
        max_value: u8,
        row: u32,
        column: u32,
    ) -> IoResult<Self>;

    /// Append the ASCII samples of this pixel, space separated.
    fn write_ascii(self, out: &mut Vec<u8>);

    /// Number of whole pixels held by `bytes` bytes of a binary row.
    fn pixels_in(bytes: usize) -> usize;

    /// Decode one binary row of `width` pixels into `out`.
    ///
    /// Returns the number of samples above `max_value`.
    fn unpack_row(bytes: &[u8], width: usize, max_value: u8, out: &mut Vec<Self>) -> usize;

    /// Encode one row into `out`.
    fn pack_row(row: &[Self], out: &mut Vec<u8>);
}

/// Read one decimal sample, rejecting values above `max_value`.
fn read_sample<R: BufRead>(
    tokens: &mut TokenReader<R>,
    max_value: u8,
    row: u32,
    column: u32,
) -> IoResult<u8> {
    let token = tokens
        .next_token()?
        .ok_or(IoError::TruncatedBody { row, column })?;
    let value = parse_number(token)?;
    if value > max_value as u32 {
        return Err(IoError::MalformedNumber(format!(
            "sample {value} at row {row}, column {column} exceeds max value {max_value}"
        )));
    }
    Ok(value as u8)
}

fn push_sample(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + v / 10 % 10);
    }
    out.push(b'0' + v % 10);
}

impl PnmPixel for bool {
    fn read_ascii<R: BufRead>(
        tokens: &mut TokenReader<R>,
        _max_value: u8,
        row: u32,
        column: u32,
    ) -> IoResult<Self> {
        match tokens.next_token()? {
            None => Err(IoError::TruncatedBody { row, column }),
            Some(b"0") => Ok(false),
            Some(b"1") => Ok(true),
            Some(other) => Err(IoError::InvalidPixelToken {
                token: String::from_utf8_lossy(other).into_owned(),
                row,
                column,
            }),
        }
    }

    fn write_ascii(self, out: &mut Vec<u8>) {
        out.push(if self { b'1' } else { b'0' });
    }

    fn pixels_in(bytes: usize) -> usize {
        bytes * 8
    }

    fn unpack_row(bytes: &[u8], width: usize, _max_value: u8, out: &mut Vec<Self>) -> usize {
        out.extend((0..width).map(|x| bytes[x / 8] & (0x80 >> (x % 8)) != 0));
        0
    }

    fn pack_row(row: &[Self], out: &mut Vec<u8>) {
        for chunk in row.chunks(8) {
            let byte = chunk
                .iter()
                .enumerate()
                .filter(|&(_, &set)| set)
                .fold(0u8, |acc, (i, _)| acc | (0x80 >> i));
            out.push(byte);
        }
    }
}

impl PnmPixel for u8 {
    fn read_ascii<R: BufRead>(
        tokens: &mut TokenReader<R>,
        max_value: u8,
        row: u32,
        column: u32,
    ) -> IoResult<Self> {
        read_sample(tokens, max_value, row, column)
    }

    fn write_ascii(self, out: &mut Vec<u8>) {
        push_sample(out, self);
    }

    fn pixels_in(bytes: usize) -> usize {
        bytes
    }

    fn unpack_row(bytes: &[u8], width: usize, max_value: u8, out: &mut Vec<Self>) -> usize {
        let row = &bytes[..width];
        out.extend_from_slice(row);
        row.iter().filter(|&&v| v > max_value).count()
    }

    fn pack_row(row: &[Self], out: &mut Vec<u8>) {
        out.extend_from_slice(row);
    }
}

impl PnmPixel for Rgb {
    fn read_ascii<R: BufRead>(
        tokens: &mut TokenReader<R>,
        max_value: u8,
        row: u32,
        column: u32,
    ) -> IoResult<Self> {
        let r = read_sample(tokens, max_value, row, column)?;
        let g = read_sample(tokens, max_value, row, column)?;
        let b = read_sample(tokens, max_value, row, column)?;
        Ok(Rgb::new(r, g, b))
    }

    fn write_ascii(self, out: &mut Vec<u8>) {
        push_sample(out, self.r);
        out.push(b' ');
        push_sample(out, self.g);
        out.push(b' ');
        push_sample(out, self.b);
    }

    fn pixels_in(bytes: usize) -> usize {
        bytes / 3
    }

    fn unpack_row(bytes: &[u8], width: usize, max_value: u8, out: &mut Vec<Self>) -> usize {
        let row = &bytes[..width * 3];
        out.extend(row.chunks_exact(3).map(|c| Rgb::new(c[0], c[1], c[2])));
        row.iter().filter(|&&v| v > max_value).count()
    }

    fn pack_row(row: &[Self], out: &mut Vec<u8>) {
        for px in row {
            out.extend_from_slice(&px.to_array());
        }
    }
}
