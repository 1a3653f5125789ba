//! Netpbm header codec
//!
//! A header is the magic number, the width, the height and (for grey and
//! color images) the max sample value, as whitespace-separated decimal
//! tokens with `#` comments allowed between them:
//!
//! ```text
//! P6
//! # created by hand
//! 640 480
//! 255
//! ```
//!
//! Dimensions are always width first. Exactly one whitespace byte follows
//! the last token; binary bodies start right after it.

use crate::reader::TokenReader;
use crate::{IoError, IoResult};
use log::debug;
use netpbm_core::{MAX_SAMPLE_VALUE, Pixel, PixelKind, PnmFormat, Raster};
use std::io::{BufRead, Write};

/// Image metadata read without decoding pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    /// Format tag from the magic number
    pub format: PnmFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Max sample value; `None` for bitmaps
    pub max_value: Option<u8>,
}

impl PnmHeader {
    /// Header describing `raster` encoded as `format`.
    pub fn for_raster<P: Pixel>(raster: &Raster<P>, format: PnmFormat) -> Self {
        Self {
            format,
            width: raster.width(),
            height: raster.height(),
            max_value: raster.max_value(),
        }
    }

    /// Pixel kind named by the format.
    pub fn kind(&self) -> PixelKind {
        self.format.kind()
    }

    /// `width * height`
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Bytes in one binary-encoded row (packed for bitmaps).
    pub fn binary_row_len(&self) -> u64 {
        let w = self.width as u64;
        match self.kind() {
            PixelKind::Bit => w.div_ceil(8),
            PixelKind::Grey => w,
            PixelKind::Rgb => w * 3,
        }
    }
}

/// Parse a header from a token stream, leaving the stream at the first body
/// byte.
pub(crate) fn parse_header<R: BufRead>(tokens: &mut TokenReader<R>) -> IoResult<PnmHeader> {
    let format = match tokens.next_token()? {
        None => return Err(IoError::TruncatedHeader("magic number")),
        Some(magic) => PnmFormat::from_magic(magic).ok_or_else(|| {
            IoError::InvalidFormat(format!(
                "unknown magic number {:?}",
                String::from_utf8_lossy(magic)
            ))
        })?,
    };

    let width = tokens.header_number("width")?;
    let height = tokens.header_number("height")?;

    let max_value = if format.has_max_value() {
        let max = tokens.header_number("max value")?;
        if max == 0 || max > MAX_SAMPLE_VALUE as u32 {
            return Err(IoError::UnsupportedMaxValue(max));
        }
        Some(max as u8)
    } else {
        None
    };
    tokens.end_header()?;

    let header = PnmHeader {
        format,
        width,
        height,
        max_value,
    };
    debug!(
        "read {} header: {}x{}, max value {:?}",
        format, width, height, max_value
    );
    Ok(header)
}

/// Read a header from a buffered reader.
///
/// The body is not read.
pub fn read_header<R: BufRead>(reader: R) -> IoResult<PnmHeader> {
    parse_header(&mut TokenReader::new(reader))
}

/// Read image metadata from bytes without decoding pixel data
pub fn read_image_header_mem(data: &[u8]) -> IoResult<PnmHeader> {
    read_header(data)
}

/// Write a header as `P<n>\n<width> <height>\n[<max>\n]`.
///
/// A grey or color header without a max value is written with 255.
pub fn write_header<W: Write>(header: &PnmHeader, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "{}\n{} {}\n",
        header.format, header.width, header.height
    )?;
    if header.format.has_max_value() {
        writeln!(
            writer,
            "{}",
            header.max_value.unwrap_or(MAX_SAMPLE_VALUE)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header_with_comments() {
        let h = read_image_header_mem(b"P2\n# comment\n3 # inline\n2\n15\n0 1 2").unwrap();
        assert_eq!(
            h,
            PnmHeader {
                format: PnmFormat::AsciiGreymap,
                width: 3,
                height: 2,
                max_value: Some(15),
            }
        );
    }

    #[test]
    fn test_bitmap_has_no_max_value() {
        let h = read_image_header_mem(b"P4 8 1 \xff").unwrap();
        assert_eq!(h.format, PnmFormat::BinaryBitmap);
        assert_eq!(h.max_value, None);
        assert_eq!(h.binary_row_len(), 1);
    }

    #[test]
    fn test_invalid_magic() {
        assert!(matches!(
            read_image_header_mem(b"P7\n1 1\n255\n"),
            Err(IoError::InvalidFormat(_))
        ));
        assert!(matches!(
            read_image_header_mem(b"GIF89a"),
            Err(IoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            read_image_header_mem(b""),
            Err(IoError::TruncatedHeader("magic number"))
        ));
        assert!(matches!(
            read_image_header_mem(b"P5\n4"),
            Err(IoError::TruncatedHeader("height"))
        ));
        assert!(matches!(
            read_image_header_mem(b"P6 4 4 # no max\n"),
            Err(IoError::TruncatedHeader("max value"))
        ));
    }

    #[test]
    fn test_malformed_dimension() {
        assert!(matches!(
            read_image_header_mem(b"P5\nfour 4\n255\n"),
            Err(IoError::MalformedNumber(_))
        ));
        assert!(matches!(
            read_image_header_mem(b"P5\n-4 4\n255\n"),
            Err(IoError::MalformedNumber(_))
        ));
    }

    #[test]
    fn test_max_value_range() {
        assert!(matches!(
            read_image_header_mem(b"P5 1 1 0\n"),
            Err(IoError::UnsupportedMaxValue(0))
        ));
        assert!(matches!(
            read_image_header_mem(b"P6 1 1 65535\n"),
            Err(IoError::UnsupportedMaxValue(65535))
        ));
        assert_eq!(
            read_image_header_mem(b"P5 1 1 1\n").unwrap().max_value,
            Some(1)
        );
    }

    #[test]
    fn test_write_header() {
        let mut out = Vec::new();
        let h = PnmHeader {
            format: PnmFormat::BinaryPixmap,
            width: 3,
            height: 2,
            max_value: Some(100),
        };
        write_header(&h, &mut out).unwrap();
        assert_eq!(out, b"P6\n3 2\n100\n");

        out.clear();
        let h = PnmHeader {
            format: PnmFormat::AsciiBitmap,
            width: 5,
            height: 7,
            max_value: None,
        };
        write_header(&h, &mut out).unwrap();
        assert_eq!(out, b"P1\n5 7\n");
        assert_eq!(read_image_header_mem(&out).unwrap(), h);
    }
}
