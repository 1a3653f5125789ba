//! Image format detection
//!
//! Detects the Netpbm variant by examining the two-byte magic number.

use crate::{IoError, IoResult};
use netpbm_core::PnmFormat;

/// Magic numbers for format detection
mod magic {
    pub const PBM_ASCII: &[u8] = b"P1";
    pub const PGM_ASCII: &[u8] = b"P2";
    pub const PPM_ASCII: &[u8] = b"P3";
    pub const PBM_BINARY: &[u8] = b"P4";
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Detect the format from the leading bytes of an encoded image
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PnmFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidFormat(
            "not enough data to detect format".to_string(),
        ));
    }

    let format = match &data[..2] {
        m if m == magic::PBM_ASCII => PnmFormat::AsciiBitmap,
        m if m == magic::PGM_ASCII => PnmFormat::AsciiGreymap,
        m if m == magic::PPM_ASCII => PnmFormat::AsciiPixmap,
        m if m == magic::PBM_BINARY => PnmFormat::BinaryBitmap,
        m if m == magic::PGM_BINARY => PnmFormat::BinaryGreymap,
        m if m == magic::PPM_BINARY => PnmFormat::BinaryPixmap,
        other => {
            return Err(IoError::InvalidFormat(format!(
                "unknown magic number {:?}",
                String::from_utf8_lossy(other)
            )));
        }
    };
    Ok(format)
}
