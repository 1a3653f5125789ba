//! I/O error types
//!
//! Provides a unified error type for header parsing, body decoding and
//! encoding. Decoding stops at the first error; a partially read raster is
//! discarded, never returned.

use netpbm_core::{PixelKind, PnmFormat};
use thiserror::Error;

/// Error type for Netpbm I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error from the underlying reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Magic number is not one of `P1`..`P6`
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Stream ended before a required header token
    #[error("truncated header: missing {0}")]
    TruncatedHeader(&'static str),

    /// Stream ended inside the body; names the first pixel not read
    #[error("truncated body at row {row}, column {column}")]
    TruncatedBody { row: u32, column: u32 },

    /// Token that is not a decimal number, or a sample above the max value
    #[error("malformed number: {0}")]
    MalformedNumber(String),

    /// Bitmap token other than `0` or `1`
    #[error("invalid pixel token {token:?} at row {row}, column {column}")]
    InvalidPixelToken { token: String, row: u32, column: u32 },

    /// Max value of 0, or one that needs two-byte samples
    #[error("unsupported max value {0} (must be 1..=255)")]
    UnsupportedMaxValue(u32),

    /// Raster pixel kind does not match the requested output format
    #[error("format {format} cannot encode {kind:?} pixels")]
    FormatMismatch { format: PnmFormat, kind: PixelKind },

    /// Header dimensions exceed the configured decode limits
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
