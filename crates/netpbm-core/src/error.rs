//! Error types for netpbm-core
//!
//! Provides a unified error type for raster construction and pixel access.
//! Drawing primitives never fail: geometry outside the canvas is clipped,
//! so nothing in the rasterizer returns this type.

use crate::raster::{PixelKind, PnmFormat};
use thiserror::Error;

/// netpbm-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer length does not match the requested dimensions
    #[error("invalid raster dimensions: {width}x{height} needs {expected} pixels, got {actual}")]
    InvalidDimension {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Coordinates outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Format tag does not describe the raster's pixel kind
    #[error("format {format:?} cannot hold {kind:?} pixels")]
    FormatMismatch { format: PnmFormat, kind: PixelKind },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation not supported for this pixel kind
    #[error("operation not supported: {0}")]
    NotSupported(String),
}

/// Result type alias for netpbm-core operations
pub type Result<T> = std::result::Result<T, Error>;
