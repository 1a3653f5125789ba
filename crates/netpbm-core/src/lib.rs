//! Netpbm Core - Raster types for the Netpbm image family
//!
//! This crate provides the in-memory data structures shared by the codec and
//! the transforms:
//!
//! - [`Raster`] - Typed row-major pixel container
//! - [`Image`] - A raster of any of the three classes
//! - [`PnmFormat`] - The six `P1`..`P6` format tags
//! - [`Rgb`] / [`Pixel`] - Pixel kinds
//!
//! Rasters also carry value inversion, lossy class conversion
//! (color -> grey -> bit) and an integer rasterizer for lines, rectangles,
//! circles, triangles and polygons.

pub mod error;
pub mod image;
pub mod raster;

pub use error::{Error, Result};
pub use image::Image;
pub use raster::{
    BitmapThreshold, MAX_SAMPLE_VALUE, Pixel, PixelKind, PnmFormat, Point, Raster, Rgb,
};
