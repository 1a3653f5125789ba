//! netpbm - Netpbm images for Rust
//!
//! Reads, writes and manipulates the six Netpbm variants (`P1`..`P6`):
//!
//! - Image I/O for bitmaps, greymaps and pixmaps in ASCII and binary form
//! - Value inversion and lossy class conversion (color -> grey -> bit)
//! - Flips and orthogonal rotations
//! - Integer rasterization of lines, rectangles, circles, triangles and
//!   polygons
//!
//! # Example
//!
//! ```
//! use netpbm::{Point, PnmFormat, Raster};
//!
//! let mut canvas: Raster<bool> = Raster::new(4, 4, PnmFormat::AsciiBitmap).unwrap();
//! canvas.draw_line(Point::new(0, 0), Point::new(3, 3), true);
//!
//! let data = netpbm::io::encode_mem(&canvas, PnmFormat::AsciiBitmap).unwrap();
//! assert_eq!(data, b"P1\n4 4\n1 0 0 0\n0 1 0 0\n0 0 1 0\n0 0 0 1\n");
//!
//! let rotated = netpbm::transform::rotate_90(&canvas, true).unwrap();
//! assert_eq!(rotated.get_pixel(3, 0), Some(true));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use netpbm_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use netpbm_io as io;
pub use netpbm_transform as transform;
