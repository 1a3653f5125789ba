//! netpbm-transform - Geometric transformations for netpbm-rs
//!
//! This crate provides exact, lossless orientation changes:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal and vertical flips
//!
//! Each operation exists for typed rasters ([`rotate`]) and for [`Image`]
//! values of any class ([`image`]).
//!
//! [`Image`]: netpbm_core::Image

mod error;
pub mod image;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use image::{
    flip_lr_image, flip_lr_image_in_place, flip_tb_image, flip_tb_image_in_place,
    rotate_90_cw_image_in_place, rotate_orth_image,
};
pub use rotate::{
    flip_lr, flip_lr_in_place, flip_tb, flip_tb_in_place, rotate_90, rotate_90_cw_in_place,
    rotate_180, rotate_180_in_place, rotate_orth,
};
