//! Orthogonal transforms on images of any class

use crate::TransformResult;
use crate::rotate;
use netpbm_core::Image;

macro_rules! map_image {
    ($image:expr, $r:ident => $body:expr) => {
        match $image {
            Image::Bitmap($r) => Image::Bitmap($body),
            Image::Greymap($r) => Image::Greymap($body),
            Image::Pixmap($r) => Image::Pixmap($body),
        }
    };
}

/// Rotate an image by `quads` clockwise quarter turns
pub fn rotate_orth_image(image: &Image, quads: u32) -> TransformResult<Image> {
    Ok(map_image!(image, r => rotate::rotate_orth(r, quads)?))
}

/// Rotate an image 90 degrees clockwise in place
pub fn rotate_90_cw_image_in_place(image: &mut Image) -> TransformResult<()> {
    match image {
        Image::Bitmap(r) => rotate::rotate_90_cw_in_place(r),
        Image::Greymap(r) => rotate::rotate_90_cw_in_place(r),
        Image::Pixmap(r) => rotate::rotate_90_cw_in_place(r),
    }
}

/// Flip an image left-right
pub fn flip_lr_image(image: &Image) -> Image {
    map_image!(image, r => rotate::flip_lr(r))
}

/// Flip an image top-bottom
pub fn flip_tb_image(image: &Image) -> Image {
    map_image!(image, r => rotate::flip_tb(r))
}

/// Flip an image left-right in place
pub fn flip_lr_image_in_place(image: &mut Image) {
    match image {
        Image::Bitmap(r) => rotate::flip_lr_in_place(r),
        Image::Greymap(r) => rotate::flip_lr_in_place(r),
        Image::Pixmap(r) => rotate::flip_lr_in_place(r),
    }
}

/// Flip an image top-bottom in place
pub fn flip_tb_image_in_place(image: &mut Image) {
    match image {
        Image::Bitmap(r) => rotate::flip_tb_in_place(r),
        Image::Greymap(r) => rotate::flip_tb_in_place(r),
        Image::Pixmap(r) => rotate::flip_tb_in_place(r),
    }
}
