//! Rotation and flip operations
//!
//! This module provides:
//! - Horizontal and vertical flips, in place and copying
//! - Orthogonal rotations (90/180/270 degrees)
//!
//! In-place flips and the 180 degree rotation swap pixels without
//! allocating. A 90 degree rotation changes the dimensions, so it builds a
//! new `height x width` buffer and swaps it in together with the new
//! dimensions.

use crate::TransformResult;
use log::debug;
use netpbm_core::{Pixel, Raster};

/// Rotate a raster by 90-degree increments
///
/// # Arguments
/// * `raster` - Input raster
/// * `quads` - Number of 90-degree clockwise rotations (taken mod 4)
///
/// # Returns
/// The rotated raster
pub fn rotate_orth<P: Pixel>(raster: &Raster<P>, quads: u32) -> TransformResult<Raster<P>> {
    match quads % 4 {
        0 => Ok(raster.clone()),
        1 => rotate_90(raster, true),
        2 => Ok(rotate_180(raster)),
        _ => rotate_90(raster, false),
    }
}

/// Rotated pixel buffer. Output row `ny` has `height` pixels.
fn rotated_90_data<P: Pixel>(raster: &Raster<P>, clockwise: bool) -> Vec<P> {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let src = raster.data();
    if src.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(src.len());
    for ny in 0..w {
        for nx in 0..h {
            let (x, y) = if clockwise {
                (ny, h - 1 - nx)
            } else {
                (w - 1 - ny, nx)
            };
            out.push(src[y * w + x]);
        }
    }
    out
}

/// Rotate a raster 90 degrees
///
/// # Arguments
/// * `raster` - Input raster
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90<P: Pixel>(raster: &Raster<P>, clockwise: bool) -> TransformResult<Raster<P>> {
    let data = rotated_90_data(raster, clockwise);
    let out = Raster::from_pixels(
        raster.height(),
        raster.width(),
        raster.format(),
        raster.max_value().unwrap_or(1),
        data,
    )?;
    Ok(out)
}

/// Rotate a raster 90 degrees clockwise in place.
///
/// Pixel `(x, y)` moves to `(height - 1 - y, x)`; width and height swap.
/// Storage and dimensions are replaced together.
pub fn rotate_90_cw_in_place<P: Pixel>(raster: &mut Raster<P>) -> TransformResult<()> {
    let (w, h) = raster.size();
    debug!("rotating {}x{} raster 90 degrees clockwise", w, h);
    let data = rotated_90_data(raster, true);
    raster.replace_data(h, w, data)?;
    Ok(())
}

/// Rotate a raster 180 degrees
pub fn rotate_180<P: Pixel>(raster: &Raster<P>) -> Raster<P> {
    let mut out = raster.clone();
    rotate_180_in_place(&mut out);
    out
}

/// Rotate a raster in place by 180 degrees
///
/// In row-major order this is a reversal of the whole buffer.
pub fn rotate_180_in_place<P: Pixel>(raster: &mut Raster<P>) {
    raster.data_mut().reverse();
}

/// Flip a raster left-right (horizontal mirror)
pub fn flip_lr<P: Pixel>(raster: &Raster<P>) -> Raster<P> {
    let mut out = raster.clone();
    flip_lr_in_place(&mut out);
    out
}

/// Flip a raster top-bottom (vertical mirror)
pub fn flip_tb<P: Pixel>(raster: &Raster<P>) -> Raster<P> {
    let mut out = raster.clone();
    flip_tb_in_place(&mut out);
    out
}

/// Flip a raster left-right in place by reversing each row
pub fn flip_lr_in_place<P: Pixel>(raster: &mut Raster<P>) {
    if raster.width() < 2 {
        return;
    }
    for y in 0..raster.height() {
        raster.row_mut(y).reverse();
    }
}

/// Flip a raster top-bottom in place by swapping rows `y` and `height - 1 - y`
pub fn flip_tb_in_place<P: Pixel>(raster: &mut Raster<P>) {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    if w == 0 {
        return;
    }
    let data = raster.data_mut();
    for y in 0..h / 2 {
        let (top, bottom) = data.split_at_mut((h - 1 - y) * w);
        top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpbm_core::{PnmFormat, Rgb};

    /// 3x2 greymap:
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// ```
    fn sample() -> Raster<u8> {
        Raster::from_pixels(3, 2, PnmFormat::BinaryGreymap, 9, vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_flip_lr() {
        let r = flip_lr(&sample());
        assert_eq!(r.data(), &[3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_flip_tb() {
        let r = flip_tb(&sample());
        assert_eq!(r.data(), &[4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_flip_tb_odd_height_keeps_middle_row() {
        let mut r =
            Raster::from_pixels(2, 3, PnmFormat::AsciiGreymap, 9, vec![1u8, 2, 3, 4, 5, 6])
                .unwrap();
        flip_tb_in_place(&mut r);
        assert_eq!(r.data(), &[5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let mut r = sample();
        flip_lr_in_place(&mut r);
        flip_lr_in_place(&mut r);
        assert_eq!(r, sample());
        flip_tb_in_place(&mut r);
        flip_tb_in_place(&mut r);
        assert_eq!(r, sample());
    }

    #[test]
    fn test_rotate_90_cw() {
        let r = rotate_90(&sample(), true).unwrap();
        assert_eq!(r.size(), (2, 3));
        // 4 1
        // 5 2
        // 6 3
        assert_eq!(r.data(), &[4, 1, 5, 2, 6, 3]);
        assert_eq!(r.max_value(), Some(9));
        assert_eq!(r.format(), PnmFormat::BinaryGreymap);
    }

    #[test]
    fn test_rotate_90_ccw() {
        let r = rotate_90(&sample(), false).unwrap();
        assert_eq!(r.size(), (2, 3));
        // 3 6
        // 2 5
        // 1 4
        assert_eq!(r.data(), &[3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn test_rotate_in_place_matches_copy() {
        let mut r = sample();
        rotate_90_cw_in_place(&mut r).unwrap();
        assert_eq!(r, rotate_90(&sample(), true).unwrap());
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let mut r: Raster<Rgb> = Raster::from_pixels(
            2,
            3,
            PnmFormat::AsciiPixmap,
            255,
            vec![
                Rgb::RED,
                Rgb::GREEN,
                Rgb::BLUE,
                Rgb::WHITE,
                Rgb::BLACK,
                Rgb::new(1, 2, 3),
            ],
        )
        .unwrap();
        let original = r.clone();
        for _ in 0..4 {
            rotate_90_cw_in_place(&mut r).unwrap();
        }
        assert_eq!(r, original);
    }

    #[test]
    fn test_rotate_180() {
        let r = rotate_180(&sample());
        assert_eq!(r.data(), &[6, 5, 4, 3, 2, 1]);
        assert_eq!(r, flip_tb(&flip_lr(&sample())));
    }

    #[test]
    fn test_rotate_orth_dispatch() {
        let s = sample();
        assert_eq!(rotate_orth(&s, 0).unwrap(), s);
        assert_eq!(rotate_orth(&s, 5).unwrap(), rotate_90(&s, true).unwrap());
        assert_eq!(rotate_orth(&s, 2).unwrap(), rotate_180(&s));
        assert_eq!(rotate_orth(&s, 3).unwrap(), rotate_90(&s, false).unwrap());
    }

    #[test]
    fn test_zero_sized() {
        let mut r: Raster<bool> = Raster::new(0, 4, PnmFormat::AsciiBitmap).unwrap();
        rotate_90_cw_in_place(&mut r).unwrap();
        assert_eq!(r.size(), (4, 0));
        flip_tb_in_place(&mut r);
        flip_lr_in_place(&mut r);
        assert!(r.is_empty());
    }

    #[test]
    fn test_zero_width_tall_raster() {
        let mut r: Raster<u8> = Raster::new(0, u32::MAX, PnmFormat::BinaryGreymap).unwrap();
        flip_lr_in_place(&mut r);
        flip_tb_in_place(&mut r);
        assert_eq!(rotate_90(&r, false).unwrap().size(), (u32::MAX, 0));
        rotate_90_cw_in_place(&mut r).unwrap();
        assert_eq!(r.size(), (u32::MAX, 0));
        rotate_90_cw_in_place(&mut r).unwrap();
        assert_eq!(r.size(), (0, u32::MAX));
    }
}
