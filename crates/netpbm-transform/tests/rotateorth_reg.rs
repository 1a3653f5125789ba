//! Orthogonal rotation regression test
//!
//! Rotates the bitmap, greymap and pixmap fixtures by 0, 90, 180 and 270
//! degrees and checks dimensions, agreement between the different entry
//! points, and that four quarter turns restore the original.

use netpbm_core::{Pixel, Raster};
use netpbm_test::{RegParams, load_test_image};
use netpbm_transform::{
    rotate_90, rotate_90_cw_in_place, rotate_180, rotate_180_in_place, rotate_orth,
    rotate_orth_image,
};

#[test]
fn rotateorth_reg() {
    let mut rp = RegParams::new("rotateorth");

    let bits = load_test_image("letter_j.pbm").expect("load bitmap");
    test_orth_rotation(&mut rp, bits.as_bitmap().expect("bitmap"), "bit");

    let grey = load_test_image("ramp.pgm").expect("load greymap");
    test_orth_rotation(&mut rp, grey.as_greymap().expect("greymap"), "grey");

    let rgb = load_test_image("primaries_bin.ppm").expect("load pixmap");
    test_orth_rotation(&mut rp, rgb.as_pixmap().expect("pixmap"), "rgb");

    // Image-level dispatch agrees with the typed functions
    let r1 = rotate_orth_image(&grey, 1).expect("rotate image");
    let r1_typed = rotate_90(grey.as_greymap().expect("greymap"), true).expect("rotate raster");
    rp.compare_raster(r1.as_greymap().expect("greymap"), &r1_typed);

    assert!(rp.cleanup(), "rotateorth regression test failed");
}

fn test_orth_rotation<P: Pixel>(rp: &mut RegParams, raster: &Raster<P>, label: &str) {
    let (w, h) = raster.size();
    eprintln!("Testing {} orthogonal rotation: {}x{}", label, w, h);

    // --- rotate_orth(0) = identity ---
    let r0 = rotate_orth(raster, 0).expect("rotate_orth 0");
    rp.compare_raster(raster, &r0);

    // --- rotate_orth(1) = 90 CW ---
    let r1 = rotate_orth(raster, 1).expect("rotate_orth 1");
    rp.compare_values(h as f64, r1.width() as f64, 0.0);
    rp.compare_values(w as f64, r1.height() as f64, 0.0);
    let r90 = rotate_90(raster, true).expect("rotate_90 cw");
    rp.compare_raster(&r1, &r90);

    // The top-left pixel lands in the top-right corner
    rp.compare_values(
        1.0,
        if r1.get_pixel(h - 1, 0) == raster.get_pixel(0, 0) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    let mut in_place = raster.clone();
    rotate_90_cw_in_place(&mut in_place).expect("rotate in place");
    rp.compare_raster(&r1, &in_place);

    // --- rotate_orth(2) = 180 ---
    let r2 = rotate_orth(raster, 2).expect("rotate_orth 2");
    rp.compare_raster(&r2, &rotate_180(raster));
    let mut in_place = raster.clone();
    rotate_180_in_place(&mut in_place);
    rp.compare_raster(&r2, &in_place);

    // --- rotate_orth(3) = 270 CW = 90 CCW ---
    let r3 = rotate_orth(raster, 3).expect("rotate_orth 3");
    let r90ccw = rotate_90(raster, false).expect("rotate_90 ccw");
    rp.compare_raster(&r3, &r90ccw);

    // --- 4 orthogonal rotations = identity ---
    let r4 = rotate_orth(&r3, 1).expect("4th rotation");
    rp.compare_raster(raster, &r4);

    let mut spun = raster.clone();
    for _ in 0..4 {
        rotate_90_cw_in_place(&mut spun).expect("rotate in place");
    }
    rp.compare_raster(raster, &spun);
}
