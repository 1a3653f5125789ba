//! Regression test parameters and operations

use crate::error::TestResult;
use crate::{read_image_file, regout_dir, write_image_file};
use netpbm_core::{Image, Pixel, Raster};
use std::fs;

/// Regression test parameters
///
/// Tracks the test name, the index of the current check and every failure
/// recorded so far. Checks never panic; call [`RegParams::cleanup`] at the
/// end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "pnmio")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "pnmio")
    pub fn new(test_name: &str) -> Self {
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    ///
    /// Format, dimensions, max value and every pixel must match. The first
    /// differing pixel is reported.
    pub fn compare_raster<P: Pixel>(&mut self, r1: &Raster<P>, r2: &Raster<P>) -> bool {
        self.index += 1;

        if r1.format() != r2.format() || r1.max_value() != r2.max_value() {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - \
                 {} max {:?} vs {} max {:?}",
                self.test_name,
                self.index,
                r1.format(),
                r1.max_value(),
                r2.format(),
                r2.max_value()
            );
            return self.fail(msg);
        }

        if r1.size() != r2.size() {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - size mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                r1.size(),
                r2.size()
            );
            return self.fail(msg);
        }

        for y in 0..r1.height() {
            for x in 0..r1.width() {
                if r1.get_pixel(x, y) != r2.get_pixel(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: raster comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Compare two images of any class for exact equality
    pub fn compare_images(&mut self, img1: &Image, img2: &Image) -> bool {
        match (img1, img2) {
            (Image::Bitmap(a), Image::Bitmap(b)) => self.compare_raster(a, b),
            (Image::Greymap(a), Image::Greymap(b)) => self.compare_raster(a, b),
            (Image::Pixmap(a), Image::Pixmap(b)) => self.compare_raster(a, b),
            _ => {
                self.index += 1;
                let msg = format!(
                    "Failure in {}_reg: image comparison for index {} - class mismatch {:?} vs {:?}",
                    self.test_name,
                    self.index,
                    img1.kind(),
                    img2.kind()
                );
                self.fail(msg)
            }
        }
    }

    /// Compare two byte sequences
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_bytes(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let first_diff = data1
                .iter()
                .zip(data2)
                .position(|(a, b)| a != b)
                .unwrap_or(data1.len().min(data2.len()));
            let msg = format!(
                "Failure in {}_reg: byte comparison for index {}\n\
                 sizes: {} vs {}, first difference at offset {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                first_diff
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Write an image to the regout directory, read it back and compare
    ///
    /// The file is named `<test>.<index>.<ext>` and written in the image's
    /// own format.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the file decodes to an identical image.
    pub fn write_image_and_check(&mut self, image: &Image) -> TestResult<bool> {
        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index + 1,
            image.format().extension()
        );

        write_image_file(image, &local_path)?;
        let back = read_image_file(&local_path)?;

        Ok(self.compare_images(image, &back))
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpbm_core::PnmFormat;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_raster() {
        let mut rp = RegParams::new("test");
        let a: Raster<u8> = Raster::new(2, 2, PnmFormat::BinaryGreymap).unwrap();
        let mut b = a.clone();
        assert!(rp.compare_raster(&a, &b));
        b.set_pixel(1, 1, 9).unwrap();
        assert!(!rp.compare_raster(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
    }

    #[test]
    fn test_compare_raster_format_differs() {
        let mut rp = RegParams::new("test");
        let a: Raster<bool> = Raster::new(1, 1, PnmFormat::AsciiBitmap).unwrap();
        let b = a.clone().into_format(PnmFormat::BinaryBitmap).unwrap();
        assert!(!rp.compare_raster(&a, &b));
    }

    #[test]
    fn test_compare_images_class_mismatch() {
        let mut rp = RegParams::new("test");
        let a: Image = Raster::<u8>::new(1, 1, PnmFormat::BinaryGreymap)
            .unwrap()
            .into();
        let b: Image = Raster::<bool>::new(1, 1, PnmFormat::BinaryBitmap)
            .unwrap()
            .into();
        assert!(!rp.compare_images(&a, &b));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_bytes() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_bytes(b"abc", b"abc"));
        assert!(!rp.compare_bytes(b"abc", b"abd"));
        assert!(rp.failures()[0].contains("offset 2"));
    }
}
