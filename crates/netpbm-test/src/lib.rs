//! netpbm-test - Regression test framework for netpbm-rs
//!
//! Each `tests/*_reg.rs` file drives a [`RegParams`], records a series of
//! numbered checks and asserts on the final result:
//!
//! ```ignore
//! use netpbm_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("pnmio");
//! let image = load_test_image("letter_j.pbm").unwrap();
//! rp.compare_values(6.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Fixtures live in `tests/data/images` at the workspace root; files written
//! by checks go to `tests/regout`.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use netpbm_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "letter_j.pbm")
pub fn load_test_image(name: &str) -> TestResult<Image> {
    read_image_file(&test_data_path(name))
}

/// Decode the image stored at `path`
pub(crate) fn read_image_file(path: &str) -> TestResult<Image> {
    let load_err = |message: String| TestError::ImageLoad {
        path: path.to_string(),
        message,
    };
    let file = File::open(path).map_err(|e| load_err(e.to_string()))?;
    netpbm_io::decode(BufReader::new(file)).map_err(|e| load_err(e.to_string()))
}

/// Encode `image` in its own format to `path`
pub(crate) fn write_image_file(image: &Image, path: &str) -> TestResult<()> {
    let write_err = |message: String| TestError::ImageWrite {
        path: path.to_string(),
        message,
    };
    let file = File::create(path).map_err(|e| write_err(e.to_string()))?;
    netpbm_io::encode_image(image, image.format(), BufWriter::new(file))
        .map_err(|e| write_err(e.to_string()))
}

/// Read the raw bytes of a test data file
pub fn load_test_bytes(name: &str) -> TestResult<Vec<u8>> {
    Ok(std::fs::read(test_data_path(name))?)
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // netpbm-test is at crates/netpbm-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
