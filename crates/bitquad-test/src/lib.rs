//! bitquad-test - Regression test framework for bitquad
//!
//! Each regression test creates a [`RegParams`], runs a numbered series of
//! checks through it and asserts on [`RegParams::cleanup`]. Checks that
//! write files compare them with golden copies, depending on the mode:
//!
//! - **Generate**: Copy outputs into the golden directory
//! - **Compare**: Compare outputs with the golden files (default)
//! - **Display**: Run the checks without golden comparison
//!
//! # Usage
//!
//! ```ignore
//! use bitquad_test::RegParams;
//!
//! let mut rp = RegParams::new("quadtree");
//! rp.compare_values(9.0, covered_area as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test image from the test data directory as a bitmap
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "letter_a.pbm")
pub fn load_test_bitmap(name: &str) -> TestResult<bitquad_core::Bitmap> {
    let path = test_data_path(name);
    bitquad_io::read_bitmap(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bitquad-test is at crates/bitquad-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
