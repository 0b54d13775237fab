//! chromaseg-test - Regression test framework for chromaseg
//!
//! This crate provides a regression test harness supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use chromaseg_test::RegParams;
//!
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(9.0, region_size as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//!
//! Since the segmentation core has no image I/O, tests build their
//! inputs synthetically; the builders here cover the common shapes.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use chromaseg_core::{Color, Raster, RasterMut};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // chromaseg-test is at crates/chromaseg-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a raster with every pixel set to one color.
pub fn solid_raster(width: u32, height: u32, color: Color) -> Raster {
    let mut rm = RasterMut::new(width, height).expect("valid test dimensions");
    rm.fill(color);
    rm.into()
}

/// Build a raster from a background color and a list of foreground points.
pub fn raster_with_points(
    width: u32,
    height: u32,
    background: Color,
    foreground: Color,
    points: &[(u32, u32)],
) -> Raster {
    let mut rm = RasterMut::new(width, height).expect("valid test dimensions");
    rm.fill(background);
    for &(x, y) in points {
        rm.set_pixel_unchecked(x, y, foreground.to_pixel());
    }
    rm.into()
}
