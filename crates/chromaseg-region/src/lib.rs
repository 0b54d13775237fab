//! chromaseg-region - Color region growing for chromaseg
//!
//! This crate finds contiguous regions of similarly colored pixels in
//! an RGBA raster:
//!
//! - **Color matching** - Per-channel threshold similarity predicate
//! - **Flood fill** - 8-connected region growing from a seed pixel
//! - **Region finding** - Whole-image scan with minimum-size filtering
//! - **Recoloring** - Per-region random-color visualization
//! - **Painting** - Accumulating brush canvas over found regions
//!
//! # Examples
//!
//! ## Finding and selecting regions
//!
//! ```
//! use chromaseg_core::{Color, RasterMut};
//! use chromaseg_region::{RegionFinder, SegmentOptions};
//!
//! // A dark image with a bright 4x4 block
//! let mut rm = RasterMut::new(20, 20).unwrap();
//! rm.fill(Color::rgb(10, 10, 10));
//! for y in 5..9 {
//!     for x in 5..9 {
//!         rm.set_pixel_unchecked(x, y, Color::rgb(250, 250, 250).to_pixel());
//!     }
//! }
//!
//! let options = SegmentOptions::default().with_min_region_size(4);
//! let mut finder = RegionFinder::with_options(options);
//! finder.set_image(rm.into());
//!
//! let regions = finder.find_regions(Color::WHITE).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(finder.largest_region().unwrap().len(), 16);
//! ```
//!
//! ## Recoloring for display
//!
//! ```
//! use chromaseg_core::{Color, RasterMut};
//! use chromaseg_region::RegionFinder;
//!
//! let mut rm = RasterMut::new(8, 8).unwrap();
//! rm.fill(Color::rgb(200, 60, 60));
//! let mut finder = RegionFinder::with_image(rm.into());
//! finder.find_regions(Color::rgb(200, 60, 60)).unwrap();
//!
//! let recolored = finder.recolor().unwrap();
//! assert_eq!(recolored.width(), 8);
//! ```

pub mod error;
pub mod finder;
pub mod flood;
pub mod matcher;
pub mod paint;
pub mod recolor;
pub mod region;
pub mod visit;

// Re-export core types
pub use chromaseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export matcher types
pub use matcher::{ColorMatcher, DEFAULT_COLOR_MATCH_THRESHOLD};

// Re-export finder types and functions
pub use finder::{DEFAULT_MIN_REGION_SIZE, RegionFinder, SegmentOptions};

// Re-export flood fill and its supporting types
pub use flood::flood_fill;
pub use region::Region;
pub use visit::{VisitMap, VisitState};

// Re-export visualization types and functions
pub use paint::Canvas;
pub use recolor::recolor_regions;
