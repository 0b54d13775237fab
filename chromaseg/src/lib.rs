//! Chromaseg - Color-based region segmentation for raster images
//!
//! Given a target color, chromaseg partitions an RGBA image into
//! contiguous 8-connected regions of similar color, filters out
//! regions below a minimum size, and exposes the largest surviving
//! region plus a recolored visualization of all regions.
//!
//! Camera capture, windowing, input handling, and file persistence are
//! deliberately left to the host application; this library starts at
//! an in-memory [`Raster`] and ends at in-memory results.
//!
//! # Example
//!
//! ```
//! use chromaseg::{Color, RasterMut};
//! use chromaseg::region::RegionFinder;
//!
//! // Build a frame with a red blob on gray
//! let mut rm = RasterMut::new(64, 64).unwrap();
//! rm.fill(Color::rgb(128, 128, 128));
//! for y in 10..20 {
//!     for x in 10..20 {
//!         rm.set_pixel_unchecked(x, y, Color::rgb(220, 30, 30).to_pixel());
//!     }
//! }
//!
//! let mut finder = RegionFinder::with_image(rm.into());
//! finder.find_regions(Color::rgb(220, 30, 30)).unwrap();
//! assert_eq!(finder.largest_region().unwrap().len(), 100);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chromaseg_core::*;

// Re-export the domain crate as a module to avoid name conflicts
pub use chromaseg_region as region;
