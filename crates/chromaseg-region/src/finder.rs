//! Region discovery and selection
//!
//! The finder scans an image for contiguous regions of pixels similar
//! to a target color. It owns the source image handle, the options it
//! was built with, and the region collection from the most recent
//! pass.

use crate::error::{RegionError, RegionResult};
use crate::flood::flood_fill;
use crate::matcher::{ColorMatcher, DEFAULT_COLOR_MATCH_THRESHOLD};
use crate::region::Region;
use crate::visit::VisitMap;
use chromaseg_core::{Color, Point, Raster};

/// Default minimum pixel count for a region to be kept
pub const DEFAULT_MIN_REGION_SIZE: usize = 5;

/// Options for region segmentation
///
/// Fixed at finder construction; not varied per call.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Per-channel color difference allowed between a pixel and the
    /// target color
    pub color_match_threshold: u8,
    /// Minimum number of pixels for a region to be kept
    pub min_region_size: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            color_match_threshold: DEFAULT_COLOR_MATCH_THRESHOLD,
            min_region_size: DEFAULT_MIN_REGION_SIZE,
        }
    }
}

impl SegmentOptions {
    /// Set the per-channel color match threshold.
    pub fn with_color_match_threshold(mut self, threshold: u8) -> Self {
        self.color_match_threshold = threshold;
        self
    }

    /// Set the minimum region size.
    pub fn with_min_region_size(mut self, min_region_size: usize) -> Self {
        self.min_region_size = min_region_size;
        self
    }
}

/// Region finder
///
/// Finds and holds the contiguous color-similar regions of an image.
/// Each [`find_regions`](Self::find_regions) pass recomputes the
/// collection from scratch; nothing carries over between passes except
/// the source image handle.
///
/// A finder is single-threaded state: `find_regions` takes `&mut self`
/// for the full duration of a pass, so concurrent passes through one
/// finder cannot be expressed. Hosts segmenting frames in parallel use
/// one finder per thread, each with its own (cheaply cloned) `Raster`
/// snapshot.
///
/// # Examples
///
/// ```
/// use chromaseg_core::{Color, RasterMut};
/// use chromaseg_region::RegionFinder;
///
/// let mut rm = RasterMut::new(16, 16).unwrap();
/// rm.fill(Color::rgb(200, 40, 40));
/// let mut finder = RegionFinder::with_image(rm.into());
///
/// let regions = finder.find_regions(Color::rgb(205, 45, 38)).unwrap();
/// assert_eq!(regions.len(), 1);
/// assert_eq!(finder.largest_region().unwrap().len(), 256);
/// ```
#[derive(Debug)]
pub struct RegionFinder {
    options: SegmentOptions,
    matcher: ColorMatcher,
    image: Option<Raster>,
    regions: Vec<Region>,
}

impl RegionFinder {
    /// Create a finder with default options and no source image.
    pub fn new() -> Self {
        Self::with_options(SegmentOptions::default())
    }

    /// Create a finder with the given options and no source image.
    pub fn with_options(options: SegmentOptions) -> Self {
        let matcher = ColorMatcher::new(options.color_match_threshold);
        Self {
            options,
            matcher,
            image: None,
            regions: Vec::new(),
        }
    }

    /// Create a finder with default options over a source image.
    pub fn with_image(image: Raster) -> Self {
        let mut finder = Self::new();
        finder.set_image(image);
        finder
    }

    /// Set the source image for subsequent passes.
    ///
    /// The previous pass's regions stay queryable until the next
    /// [`find_regions`](Self::find_regions) call replaces them.
    pub fn set_image(&mut self, image: Raster) {
        self.image = Some(image);
    }

    /// Get the current source image, if one is set.
    pub fn image(&self) -> Option<&Raster> {
        self.image.as_ref()
    }

    /// Remove and return the current source image.
    pub fn take_image(&mut self) -> Option<Raster> {
        self.image.take()
    }

    /// Get the options this finder was built with.
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Get the color matcher this finder uses.
    pub fn matcher(&self) -> &ColorMatcher {
        &self.matcher
    }

    /// Get the regions from the most recent pass.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Find all regions of pixels similar to `target`.
    ///
    /// Scans the image in column-major order (x outer, y inner) and
    /// flood fills from every unvisited matching pixel. Regions smaller
    /// than the configured minimum size are dropped, but their pixels
    /// stay consumed for the rest of the pass. The kept regions are
    /// stored on the finder, replacing any previous collection, in scan
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::MissingImage`] if no source image is set.
    pub fn find_regions(&mut self, target: Color) -> RegionResult<&[Region]> {
        let image = self.image.as_ref().ok_or(RegionError::MissingImage)?;

        let mut visits = VisitMap::new(image.width(), image.height());
        let mut regions = Vec::new();

        for x in 0..image.width() {
            for y in 0..image.height() {
                let seed = Point::new(x, y);
                if !visits.is_unseen(seed) {
                    continue;
                }
                let color = Color::from_pixel(image.pixel_unchecked(x, y));
                if !self.matcher.matches(color, target) {
                    continue;
                }
                let region = flood_fill(image, seed, target, &self.matcher, &mut visits)?;
                if region.len() >= self.options.min_region_size {
                    regions.push(region);
                }
            }
        }

        self.regions = regions;
        Ok(&self.regions)
    }

    /// Get the largest region from the most recent pass.
    ///
    /// Returns `None` when the collection is empty. When several
    /// regions tie for the maximum size, the last one in scan order
    /// wins (non-strict running-maximum comparison); the rule is
    /// deterministic across repeated passes over the same input.
    pub fn largest_region(&self) -> Option<&Region> {
        let mut largest: Option<&Region> = None;
        for region in &self.regions {
            match largest {
                Some(current) if region.len() < current.len() => {}
                _ => largest = Some(region),
            }
        }
        largest
    }
}

impl Default for RegionFinder {
    fn default() -> Self {
        Self::new()
    }
}
