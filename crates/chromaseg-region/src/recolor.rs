//! Region visualization by recoloring
//!
//! Paints each region of a segmentation pass with its own uniformly
//! random opaque color over a copy of the source image, so region
//! extents are visible at a glance. Color choice is a visualization
//! aid only; region membership is what the pass guarantees.

use crate::error::{RegionError, RegionResult};
use crate::finder::RegionFinder;
use crate::region::Region;
use chromaseg_core::{Color, Raster};
use rand::Rng;
use rand::RngExt;

/// Draw one uniformly random opaque color.
fn random_region_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(rng.random(), rng.random(), rng.random())
}

/// Paint every region with its own random color over a copy of `image`.
///
/// Returns a fresh raster: pixels covered by a region all carry that
/// region's color (alpha fully opaque), every other pixel is
/// byte-identical to the source. Regions from one pass are disjoint by
/// construction, so painting order does not matter. Each call draws
/// new colors.
pub fn recolor_regions<R: Rng + ?Sized>(
    image: &Raster,
    regions: &[Region],
    rng: &mut R,
) -> Raster {
    let mut out = image.to_mut();
    for region in regions {
        let pixel = random_region_color(rng).to_pixel();
        for &p in region.points() {
            out.set_pixel_unchecked(p.x, p.y, pixel);
        }
    }
    out.into()
}

impl RegionFinder {
    /// Recolor the source image with the most recent pass's regions.
    ///
    /// Colors come from the thread-local RNG; use
    /// [`recolor_with_rng`](Self::recolor_with_rng) to control them.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::MissingImage`] if no source image is set.
    pub fn recolor(&self) -> RegionResult<Raster> {
        self.recolor_with_rng(&mut rand::rng())
    }

    /// Recolor the source image, drawing region colors from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::MissingImage`] if no source image is set.
    pub fn recolor_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> RegionResult<Raster> {
        let image = self.image().ok_or(RegionError::MissingImage)?;
        Ok(recolor_regions(image, self.regions(), rng))
    }
}
