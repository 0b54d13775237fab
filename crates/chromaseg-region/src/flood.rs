//! Flood fill over color-similar pixels
//!
//! Grows a region from a seed pixel by repeatedly visiting 8-connected
//! neighbors whose colors match a fixed target color. The traversal is
//! an iterative work list, never recursion, so stack depth stays
//! bounded on large matching regions.

use crate::error::{RegionError, RegionResult};
use crate::matcher::ColorMatcher;
use crate::region::Region;
use crate::visit::{VisitMap, VisitState};
use chromaseg_core::{Color, Point, Raster};
use std::collections::VecDeque;

/// Grow one region from a seed pixel.
///
/// Discovers the maximal 8-connected set of coordinates reachable from
/// `seed` in which every pixel individually matches `target` under the
/// matcher. The shared `visits` map is updated as pixels are examined:
/// matching pixels become [`VisitState::Matched`] exactly once, and
/// non-matching neighbors become [`VisitState::Examined`] and are
/// permanently excluded from seeding or joining any later region in
/// the same pass. A non-matching pixel bordering two matching areas is
/// therefore consumed by whichever fill reaches it first and belongs
/// to neither region.
///
/// Neighbor enumeration is clamped to the image bounds; there is no
/// wraparound. Diagonal-only adjacency connects.
///
/// # Arguments
///
/// * `raster` - Source image
/// * `seed` - Starting coordinate
/// * `target` - Fixed color every region pixel must match
/// * `matcher` - Similarity predicate
/// * `visits` - Visit map shared across the whole pass
///
/// # Returns
///
/// The discovered region, in breadth-first discovery order. Size 1 if
/// the seed is isolated; empty if the seed pixel itself does not match
/// `target` (the seed is then marked examined).
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed lies outside the
/// image.
pub fn flood_fill(
    raster: &Raster,
    seed: Point,
    target: Color,
    matcher: &ColorMatcher,
    visits: &mut VisitMap,
) -> RegionResult<Region> {
    if !raster.in_bounds(seed) {
        return Err(RegionError::InvalidSeed {
            x: seed.x,
            y: seed.y,
        });
    }
    debug_assert!(visits.width() == raster.width() && visits.height() == raster.height());

    let width = raster.width();
    let height = raster.height();

    if !matcher.matches(Color::from_pixel(raster.pixel_unchecked(seed.x, seed.y)), target) {
        visits.mark(seed, VisitState::Examined);
        return Ok(Region::new(Vec::new()));
    }

    let mut points = Vec::new();
    let mut frontier = VecDeque::new();
    visits.mark(seed, VisitState::Matched);
    frontier.push_back(seed);

    while let Some(p) = frontier.pop_front() {
        points.push(p);

        // All neighbors within the clamped 3x3 window around p
        for ny in p.y.saturating_sub(1)..=(p.y + 1).min(height - 1) {
            for nx in p.x.saturating_sub(1)..=(p.x + 1).min(width - 1) {
                if nx == p.x && ny == p.y {
                    continue;
                }
                let n = Point::new(nx, ny);
                if !visits.is_unseen(n) {
                    continue;
                }
                let color = Color::from_pixel(raster.pixel_unchecked(nx, ny));
                if matcher.matches(color, target) {
                    visits.mark(n, VisitState::Matched);
                    frontier.push_back(n);
                } else {
                    visits.mark(n, VisitState::Examined);
                }
            }
        }
    }

    Ok(Region::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaseg_core::RasterMut;

    fn raster_from_rows(rows: &[&[Color]]) -> Raster {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut rm = RasterMut::new(width, height).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.iter().enumerate() {
                rm.set_pixel_unchecked(x as u32, y as u32, c.to_pixel());
            }
        }
        rm.into()
    }

    #[test]
    fn test_fill_whole_uniform_image() {
        let raster = {
            let mut rm = RasterMut::new(5, 4).unwrap();
            rm.fill(Color::RED);
            Raster::from(rm)
        };
        let mut visits = VisitMap::new(5, 4);
        let matcher = ColorMatcher::new(0);

        let region =
            flood_fill(&raster, Point::new(2, 2), Color::RED, &matcher, &mut visits).unwrap();
        assert_eq!(region.len(), 20);
    }

    #[test]
    fn test_diagonal_adjacency_connects() {
        let b = Color::BLACK;
        let w = Color::WHITE;
        let raster = raster_from_rows(&[
            &[w, b, b],
            &[b, w, b],
            &[b, b, w],
        ]);
        let mut visits = VisitMap::new(3, 3);
        let matcher = ColorMatcher::new(0);

        let region =
            flood_fill(&raster, Point::new(0, 0), Color::WHITE, &matcher, &mut visits).unwrap();
        assert_eq!(region.len(), 3);
        assert!(region.contains(Point::new(1, 1)));
        assert!(region.contains(Point::new(2, 2)));
    }

    #[test]
    fn test_non_matching_seed_is_examined() {
        let raster = {
            let mut rm = RasterMut::new(3, 3).unwrap();
            rm.fill(Color::BLACK);
            Raster::from(rm)
        };
        let mut visits = VisitMap::new(3, 3);
        let matcher = ColorMatcher::new(0);

        let region =
            flood_fill(&raster, Point::new(1, 1), Color::WHITE, &matcher, &mut visits).unwrap();
        assert!(region.is_empty());
        assert_eq!(visits.state(Point::new(1, 1)), VisitState::Examined);
    }

    #[test]
    fn test_examined_neighbors_are_consumed() {
        // White pillar, gray gap, white pillar: filling the left pillar
        // examines the gap column, so a later fill cannot cross it, but
        // the right pillar is still intact for its own seed.
        let w = Color::WHITE;
        let g = Color::rgb(128, 128, 128);
        let raster = raster_from_rows(&[
            &[w, g, w],
            &[w, g, w],
            &[w, g, w],
        ]);
        let mut visits = VisitMap::new(3, 3);
        let matcher = ColorMatcher::new(0);

        let left =
            flood_fill(&raster, Point::new(0, 0), Color::WHITE, &matcher, &mut visits).unwrap();
        assert_eq!(left.len(), 3);
        for y in 0..3 {
            assert_eq!(visits.state(Point::new(1, y)), VisitState::Examined);
        }

        let right =
            flood_fill(&raster, Point::new(2, 0), Color::WHITE, &matcher, &mut visits).unwrap();
        assert_eq!(right.len(), 3);
        assert!(!right.contains(Point::new(1, 0)));
    }

    #[test]
    fn test_pairwise_distinct_points() {
        let raster = {
            let mut rm = RasterMut::new(4, 4).unwrap();
            rm.fill(Color::GREEN);
            Raster::from(rm)
        };
        let mut visits = VisitMap::new(4, 4);
        let matcher = ColorMatcher::new(0);

        let region =
            flood_fill(&raster, Point::new(0, 0), Color::GREEN, &matcher, &mut visits).unwrap();
        let mut seen = std::collections::HashSet::new();
        for &p in region.points() {
            assert!(seen.insert(p), "duplicate point {:?}", p);
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_invalid_seed() {
        let raster = Raster::new(3, 3).unwrap();
        let mut visits = VisitMap::new(3, 3);
        let matcher = ColorMatcher::default();

        let result = flood_fill(
            &raster,
            Point::new(5, 5),
            Color::WHITE,
            &matcher,
            &mut visits,
        );
        assert!(matches!(result, Err(RegionError::InvalidSeed { x: 5, y: 5 })));
    }
}
