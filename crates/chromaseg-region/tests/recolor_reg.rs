//! Recolor and painting regression test
//!
//! Checks the recolor round-trip properties (untouched pixels
//! byte-identical, region pixels uniform per region) and the painting
//! canvas over the largest region, the library half of a
//! paint-with-your-webcam application loop.
//!
//! Run with:
//! ```
//! cargo test -p chromaseg-region --test recolor_reg
//! ```

use chromaseg_core::{Color, Raster};
use chromaseg_region::{Canvas, RegionFinder, SegmentOptions};
use chromaseg_test::{RegParams, raster_with_points, solid_raster};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn blob_image() -> Raster {
    // Two blobs of different sizes on black
    let mut points = Vec::new();
    for y in 1..4 {
        for x in 1..4 {
            points.push((x, y));
        }
    }
    for y in 6..12 {
        for x in 8..13 {
            points.push((x, y));
        }
    }
    raster_with_points(16, 16, Color::BLACK, Color::rgb(240, 240, 240), &points)
}

#[test]
fn recolor_reg() {
    let mut rp = RegParams::new("recolor");

    let pixs = blob_image();
    let options = SegmentOptions::default().with_color_match_threshold(20);
    let mut finder = RegionFinder::with_options(options);
    finder.set_image(pixs.clone());
    finder.find_regions(Color::WHITE).unwrap();
    rp.compare_values(2.0, finder.regions().len() as f64, 0.0); // 1

    let mut rng = StdRng::seed_from_u64(1234);
    let recolored = match finder.recolor_with_rng(&mut rng) {
        Ok(r) => r,
        Err(e) => panic!("recolor failed: {}", e),
    };

    // Region pixels uniform within each region
    let mut nonuniform = 0;
    let mut covered = std::collections::HashSet::new();
    for region in finder.regions() {
        let first = region.points()[0];
        let expected = recolored.pixel_unchecked(first.x, first.y);
        for &p in region.points() {
            if recolored.pixel_unchecked(p.x, p.y) != expected {
                nonuniform += 1;
            }
            covered.insert(p);
        }
    }
    rp.compare_values(0.0, nonuniform as f64, 0.0); // 2

    // Pixels outside every region byte-identical to the source
    let mut touched = 0;
    for y in 0..pixs.height() {
        for x in 0..pixs.width() {
            let p = chromaseg_core::Point::new(x, y);
            if !covered.contains(&p) && recolored.pixel(x, y) != pixs.pixel(x, y) {
                touched += 1;
            }
        }
    }
    rp.compare_values(0.0, touched as f64, 0.0); // 3

    // Membership is deterministic across passes even though colors
    // are not: a second pass finds the same regions.
    let sizes_before: Vec<usize> = finder.regions().iter().map(|r| r.len()).collect();
    finder.find_regions(Color::WHITE).unwrap();
    let sizes_after: Vec<usize> = finder.regions().iter().map(|r| r.len()).collect();
    rp.compare_values(
        1.0,
        (sizes_before == sizes_after) as u32 as f64,
        0.0,
    ); // 4

    // -----------------------------------------------------------
    // Painting: stamp the largest region onto a canvas, composite
    // over the source, and verify only painted pixels changed.
    // -----------------------------------------------------------
    let mut canvas = Canvas::new(pixs.width(), pixs.height()).unwrap();
    let brush = Color::BLUE;
    let largest = finder.largest_region().expect("regions present").clone();
    canvas.paint_region(&largest, brush);

    let composited = match canvas.composite_over(&pixs) {
        Ok(r) => r,
        Err(e) => panic!("composite failed: {}", e),
    };

    let mut bad = 0;
    for y in 0..pixs.height() {
        for x in 0..pixs.width() {
            let p = chromaseg_core::Point::new(x, y);
            let expected = if largest.contains(p) {
                Some(brush)
            } else {
                pixs.color_at(x, y)
            };
            if composited.color_at(x, y) != expected {
                bad += 1;
            }
        }
    }
    rp.compare_values(0.0, bad as f64, 0.0); // 5
    rp.compare_values(30.0, largest.len() as f64, 0.0); // 6: 5x6 blob

    // Clearing the canvas makes compositing the identity.
    canvas.clear();
    let composited = canvas.composite_over(&pixs).unwrap();
    rp.compare_raster(&composited, &pixs); // 7

    // Compositing over a mismatched background is an error.
    let small = solid_raster(4, 4, Color::BLACK);
    rp.compare_values(
        1.0,
        canvas.composite_over(&small).is_err() as u32 as f64,
        0.0,
    ); // 8

    assert!(rp.cleanup(), "recolor regression test failed");
}
