//! Raster container regression test
//!
//! Run with:
//! ```
//! cargo test -p chromaseg-core --test raster_reg
//! ```

use chromaseg_core::{Color, Raster, RasterMut, color};
use chromaseg_test::{RegParams, solid_raster};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    // Construction and dimensions
    let pixs = solid_raster(17, 13, Color::rgb(0x30, 0x70, 0xa0));
    rp.compare_values(17.0, pixs.width() as f64, 0.0);
    rp.compare_values(13.0, pixs.height() as f64, 0.0);

    // Packed channel layout
    let pixel = pixs.pixel(0, 0).unwrap();
    rp.compare_values(0x30 as f64, color::red(pixel) as f64, 0.0);
    rp.compare_values(0x70 as f64, color::green(pixel) as f64, 0.0);
    rp.compare_values(0xa0 as f64, color::blue(pixel) as f64, 0.0);
    rp.compare_values(0xff as f64, color::alpha(pixel) as f64, 0.0);

    // Shared handles vs deep copies
    let shared = pixs.clone();
    rp.compare_values(2.0, pixs.ref_count() as f64, 0.0);
    let deep = pixs.deep_clone();
    rp.compare_values(1.0, deep.ref_count() as f64, 0.0);
    rp.compare_raster(&pixs, &deep);
    drop(shared);

    // Mutation through to_mut leaves the source untouched
    let mut pm = pixs.to_mut();
    pm.set_color(5, 5, Color::RED).unwrap();
    let modified: Raster = pm.into();
    rp.compare_values(
        1.0,
        (pixs.color_at(5, 5) != modified.color_at(5, 5)) as u32 as f64,
        0.0,
    );

    // Checked access rejects out-of-range coordinates
    rp.compare_values(1.0, pixs.pixel(17, 0).is_none() as u32 as f64, 0.0);
    let mut pm = RasterMut::new(4, 4).unwrap();
    rp.compare_values(1.0, pm.set_pixel(0, 4, 0).is_err() as u32 as f64, 0.0);

    // Zero dimensions are rejected at construction
    rp.compare_values(1.0, Raster::new(0, 9).is_err() as u32 as f64, 0.0);
    rp.compare_values(
        1.0,
        Raster::from_pixels(3, 3, vec![0; 8]).is_err() as u32 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "raster regression test failed");
}
