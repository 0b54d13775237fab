//! Painting canvas
//!
//! An accumulating paint layer for brush-style applications that track
//! a region across frames (for example, painting with the largest
//! region found in each camera frame). The canvas starts fully
//! transparent and only ever receives explicit paint; compositing it
//! over a background image is the caller's final display step.

use crate::error::RegionResult;
use crate::region::Region;
use chromaseg_core::{Color, Error, Point, Raster, RasterMut};

/// Accumulating transparent paint layer
///
/// # Examples
///
/// ```
/// use chromaseg_core::{Color, Point};
/// use chromaseg_region::Canvas;
///
/// let mut canvas = Canvas::new(32, 32).unwrap();
/// canvas.paint_point(Point::new(3, 4), Color::BLUE);
/// assert_eq!(canvas.color_at(3, 4), Some(Color::BLUE));
/// canvas.clear();
/// assert_eq!(canvas.color_at(3, 4), Some(Color::TRANSPARENT));
/// ```
#[derive(Debug)]
pub struct Canvas {
    layer: RasterMut,
}

impl Canvas {
    /// Create a fully transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> RegionResult<Self> {
        Ok(Self {
            layer: RasterMut::new(width, height)?,
        })
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.layer.width()
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.layer.height()
    }

    /// Get the color at (x, y), or `None` out of bounds.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.layer.pixel(x, y).map(Color::from_pixel)
    }

    /// Paint a single point with the brush color.
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the canvas; callers paint
    /// regions found on images of the canvas's own size.
    pub fn paint_point(&mut self, p: Point, brush: Color) {
        self.layer.set_pixel_unchecked(p.x, p.y, brush.to_pixel());
    }

    /// Paint every coordinate of a region with the brush color.
    ///
    /// Paint accumulates across calls until [`clear`](Self::clear).
    ///
    /// # Panics
    ///
    /// Panics if any region coordinate lies outside the canvas.
    pub fn paint_region(&mut self, region: &Region, brush: Color) {
        let pixel = brush.to_pixel();
        for &p in region.points() {
            self.layer.set_pixel_unchecked(p.x, p.y, pixel);
        }
    }

    /// Reset the whole canvas to transparent.
    pub fn clear(&mut self) {
        self.layer.clear();
    }

    /// Snapshot the paint layer as an immutable raster.
    pub fn to_raster(&self) -> Raster {
        Raster::from_pixels(
            self.layer.width(),
            self.layer.height(),
            self.layer.data().to_vec(),
        )
        .expect("canvas dimensions are valid")
    }

    /// Overlay the painted pixels onto a background image.
    ///
    /// Unpainted (transparent) canvas pixels show the background;
    /// painted pixels replace it. Returns a fresh raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the background size
    /// differs from the canvas.
    pub fn composite_over(&self, background: &Raster) -> RegionResult<Raster> {
        if background.width() != self.width() || background.height() != self.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (background.width(), background.height()),
            }
            .into());
        }

        let mut out = background.to_mut();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let pixel = self.layer.pixel_unchecked(x, y);
                if !Color::from_pixel(pixel).is_transparent() {
                    out.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        Ok(out.into())
    }
}
