//! Raster - the image container
//!
//! A `Raster` is a fixed-size grid of 32-bit RGBA pixels, stored
//! row-major as packed `0xRRGGBBAA` words.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], then convert back
//! with `Into<Raster>`. This makes "immutable source image, fresh
//! mutable output buffer" the natural shape of every operation.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::point::Point;
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data, row-major packed `0xRRGGBBAA` words
    data: Vec<u32>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Immutable RGBA image
///
/// Cloning a `Raster` is cheap: handles share pixel data via `Arc`.
///
/// # Examples
///
/// ```
/// use chromaseg_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all pixels transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u32; (width as usize) * (height as usize)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a raster from an existing pixel buffer.
    ///
    /// The buffer is row-major, `width * height` packed `0xRRGGBBAA`
    /// words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::BufferSizeMismatch`] if the buffer length does not
    /// equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether a point lies within the image bounds.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x < self.inner.width && p.y < self.inner.height
    }

    /// Check if another raster has the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get a packed pixel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.inner.width && y < self.inner.height {
            Some(self.inner.data[self.inner.index(x, y)])
        } else {
            None
        }
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Out-of-range access is
    /// a programming error, not a recoverable condition.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel out of bounds: ({}, {}) in {}x{}",
            x,
            y,
            self.inner.width,
            self.inner.height
        );
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get the color at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel(x, y).map(Color::from_pixel)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified; the original is
    /// unaffected.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of pixel data with exclusive access enforced at
/// compile time. Convert back to an immutable [`Raster`] using
/// `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new mutable raster with all pixels transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Raster::new(width, height)?
            .try_into_mut()
            .unwrap_or_else(|r| r.to_mut()))
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get a packed pixel value at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.inner.width && y < self.inner.height {
            Some(self.inner.data[self.inner.index(x, y)])
        } else {
            None
        }
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel out of bounds: ({}, {}) in {}x{}",
            x,
            y,
            self.inner.width,
            self.inner.height
        );
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set a packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out
    /// of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
        Ok(())
    }

    /// Set a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel out of bounds: ({}, {}) in {}x{}",
            x,
            y,
            self.inner.width,
            self.inner.height
        );
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out
    /// of bounds.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Clear all pixels to transparent black.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }

    /// Fill every pixel with a single color.
    pub fn fill(&mut self, color: Color) {
        self.inner.data.fill(color.to_pixel());
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
