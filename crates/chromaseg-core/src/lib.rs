//! Chromaseg Core - Basic data structures for color segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the chromaseg segmentation library:
//!
//! - [`Raster`] / [`RasterMut`] - The RGBA image container (immutable / mutable)
//! - [`Color`] - RGBA color value type, with packed-pixel helpers in [`color`]
//! - [`Point`] - Integer pixel coordinate
//!
//! # Pixel layout
//!
//! Pixels are 32-bit words in `0xRRGGBBAA` order (red in MSB, alpha in
//! LSB), stored row-major. All alpha values are carried through
//! operations unchanged.

pub mod color;
pub mod error;
pub mod point;
pub mod raster;

pub use color::Color;
pub use error::{Error, Result};
pub use point::Point;
pub use raster::{Raster, RasterMut};
