//! Per-pass visit tracking
//!
//! One segmentation pass examines each pixel at most once. The map
//! distinguishes pixels that were examined and rejected from pixels
//! claimed by a region, so the exclusion of rejected pixels is an
//! explicit state rather than a side effect of traversal order.

use chromaseg_core::Point;

/// Visit state of a single pixel within one segmentation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Not yet examined; may still seed or join a region
    #[default]
    Unseen,
    /// Examined and found not to match the target color. Permanently
    /// excluded: it will never seed a region and never be re-examined
    /// as a neighbor.
    Examined,
    /// Claimed by a region. Each pixel reaches this state at most once
    /// per pass, which keeps region coordinates pairwise distinct.
    Matched,
}

/// Visit map for one segmentation pass
///
/// Sized to the image at the start of a pass and dropped at its end;
/// never reused across passes.
#[derive(Debug)]
pub struct VisitMap {
    width: u32,
    height: u32,
    states: Vec<VisitState>,
}

impl VisitMap {
    /// Create a map with every pixel unseen.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            states: vec![VisitState::Unseen; (width as usize) * (height as usize)],
        }
    }

    /// Map width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        assert!(
            p.x < self.width && p.y < self.height,
            "visit out of bounds: ({}, {}) in {}x{}",
            p.x,
            p.y,
            self.width,
            self.height
        );
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// Get the state of a pixel.
    ///
    /// # Panics
    ///
    /// Panics if the point is out of bounds.
    #[inline]
    pub fn state(&self, p: Point) -> VisitState {
        self.states[self.index(p)]
    }

    /// Whether a pixel has not been examined yet.
    #[inline]
    pub fn is_unseen(&self, p: Point) -> bool {
        self.state(p) == VisitState::Unseen
    }

    /// Mark a pixel's state.
    ///
    /// # Panics
    ///
    /// Panics if the point is out of bounds.
    #[inline]
    pub fn mark(&mut self, p: Point, state: VisitState) {
        let idx = self.index(p);
        self.states[idx] = state;
    }
}
