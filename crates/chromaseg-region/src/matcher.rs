//! Color similarity predicate
//!
//! Region membership is decided per pixel by comparing each RGB channel
//! against the target color under a fixed threshold. This is a plain
//! box test in RGB space, not a perceptual distance.

use chromaseg_core::Color;

/// Default per-channel threshold for color matching
pub const DEFAULT_COLOR_MATCH_THRESHOLD: u8 = 20;

/// Per-channel color similarity predicate
///
/// Two colors match when the absolute difference of every RGB channel
/// is at most the threshold. The alpha channel is ignored. The
/// threshold is fixed at construction.
///
/// The predicate is pure, total over all color pairs, and symmetric:
/// `matches(a, b) == matches(b, a)`, and `matches(a, a)` is always
/// true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatcher {
    threshold: u8,
}

impl ColorMatcher {
    /// Create a matcher with the given per-channel threshold.
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Get the per-channel threshold.
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Check whether two colors are similar under the threshold.
    #[inline]
    pub fn matches(&self, a: Color, b: Color) -> bool {
        a.r.abs_diff(b.r) <= self.threshold
            && a.g.abs_diff(b.g) <= self.threshold
            && a.b.abs_diff(b.b) <= self.threshold
    }
}

impl Default for ColorMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR_MATCH_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        let matcher = ColorMatcher::default();
        for c in [Color::BLACK, Color::WHITE, Color::rgb(13, 37, 200)] {
            assert!(matcher.matches(c, c));
        }

        // Holds even at threshold 0
        let exact = ColorMatcher::new(0);
        assert!(exact.matches(Color::rgb(5, 5, 5), Color::rgb(5, 5, 5)));
    }

    #[test]
    fn test_symmetric() {
        let matcher = ColorMatcher::default();
        let pairs = [
            (Color::rgb(0, 0, 0), Color::rgb(20, 20, 20)),
            (Color::rgb(0, 0, 0), Color::rgb(21, 0, 0)),
            (Color::rgb(100, 150, 200), Color::rgb(110, 140, 210)),
        ];
        for (a, b) in pairs {
            assert_eq!(matcher.matches(a, b), matcher.matches(b, a));
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let matcher = ColorMatcher::new(20);

        // Exactly at the threshold on every channel: match
        assert!(matcher.matches(Color::rgb(100, 100, 100), Color::rgb(120, 80, 120)));
        // One past the threshold on a single channel: no match
        assert!(!matcher.matches(Color::rgb(100, 100, 100), Color::rgb(121, 100, 100)));
        assert!(!matcher.matches(Color::rgb(100, 100, 100), Color::rgb(100, 121, 100)));
        assert!(!matcher.matches(Color::rgb(100, 100, 100), Color::rgb(100, 100, 121)));
    }

    #[test]
    fn test_alpha_ignored() {
        let matcher = ColorMatcher::new(0);
        assert!(matcher.matches(Color::rgba(1, 2, 3, 0), Color::rgba(1, 2, 3, 255)));
    }
}
