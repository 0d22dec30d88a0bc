//! Scroll affordances for horizontally scrolling card strips.
use crate::constants::{CAROUSEL_SCROLL_STEP, SCROLL_EPSILON};

/// Snapshot of a scroll container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub const fn new(offset: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            offset,
            scroll_width,
            client_width,
        }
    }

    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAffordance {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl Default for ScrollAffordance {
    /// Before the strip is measured only the right arrow shows.
    fn default() -> Self {
        Self {
            can_scroll_left: false,
            can_scroll_right: true,
        }
    }
}

impl ScrollAffordance {
    #[must_use]
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        Self {
            can_scroll_left: metrics.offset > 0.0,
            can_scroll_right: metrics.offset
                < metrics.scroll_width - metrics.client_width - SCROLL_EPSILON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    #[must_use]
    pub const fn delta(self) -> f64 {
        match self {
            Self::Left => -CAROUSEL_SCROLL_STEP,
            Self::Right => CAROUSEL_SCROLL_STEP,
        }
    }
}

/// Offset a scroll command lands on; never wraps past either end.
#[must_use]
pub fn scroll_target(metrics: ScrollMetrics, direction: ScrollDirection) -> f64 {
    (metrics.offset + direction.delta()).clamp(0.0, metrics.max_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_strip_only_scrolls_right() {
        let affordance = ScrollAffordance::from_metrics(ScrollMetrics::new(0.0, 1500.0, 600.0));
        assert!(!affordance.can_scroll_left);
        assert!(affordance.can_scroll_right);
    }

    #[test]
    fn end_of_strip_tolerates_subpixel_rounding() {
        let affordance = ScrollAffordance::from_metrics(ScrollMetrics::new(899.5, 1500.0, 600.0));
        assert!(affordance.can_scroll_left);
        assert!(!affordance.can_scroll_right);
    }

    #[test]
    fn strip_that_fits_shows_no_arrows() {
        let affordance = ScrollAffordance::from_metrics(ScrollMetrics::new(0.0, 500.0, 600.0));
        assert_eq!(
            affordance,
            ScrollAffordance {
                can_scroll_left: false,
                can_scroll_right: false
            }
        );
    }

    #[test]
    fn targets_clamp_without_wrapping() {
        let metrics = ScrollMetrics::new(100.0, 1500.0, 600.0);
        assert!((scroll_target(metrics, ScrollDirection::Left) - 0.0).abs() < f64::EPSILON);
        assert!((scroll_target(metrics, ScrollDirection::Right) - 400.0).abs() < f64::EPSILON);
        let end = ScrollMetrics::new(800.0, 1500.0, 600.0);
        assert!((scroll_target(end, ScrollDirection::Right) - 900.0).abs() < f64::EPSILON);
    }
}
