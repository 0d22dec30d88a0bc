//! Page-number window for the pager control.
use serde::Serialize;
use smallvec::SmallVec;

use crate::constants::PAGINATION_DELTA;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

pub type PageMarkers = SmallVec<[PageMarker; 9]>;

/// Markers for the pager: first and last page, `delta` pages around the
/// current one, and an ellipsis for every gap wider than one page.
///
/// Returns nothing when there is at most one page.
#[must_use]
pub fn page_markers(current: usize, total: usize) -> PageMarkers {
    page_markers_with_delta(current, total, PAGINATION_DELTA)
}

#[must_use]
pub fn page_markers_with_delta(current: usize, total: usize, delta: usize) -> PageMarkers {
    let mut markers = PageMarkers::new();
    if total <= 1 {
        return markers;
    }
    let current = current.clamp(1, total);
    let low = current.saturating_sub(delta);
    let high = current.saturating_add(delta);

    let mut previous: Option<usize> = None;
    for page in (1..=total).filter(|&page| page == 1 || page == total || (low..=high).contains(&page)) {
        if let Some(last) = previous {
            match page - last {
                1 => {}
                2 => markers.push(PageMarker::Page(last + 1)),
                _ => markers.push(PageMarker::Ellipsis),
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}

/// Previous/next state for a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    current: usize,
    total: usize,
}

impl PagerState {
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current: current.clamp(1, total.max(1)),
            total,
        }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Whether the pager renders at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total > 1
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total
    }

    #[must_use]
    pub fn previous(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    #[must_use]
    pub fn next(&self) -> usize {
        (self.current + 1).min(self.total.max(1))
    }

    #[must_use]
    pub fn markers(&self) -> PageMarkers {
        page_markers(self.current, self.total)
    }
}
