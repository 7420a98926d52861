use web_sys::{window, Element};

use crate::config::{DESKTOP_MIN_WIDTH, DESKTOP_QUERY};

/// Vertical scroll range during which the horizontal strip is pinned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRegion {
    pub start: f64,
    pub end: f64,
    pub total_panels: usize,
}

impl PinnedRegion {
    pub fn new(start: f64, travel: f64, total_panels: usize) -> Self {
        Self {
            start,
            end: start + travel.max(0.0),
            total_panels,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Horizontal progress for an absolute scroll position, clamped to `[0, 1]`.
    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }

    pub fn offset_at(&self, progress: f64) -> f64 {
        self.start + self.span() * progress.clamp(0.0, 1.0)
    }
}

/// Breakpoint class for a media-query answer, or for the raw width when the
/// query could not be evaluated.
pub fn classify_viewport(query_matches: Option<bool>, width: f64) -> bool {
    query_matches.unwrap_or(width >= DESKTOP_MIN_WIDTH)
}

pub fn is_desktop_viewport() -> bool {
    let matches = window()
        .and_then(|w| w.match_media(DESKTOP_QUERY).ok().flatten())
        .map(|mql| mql.matches());
    classify_viewport(matches, viewport_width())
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Absolute document offset of the element's top edge.
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

/// Pixels the strip has to move left to bring its last panel into view.
pub fn horizontal_travel(strip: &Element) -> f64 {
    (f64::from(strip.scroll_width()) - viewport_width()).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_the_region() {
        let region = PinnedRegion::new(1000.0, 3000.0, 3);
        assert_eq!(region.end, 4000.0);
        assert_eq!(region.progress_at(500.0), 0.0);
        assert_eq!(region.progress_at(2500.0), 0.5);
        assert_eq!(region.progress_at(9000.0), 1.0);
        assert_eq!(region.offset_at(0.5), 2500.0);
    }

    #[test]
    fn zero_travel_never_divides_by_zero() {
        let region = PinnedRegion::new(400.0, -20.0, 1);
        assert_eq!(region.span(), 0.0);
        assert_eq!(region.progress_at(400.0), 0.0);
        assert_eq!(region.progress_at(10_000.0), 0.0);
    }

    #[test]
    fn width_decides_when_the_media_query_is_unavailable() {
        assert!(classify_viewport(None, 1280.0));
        assert!(classify_viewport(None, DESKTOP_MIN_WIDTH));
        assert!(!classify_viewport(None, 767.0));
        // A live query answer wins over the measured width
        assert!(!classify_viewport(Some(false), 1280.0));
        assert!(classify_viewport(Some(true), 320.0));
    }
}
