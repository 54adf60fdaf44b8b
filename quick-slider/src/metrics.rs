//! Per-page measurements taken once when a slider is built.
//!
//! Pages must keep their height afterwards; nothing here re-measures.

use tracing::debug;

use crate::{config::ScrollTracking, surface::PageSurface};

/// Measured data for one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMetrics {
    height: f32,
    is_long: bool,
    scroll_top: f32,
    max_scroll: f32,
}

impl PageMetrics {
    /// Classifies a page of `height` inside a viewport of `viewport_height`.
    ///
    /// A page is long when it overflows the viewport or is explicitly
    /// `marked_long`. A marked page that fits keeps `max_scroll == 0`.
    pub fn measure(height: f32, viewport_height: f32, marked_long: bool) -> Self {
        let overflow = height - viewport_height;
        let is_long = overflow > 0.0 || marked_long;
        Self {
            height,
            is_long,
            scroll_top: 0.0,
            max_scroll: if is_long { overflow.max(0.0) } else { 0.0 },
        }
    }

    /// Measures every page of `surface` and enables native scrolling on the
    /// long ones.
    pub fn compute_all<S: PageSurface>(
        surface: &mut S,
        viewport_height: f32,
        long_attribute: &str,
    ) -> Vec<Self> {
        (0..surface.page_count())
            .map(|index| {
                let metrics = Self::measure(
                    surface.scroll_height(index),
                    viewport_height,
                    surface.is_marked_long(index, long_attribute),
                );
                if metrics.is_long {
                    surface.enable_native_scroll(index);
                }
                debug!(
                    index,
                    height = metrics.height,
                    is_long = metrics.is_long,
                    max_scroll = metrics.max_scroll,
                    "measured page"
                );
                metrics
            })
            .collect()
    }

    /// Measured content height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Whether the page scrolls internally before paging.
    pub fn is_long(&self) -> bool {
        self.is_long
    }

    /// Tracked internal scroll position.
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Largest reachable internal scroll position.
    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    /// Whether the page sits at its bottom edge.
    pub fn at_bottom(&self) -> bool {
        !self.is_long || self.max_scroll <= self.scroll_top
    }

    /// Whether the page sits at its top edge.
    pub fn at_top(&self) -> bool {
        !self.is_long || self.scroll_top <= 0.0
    }

    /// Replaces the tracked position with the rendered one.
    ///
    /// Short pages never scroll and ignore the update.
    pub fn resync(&mut self, rendered_scroll_top: f32) {
        if self.is_long {
            self.scroll_top = rendered_scroll_top;
        }
    }

    /// Applies a vertical swipe of `delta_y` to the tracked position and
    /// returns how far the page could actually move.
    ///
    /// The reachable target is clamped to `0..=max_scroll`; `tracking`
    /// decides whether the stored position is the clamped target or the raw
    /// `scroll_top - delta_y`. Short pages report `0.0` and stay put.
    pub fn track_swipe(&mut self, delta_y: f32, tracking: ScrollTracking) -> f32 {
        if !self.is_long {
            return 0.0;
        }
        let previous = self.scroll_top;
        let desired = previous - delta_y;
        let next = desired.clamp(0.0, self.max_scroll);
        self.scroll_top = match tracking {
            ScrollTracking::Unclamped => desired,
            ScrollTracking::Clamped => next,
        };
        (next - previous).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn short_page_has_no_scroll_range() {
        let page = PageMetrics::measure(600.0, 600.0, false);
        assert!(!page.is_long());
        assert_eq!(page.max_scroll(), 0.0);
        assert!(page.at_top() && page.at_bottom());
    }

    #[test]
    fn overflowing_page_is_long() {
        let page = PageMetrics::measure(1000.0, 600.0, false);
        assert!(page.is_long());
        assert_eq!(page.max_scroll(), 400.0);
    }

    #[test]
    fn marked_page_is_long_without_range() {
        let page = PageMetrics::measure(300.0, 600.0, true);
        assert!(page.is_long());
        assert_eq!(page.max_scroll(), 0.0);
    }

    #[test]
    fn long_flag_matches_scroll_range_for_measured_pages() {
        for height in [0.0, 599.0, 600.0, 601.0, 1200.0] {
            let page = PageMetrics::measure(height, 600.0, false);
            assert_eq!(page.is_long(), page.max_scroll() > 0.0, "height {height}");
            assert_eq!(page.max_scroll(), (height - 600.0).max(0.0));
        }
    }

    #[test]
    fn compute_all_enables_native_scroll_on_long_pages() {
        let mut surface = MemorySurface::new(600.0, [600.0, 1000.0, 400.0]).mark_long(2);
        let pages = PageMetrics::compute_all(&mut surface, 600.0, "long");

        assert_eq!(pages.len(), 3);
        assert!(!surface.native_scroll_enabled(0));
        assert!(surface.native_scroll_enabled(1));
        assert!(surface.native_scroll_enabled(2));
    }

    #[test]
    fn unclamped_tracking_stores_desired_position() {
        let mut page = PageMetrics::measure(1000.0, 600.0, false);
        page.resync(400.0);

        let moved = page.track_swipe(-80.0, ScrollTracking::Unclamped);
        assert_eq!(moved, 0.0);
        assert_eq!(page.scroll_top(), 480.0);
    }

    #[test]
    fn clamped_tracking_stays_in_range() {
        let mut page = PageMetrics::measure(1000.0, 600.0, false);
        page.resync(400.0);

        let moved = page.track_swipe(-80.0, ScrollTracking::Clamped);
        assert_eq!(moved, 0.0);
        assert_eq!(page.scroll_top(), 400.0);

        page.track_swipe(500.0, ScrollTracking::Clamped);
        assert_eq!(page.scroll_top(), 0.0);
    }

    #[test]
    fn short_pages_ignore_scroll_updates() {
        let mut page = PageMetrics::measure(600.0, 600.0, false);
        page.resync(120.0);
        assert_eq!(page.track_swipe(-80.0, ScrollTracking::Unclamped), 0.0);
        assert_eq!(page.scroll_top(), 0.0);
    }
}
