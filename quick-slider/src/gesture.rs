//! Swipe classification for one touch-start/touch-end pair.
//!
//! A swipe over a long page first scrolls that page. Only a swipe that is
//! decisive, not absorbed by in-page scrolling, and starts from the page's
//! edge in its direction becomes a page change.

use tracing::debug;

use crate::{
    config::ScrollTracking,
    diagnostics::{DiagnosticSink, Diagnostics},
    metrics::PageMetrics,
};

/// Vertical distance separating a deliberate swipe from noise.
///
/// Used both as the in-page scroll distance that keeps paging off and as the
/// minimum swipe length that pages.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A touch position in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GesturePoint {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position, growing downwards.
    pub y: f32,
}

impl GesturePoint {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What a finished gesture asks the slider to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Decision {
    /// Nothing: too short, scrolled inside the page, at a boundary, or locked.
    #[default]
    Ignore,
    /// Finger moved up: go to the next page.
    SlideUp,
    /// Finger moved down: go to the previous page.
    SlideDown,
}

impl Decision {
    /// Whether the decision commits a page change.
    pub fn is_commit(self) -> bool {
        !matches!(self, Self::Ignore)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::SlideUp => "up",
            Self::SlideDown => "down",
        }
    }
}

/// Platform response to a touch-start event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TouchResponse {
    /// Whether the platform's default touch handling must be suppressed.
    pub prevent_default: bool,
}

/// Result of classifying a touch-end event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct GestureOutcome {
    /// The classification.
    pub decision: Decision,
    /// Whether the platform's default touch handling must be suppressed.
    pub prevent_default: bool,
}

impl GestureOutcome {
    fn ignore() -> Self {
        Self::default()
    }

    fn locked() -> Self {
        Self {
            decision: Decision::Ignore,
            prevent_default: true,
        }
    }
}

/// Pager state a touch end is classified against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SwipeContext {
    /// Index of the page under the finger.
    pub current: usize,
    /// Number of pages.
    pub page_count: usize,
    /// Whether a page change is in flight.
    pub locked: bool,
    /// Update policy for the tracked scroll position of a long page.
    pub tracking: ScrollTracking,
}

/// Gesture state carried from touch start to touch end.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    start: Option<GesturePoint>,
}

impl GestureClassifier {
    /// Creates a classifier with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start point of the gesture in progress, if one was recorded.
    pub fn start_point(&self) -> Option<GesturePoint> {
        self.start
    }

    /// Handles a touch start over `page`.
    ///
    /// While `locked` nothing is recorded and the default behavior is
    /// suppressed so the matching end event still arrives. Otherwise the
    /// start point is recorded and a long page's tracked position is
    /// resynced from `rendered_scroll_top`, picking up any native scrolling
    /// since the last gesture. Short pages always suppress the default so
    /// the swipe is reserved for paging.
    pub fn on_gesture_start<D: DiagnosticSink>(
        &mut self,
        point: Option<GesturePoint>,
        page: &mut PageMetrics,
        rendered_scroll_top: impl FnOnce() -> f32,
        locked: bool,
        diagnostics: &mut Diagnostics<D>,
    ) -> TouchResponse {
        diagnostics.line(format_args!("move start, {}running", running_label(locked)));

        if locked {
            return TouchResponse {
                prevent_default: true,
            };
        }

        self.start = point;

        if page.is_long() {
            page.resync(rendered_scroll_top());
            TouchResponse::default()
        } else {
            TouchResponse {
                prevent_default: true,
            }
        }
    }

    /// Classifies the gesture ending at `point` over `page`.
    ///
    /// Never fails: every ambiguous or out-of-bounds case is
    /// [`Decision::Ignore`]. A missing end point, or an end without a
    /// recorded start, counts as no movement.
    pub fn on_gesture_end<D: DiagnosticSink>(
        &mut self,
        point: Option<GesturePoint>,
        page: &mut PageMetrics,
        context: SwipeContext,
        diagnostics: &mut Diagnostics<D>,
    ) -> GestureOutcome {
        let SwipeContext {
            current,
            page_count,
            locked,
            tracking,
        } = context;
        diagnostics.line(format_args!("move end, {}running", running_label(locked)));

        if locked {
            return GestureOutcome::locked();
        }

        let start = self.start.take();
        let delta_y = match (start, point) {
            (Some(start), Some(end)) => end.y - start.y,
            _ => 0.0,
        };

        if is_scrolling(page, delta_y, tracking, diagnostics) || delta_y.abs() < SWIPE_THRESHOLD {
            return GestureOutcome::ignore();
        }

        let intent = if delta_y < 0.0 {
            Decision::SlideUp
        } else {
            Decision::SlideDown
        };

        diagnostics.line(format_args!(
            "maySlide?  {} {} {}",
            intent.label(),
            page.max_scroll(),
            page.scroll_top()
        ));

        let decision = match intent {
            Decision::SlideUp if current + 1 < page_count && page.at_bottom() => Decision::SlideUp,
            Decision::SlideDown if current > 0 && page.at_top() => Decision::SlideDown,
            _ => Decision::Ignore,
        };

        debug!(
            delta_y,
            current,
            intent = intent.label(),
            decision = decision.label(),
            "classified swipe"
        );

        GestureOutcome {
            decision,
            prevent_default: false,
        }
    }
}

/// Applies the swipe to a long page and reports whether the page absorbed
/// it as in-page scrolling.
fn is_scrolling<D: DiagnosticSink>(
    page: &mut PageMetrics,
    delta_y: f32,
    tracking: ScrollTracking,
    diagnostics: &mut Diagnostics<D>,
) -> bool {
    if !page.is_long() {
        return false;
    }

    let distance = page.track_swipe(delta_y, tracking);
    diagnostics.line(format_args!("distance {distance} , deltaY {delta_y}"));

    distance > SWIPE_THRESHOLD
}

fn running_label(locked: bool) -> &'static str {
    if locked { "" } else { "not " }
}
