//! The slider controller bound to one page surface.
//!
//! ## Usage
//!
//! Build one [`QuickSlider`] per page set and forward platform events to
//! it: touch start, touch end, and the transition-finished notification of
//! the element carrying the offset. Every method runs on the UI thread; the
//! controller holds no locks and never blocks.

use tracing::{debug, info, warn};
use web_time::Instant;

use crate::{
    config::SliderArgs,
    diagnostics::{DiagnosticSink, Diagnostics, NullSink},
    error::SliderError,
    gesture::{GestureClassifier, GestureOutcome, GesturePoint, SwipeContext, TouchResponse},
    metrics::PageMetrics,
    pager::{PagingStateMachine, Transition},
    surface::PageSurface,
};

/// Full-screen paging controller.
pub struct QuickSlider<S: PageSurface, D: DiagnosticSink = NullSink> {
    args: SliderArgs,
    surface: S,
    pages: Vec<PageMetrics>,
    classifier: GestureClassifier,
    pager: PagingStateMachine,
    diagnostics: Diagnostics<D>,
}

impl<S: PageSurface, D: DiagnosticSink> QuickSlider<S, D> {
    /// Measures the pages of `surface` and binds a controller to them.
    ///
    /// Fails when the page locator is blank or the viewport cannot host
    /// pages. A locator matching no pages is not fatal: the controller comes
    /// back detached and ignores every gesture.
    pub fn new(args: SliderArgs, mut surface: S, sink: D) -> Result<Self, SliderError> {
        args.validate()?;

        let page_count = surface.page_count();
        if page_count == 0 {
            warn!(pages = %args.pages, "[Slider]pages are empty");
            return Ok(Self {
                args,
                surface,
                pages: Vec::new(),
                classifier: GestureClassifier::new(),
                pager: PagingStateMachine::new(0, 0.0),
                diagnostics: Diagnostics::new(sink, false),
            });
        }

        let viewport_height = surface.viewport_height();
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return Err(SliderError::InvalidViewport(viewport_height));
        }

        let pages = PageMetrics::compute_all(&mut surface, viewport_height, &args.long_attribute);
        surface.mark_container(&args.container_class);
        let diagnostics = Diagnostics::new(sink, args.debug);

        info!(
            pages = %args.pages,
            page_count,
            viewport_height,
            long_pages = pages.iter().filter(|page| page.is_long()).count(),
            "slider attached"
        );

        Ok(Self {
            args,
            surface,
            pages,
            classifier: GestureClassifier::new(),
            pager: PagingStateMachine::new(page_count, viewport_height),
            diagnostics,
        })
    }

    /// Whether the controller is bound to at least one page.
    pub fn is_attached(&self) -> bool {
        !self.pages.is_empty()
    }

    /// Handles a touch start at `point`.
    pub fn touch_start(&mut self, point: Option<GesturePoint>, now: Instant) -> TouchResponse {
        if !self.is_attached() {
            return TouchResponse::default();
        }
        self.poll(now);

        let index = self.pager.current_page();
        let locked = self.pager.is_transitioning();
        let Some(page) = self.pages.get_mut(index) else {
            return TouchResponse::default();
        };
        let surface = &self.surface;
        self.classifier.on_gesture_start(
            point,
            page,
            || surface.scroll_top(index),
            locked,
            &mut self.diagnostics,
        )
    }

    /// Handles a touch end at `point` and commits the resulting page change.
    pub fn touch_end(&mut self, point: Option<GesturePoint>, now: Instant) -> GestureOutcome {
        if !self.is_attached() {
            return GestureOutcome::default();
        }

        let context = SwipeContext {
            current: self.pager.current_page(),
            page_count: self.pager.page_count(),
            locked: self.pager.is_transitioning(),
            tracking: self.args.scroll_tracking,
        };
        let Some(page) = self.pages.get_mut(context.current) else {
            return GestureOutcome::default();
        };
        let outcome = self
            .classifier
            .on_gesture_end(point, page, context, &mut self.diagnostics);

        if let Some(transition) = self.pager.apply(outcome.decision, now) {
            self.commit(transition);
        }
        outcome
    }

    /// Handles the transition-finished notification.
    pub fn transition_end(&mut self) {
        if self.pager.finish_transition() {
            debug!(page = self.pager.current_page(), "transition finished");
        } else {
            debug!("transition finished without a pending page change");
        }
    }

    /// Jumps to `index`, taking the transition lock.
    ///
    /// The lock is not consulted. Indices outside the page set, and the
    /// current page itself, are refused and leave the controller untouched:
    /// an unchanged offset never produces a finished notification. Returns
    /// whether a transition started.
    pub fn move_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.pager.page_count() {
            warn!(
                index,
                page_count = self.pager.page_count(),
                "move_to outside the page set"
            );
            return false;
        }
        if index == self.pager.current_page() {
            debug!(index, "move_to the current page ignored");
            return false;
        }
        let transition = self.pager.move_to(index, now);
        self.commit(transition);
        true
    }

    /// Releases a transition lock older than the configured timeout.
    ///
    /// Without a timeout the lock waits for the finished notification
    /// forever. Returns whether a lock was released.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.args.transition_timeout {
            Some(timeout) => self.pager.release_stale_lock(now, timeout),
            None => false,
        }
    }

    /// Index of the page shown, or being moved to.
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Number of bound pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether a page change is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.pager.is_transitioning()
    }

    /// Surface offset of the current page.
    pub fn offset(&self) -> f32 {
        self.pager.offset()
    }

    /// Measured pages in display order.
    pub fn pages(&self) -> &[PageMetrics] {
        &self.pages
    }

    /// Options the controller was built with.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// The bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The bound surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The diagnostic sink.
    pub fn sink(&self) -> &D {
        self.diagnostics.sink()
    }

    fn commit(&mut self, transition: Transition) {
        self.diagnostics
            .line(format_args!("move to page {}", transition.page));
        info!(
            page = transition.page,
            offset = transition.offset,
            "page change"
        );
        self.surface
            .apply_offset(transition.offset, self.args.duration);
    }
}
