//! quick-slider turns vertical swipes into full-screen page changes.
//!
//! Pages are stacked inside one shared container whose height is the
//! viewport. Short pages change on any decisive swipe; long pages scroll
//! natively first and only hand the swipe over to paging once they sit at
//! their top or bottom edge. Page changes are committed transitions, never
//! finger-following drags, and only one transition may run at a time.
//!
//! # Usage
//!
//! Wire a [`PageSurface`] for your platform, then forward touch events and
//! the transition-finished notification to a [`QuickSlider`].
//!
//! ```
//! use quick_slider::{GesturePoint, MemorySurface, NullSink, QuickSlider, SliderArgs, Decision};
//! use web_time::Instant;
//!
//! let surface = MemorySurface::new(600.0, [600.0, 600.0, 600.0]);
//! let mut slider = QuickSlider::new(SliderArgs::new(".page"), surface, NullSink)?;
//!
//! let now = Instant::now();
//! slider.touch_start(Some(GesturePoint::new(10.0, 400.0)), now);
//! let outcome = slider.touch_end(Some(GesturePoint::new(10.0, 320.0)), now);
//!
//! assert_eq!(outcome.decision, Decision::SlideUp);
//! assert_eq!(slider.current_page(), 1);
//! assert_eq!(slider.offset(), -600.0);
//!
//! // Locked until the platform reports the end of the transition.
//! assert!(slider.is_transitioning());
//! slider.transition_end();
//! assert!(!slider.is_transitioning());
//! # Ok::<(), quick_slider::SliderError>(())
//! ```
//!
//! # Modules
//!
//! - [`metrics`] measures pages once at construction.
//! - [`gesture`] classifies a touch-start/touch-end pair.
//! - [`pager`] owns the current page and the transition lock.
//! - [`slider`] wires those together against a [`PageSurface`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gesture;
pub mod metrics;
pub mod pager;
pub mod slider;
pub mod surface;

pub use config::{ScrollTracking, SliderArgs};
pub use diagnostics::{DiagnosticSink, LogPanel, NullSink};
pub use error::SliderError;
pub use gesture::{
    Decision, GestureClassifier, GestureOutcome, GesturePoint, SWIPE_THRESHOLD, SwipeContext,
    TouchResponse,
};
pub use metrics::PageMetrics;
pub use pager::{PagerState, PagingStateMachine, Transition};
pub use slider::QuickSlider;
pub use surface::{MemorySurface, PageSurface};
