//! Construction options for [`QuickSlider`](crate::QuickSlider).
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use quick_slider::{ScrollTracking, SliderArgs};
//!
//! let args = SliderArgs::new(".page")
//!     .duration(Duration::from_millis(300))
//!     .debug(true)
//!     .scroll_tracking(ScrollTracking::Clamped);
//! assert_eq!(args.pages, ".page");
//! ```

use std::time::Duration;

use derive_setters::Setters;

use crate::error::SliderError;

const DEFAULT_DURATION: Duration = Duration::from_millis(500);
const DEFAULT_LONG_ATTRIBUTE: &str = "long";
const DEFAULT_CONTAINER_CLASS: &str = "quick-slider";

/// How the tracked scroll position of a long page is updated after a swipe.
///
/// The in-page scroll check always compares against the clamped target.
/// What differs is the value stored for the next comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollTracking {
    /// Store `scroll_top - delta_y` as is, even outside `0..=max_scroll`.
    ///
    /// The next touch start resyncs the value from the rendered page.
    #[default]
    Unclamped,
    /// Store the clamped value so the tracked position never leaves
    /// `0..=max_scroll`.
    Clamped,
}

/// Options recognized when building a slider.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct SliderArgs {
    /// Locator for the ordered page containers. Must not be blank.
    #[setters(into)]
    pub pages: String,
    /// Length of the page transition animation. Cosmetic only.
    pub duration: Duration,
    /// Whether diagnostic lines are recorded into the sink.
    pub debug: bool,
    /// Attribute that forces a page to be treated as long.
    #[setters(into)]
    pub long_attribute: String,
    /// Marker class added to the shared container.
    #[setters(into)]
    pub container_class: String,
    /// Update policy for the tracked scroll position of long pages.
    pub scroll_tracking: ScrollTracking,
    /// Releases a transition lock that outlives this timeout.
    ///
    /// `None` waits for the finished notification forever. Must be longer
    /// than `duration`.
    #[setters(strip_option)]
    pub transition_timeout: Option<Duration>,
}

impl SliderArgs {
    /// Creates options for the given page locator with defaults elsewhere.
    pub fn new(pages: impl Into<String>) -> Self {
        Self {
            pages: pages.into(),
            ..Self::default()
        }
    }

    /// Checks the options that make construction fatal.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.pages.trim().is_empty() {
            return Err(SliderError::MissingPages);
        }
        match self.transition_timeout {
            Some(timeout) if timeout <= self.duration => Err(SliderError::TimeoutTooShort {
                timeout,
                duration: self.duration,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            pages: String::new(),
            duration: DEFAULT_DURATION,
            debug: false,
            long_attribute: DEFAULT_LONG_ATTRIBUTE.to_string(),
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            scroll_tracking: ScrollTracking::default(),
            transition_timeout: None,
        }
    }
}
