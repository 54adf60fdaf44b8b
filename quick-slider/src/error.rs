//! Construction errors.
//!
//! Gesture handling has no error path: anything ambiguous resolves to
//! [`Decision::Ignore`](crate::Decision::Ignore). Only building a controller
//! can fail.

use std::time::Duration;

use thiserror::Error;

/// Fatal configuration problems detected while building a [`QuickSlider`](crate::QuickSlider).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The page selector was missing or blank.
    #[error("[Slider]pages undefined")]
    MissingPages,
    /// The shared container reported a height that cannot host pages.
    #[error("[Slider]invalid viewport height {0}")]
    InvalidViewport(f32),
    /// The transition watchdog would fire before the animation can finish.
    #[error("[Slider]transition timeout {timeout:?} must exceed duration {duration:?}")]
    TimeoutTooShort {
        /// Configured watchdog timeout.
        timeout: Duration,
        /// Configured transition duration.
        duration: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_slider() {
        assert_eq!(SliderError::MissingPages.to_string(), "[Slider]pages undefined");
        assert_eq!(
            SliderError::InvalidViewport(-1.0).to_string(),
            "[Slider]invalid viewport height -1"
        );
        assert_eq!(
            SliderError::TimeoutTooShort {
                timeout: Duration::from_millis(100),
                duration: Duration::from_millis(500),
            }
            .to_string(),
            "[Slider]transition timeout 100ms must exceed duration 500ms"
        );
    }
}
