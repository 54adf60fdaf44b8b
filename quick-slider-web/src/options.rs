//! Options object accepted from JavaScript.

use std::time::Duration;

use quick_slider::{SliderArgs, SliderError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Raw options as passed to the JS constructor.
///
/// Values are read the way JS reads them: falsy `duration` and `timeout`
/// values fall back to their defaults, and `debug` is on for any truthy
/// value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SliderOptions {
    /// Page selector.
    pub pages: Option<String>,
    /// Transition duration in milliseconds, fractions allowed.
    pub duration: Option<f64>,
    /// Whether to show the debug overlay.
    #[serde(deserialize_with = "truthy")]
    pub debug: Option<bool>,
    /// Attribute marking a page as long.
    pub long: Option<String>,
    /// Watchdog for missing transition notifications, in milliseconds.
    pub timeout: Option<f64>,
}

/// Failure to turn JS options into slider options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options object was not valid JSON for [`SliderOptions`].
    #[error("[Slider]invalid options: {0}")]
    Json(#[from] serde_json::Error),
    /// The options were well formed but unusable.
    #[error(transparent)]
    Slider(#[from] SliderError),
}

impl SliderOptions {
    /// Parses the JSON form of a JS options object.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts into validated slider options.
    pub fn into_args(self) -> Result<SliderArgs, OptionsError> {
        let mut args = SliderArgs::new(self.pages.unwrap_or_default());

        if let Some(duration) = self.duration.and_then(millis) {
            args.duration = duration;
        }
        if let Some(debug) = self.debug {
            args.debug = debug;
        }
        if let Some(long) = self.long.filter(|long| !long.is_empty()) {
            args.long_attribute = long;
        }
        args.transition_timeout = self.timeout.and_then(millis);
        args.validate()?;
        Ok(args)
    }
}

/// Positive, finite milliseconds; anything else counts as unset.
fn millis(ms: f64) -> Option<Duration> {
    (ms.is_finite() && ms > 0.0)
        .then(|| Duration::from_nanos((ms * 1_000_000.0).round() as u64))
}

fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }))
}

/// Parses and validates a JSON options object in one step.
pub fn parse_args(json: &str) -> Result<SliderArgs, OptionsError> {
    SliderOptions::from_json(json)?.into_args()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_options_map_onto_args() {
        let args = parse_args(r#"{"pages":".page","duration":300,"debug":true}"#)
            .expect("valid options");
        assert_eq!(args.pages, ".page");
        assert_eq!(args.duration, Duration::from_millis(300));
        assert!(args.debug);
        assert_eq!(args.transition_timeout, None);
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let args = parse_args(r#"{"pages":"section","duration":0}"#).expect("valid options");
        assert_eq!(args.duration, Duration::from_millis(500));
    }

    #[test]
    fn extra_options_are_honored() {
        let args = parse_args(r#"{"pages":"section","long":"data-long","timeout":2000}"#)
            .expect("valid options");
        assert_eq!(args.long_attribute, "data-long");
        assert_eq!(args.transition_timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn options_follow_js_truthiness() {
        let args = parse_args(r#"{"pages":".page","duration":350.5,"debug":1}"#)
            .expect("valid options");
        assert_eq!(args.duration, Duration::from_micros(350_500));
        assert!(args.debug);

        let args = parse_args(r#"{"pages":".page","debug":"","duration":null}"#)
            .expect("valid options");
        assert!(!args.debug);
        assert_eq!(args.duration, Duration::from_millis(500));

        let args = parse_args(r#"{"pages":".page","debug":0,"duration":-20}"#)
            .expect("valid options");
        assert!(!args.debug);
        assert_eq!(args.duration, Duration::from_millis(500));
    }

    #[test]
    fn timeout_shorter_than_duration_is_rejected() {
        let err = parse_args(r#"{"pages":".page","duration":500,"timeout":100}"#)
            .expect_err("watchdog would fire mid-animation");
        assert!(matches!(
            err,
            OptionsError::Slider(SliderError::TimeoutTooShort { .. })
        ));
    }

    #[test]
    fn missing_pages_is_a_configuration_error() {
        let err = parse_args(r#"{"duration":300}"#).expect_err("pages are required");
        assert!(matches!(err, OptionsError::Slider(SliderError::MissingPages)));
        assert_eq!(err.to_string(), "[Slider]pages undefined");

        let err = parse_args(r#"{"pages":""}"#).expect_err("pages are required");
        assert!(matches!(err, OptionsError::Slider(SliderError::MissingPages)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_args("{pages:").expect_err("not json");
        assert!(matches!(err, OptionsError::Json(_)));
    }
}
