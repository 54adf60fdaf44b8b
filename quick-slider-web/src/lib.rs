//! Browser binding for quick-slider.
//!
//! ## Usage
//!
//! Build with `wasm-bindgen` and create one slider per page set once the
//! document has loaded:
//!
//! ```js
//! const slider = new QuickSlider({ pages: ".page", duration: 500, debug: false });
//! ```
//!
//! Pages must share one parent container. The binding measures them once,
//! listens for touches on the container and for the end of the margin
//! transition on the first page. Dropping the handle (or calling `free()`
//! from JS) removes the listeners and the debug overlay.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod offset;
pub mod options;

#[cfg(target_family = "wasm")]
mod binding;
#[cfg(target_family = "wasm")]
pub mod dom;
#[cfg(target_family = "wasm")]
pub mod overlay;

#[cfg(target_family = "wasm")]
pub use binding::QuickSliderHandle;
pub use options::{OptionsError, SliderOptions};
