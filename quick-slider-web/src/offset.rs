//! The CSS property carrying the page offset, and which `transitionend`
//! events belong to it.

/// Property animated on the first page to move the whole stack.
pub const OFFSET_PROPERTY: &str = "margin-top";

/// Whether a `transitionend` event reports the end of a page change.
///
/// Events bubble: a transition inside the first page, or of another
/// property on it, must not release the transition lock.
pub fn is_offset_transition(property_name: &str, from_offset_element: bool) -> bool {
    from_offset_element && property_name == OFFSET_PROPERTY
}

/// `transition` style value animating the offset over `millis`.
pub fn transition_style(millis: u128) -> String {
    format!("{OFFSET_PROPERTY} {millis}ms")
}
