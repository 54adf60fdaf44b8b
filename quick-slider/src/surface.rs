//! Environment services the slider reads from and writes to.
//!
//! ## Usage
//!
//! Implement [`PageSurface`] once per platform. The slider never touches
//! rendering directly; it only asks the surface for measurements and
//! requests offsets. [`MemorySurface`] serves headless hosts and tests.

use std::time::Duration;

/// The rendered page set a slider is bound to.
///
/// Indices are stable for the lifetime of the surface and run from `0` to
/// `page_count() - 1` in display order.
pub trait PageSurface {
    /// Number of page containers that matched the locator.
    fn page_count(&self) -> usize;

    /// Visible height of the shared container.
    fn viewport_height(&self) -> f32;

    /// Full scrollable content height of a page.
    fn scroll_height(&self, index: usize) -> f32;

    /// Whether a page carries the explicit long marker.
    fn is_marked_long(&self, index: usize, attribute: &str) -> bool;

    /// Turns on native vertical scrolling with touch momentum for a page.
    fn enable_native_scroll(&mut self, index: usize);

    /// Live rendered scroll position of a page.
    fn scroll_top(&self, index: usize) -> f32;

    /// Moves the shared page surface to `offset`, animating over `duration`.
    ///
    /// Implementations must eventually report the end of the animation
    /// through [`QuickSlider::transition_end`](crate::QuickSlider::transition_end).
    fn apply_offset(&mut self, offset: f32, duration: Duration);

    /// Adds a marker class to the shared container.
    fn mark_container(&mut self, class: &str);
}

/// In-memory page surface.
///
/// Records every request so callers can observe what a real platform would
/// have rendered.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    viewport_height: f32,
    heights: Vec<f32>,
    marked_long: Vec<bool>,
    scroll_tops: Vec<f32>,
    native_scroll: Vec<bool>,
    offsets: Vec<(f32, Duration)>,
    container_classes: Vec<String>,
}

impl MemorySurface {
    /// Creates a surface with one page per entry in `heights`.
    pub fn new(viewport_height: f32, heights: impl IntoIterator<Item = f32>) -> Self {
        let heights: Vec<f32> = heights.into_iter().collect();
        let count = heights.len();
        Self {
            viewport_height,
            heights,
            marked_long: vec![false; count],
            scroll_tops: vec![0.0; count],
            native_scroll: vec![false; count],
            offsets: Vec::new(),
            container_classes: Vec::new(),
        }
    }

    /// Flags a page as long regardless of its height.
    pub fn mark_long(mut self, index: usize) -> Self {
        if let Some(flag) = self.marked_long.get_mut(index) {
            *flag = true;
        }
        self
    }

    /// Simulates native scrolling of a page between gestures.
    pub fn set_scroll_top(&mut self, index: usize, scroll_top: f32) {
        if let Some(value) = self.scroll_tops.get_mut(index) {
            *value = scroll_top;
        }
    }

    /// Whether native scrolling was enabled for a page.
    pub fn native_scroll_enabled(&self, index: usize) -> bool {
        self.native_scroll.get(index).copied().unwrap_or(false)
    }

    /// Every offset applied so far, oldest first.
    pub fn offsets(&self) -> &[(f32, Duration)] {
        &self.offsets
    }

    /// The most recently applied offset, or `0.0` if none was applied.
    pub fn current_offset(&self) -> f32 {
        self.offsets.last().map(|(offset, _)| *offset).unwrap_or(0.0)
    }

    /// Classes added to the shared container.
    pub fn container_classes(&self) -> &[String] {
        &self.container_classes
    }
}

impl PageSurface for MemorySurface {
    fn page_count(&self) -> usize {
        self.heights.len()
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn scroll_height(&self, index: usize) -> f32 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    fn is_marked_long(&self, index: usize, _attribute: &str) -> bool {
        self.marked_long.get(index).copied().unwrap_or(false)
    }

    fn enable_native_scroll(&mut self, index: usize) {
        if let Some(flag) = self.native_scroll.get_mut(index) {
            *flag = true;
        }
    }

    fn scroll_top(&self, index: usize) -> f32 {
        self.scroll_tops.get(index).copied().unwrap_or(0.0)
    }

    fn apply_offset(&mut self, offset: f32, duration: Duration) {
        self.offsets.push((offset, duration));
    }

    fn mark_container(&mut self, class: &str) {
        if !self.container_classes.iter().any(|c| c == class) {
            self.container_classes.push(class.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_neutral() {
        let surface = MemorySurface::new(600.0, [600.0]);
        assert_eq!(surface.scroll_height(3), 0.0);
        assert_eq!(surface.scroll_top(3), 0.0);
        assert!(!surface.is_marked_long(3, "long"));
        assert!(!surface.native_scroll_enabled(3));
    }

    #[test]
    fn records_offsets_and_classes() {
        let mut surface = MemorySurface::new(600.0, [600.0, 600.0]);
        assert_eq!(surface.current_offset(), 0.0);

        surface.apply_offset(-600.0, Duration::from_millis(500));
        surface.mark_container("quick-slider");
        surface.mark_container("quick-slider");

        assert_eq!(surface.offsets(), &[(-600.0, Duration::from_millis(500))]);
        assert_eq!(surface.current_offset(), -600.0);
        assert_eq!(surface.container_classes(), &["quick-slider".to_string()]);
    }
}
