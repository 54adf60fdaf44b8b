//! [`PageSurface`] over live DOM elements.

use std::time::Duration;

use quick_slider::PageSurface;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::offset::{OFFSET_PROPERTY, transition_style};

/// Page containers matched by a selector, plus their shared parent.
///
/// The first page carries the vertical offset; its top margin moves the
/// whole stack.
pub struct DomSurface {
    container: Option<HtmlElement>,
    pages: Vec<HtmlElement>,
}

impl DomSurface {
    /// Collects the elements matching `selector` in document order.
    ///
    /// No match yields an empty surface.
    pub fn query(document: &Document, selector: &str) -> Result<Self, JsValue> {
        let nodes = document.query_selector_all(selector)?;
        let pages: Vec<HtmlElement> = (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        let container = pages
            .first()
            .and_then(|page| page.parent_element())
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
        Ok(Self { container, pages })
    }

    /// The shared parent of all pages.
    pub fn container(&self) -> Option<&HtmlElement> {
        self.container.as_ref()
    }

    /// The page whose margin transition signals the end of a page change.
    pub fn first_page(&self) -> Option<&HtmlElement> {
        self.pages.first()
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = element.style().set_property(property, value) {
            warn!(property, value, ?err, "failed to set page style");
        }
    }
}

impl PageSurface for DomSurface {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn viewport_height(&self) -> f32 {
        self.container
            .as_ref()
            .map(|container| container.client_height() as f32)
            .unwrap_or(0.0)
    }

    fn scroll_height(&self, index: usize) -> f32 {
        self.pages
            .get(index)
            .map(|page| page.scroll_height() as f32)
            .unwrap_or(0.0)
    }

    fn is_marked_long(&self, index: usize, attribute: &str) -> bool {
        self.pages
            .get(index)
            .is_some_and(|page| page.has_attribute(attribute))
    }

    fn enable_native_scroll(&mut self, index: usize) {
        if let Some(page) = self.pages.get(index) {
            Self::set_style(page, "overflow-y", "auto");
            Self::set_style(page, "-webkit-overflow-scrolling", "touch");
        }
    }

    fn scroll_top(&self, index: usize) -> f32 {
        self.pages
            .get(index)
            .map(|page| page.scroll_top() as f32)
            .unwrap_or(0.0)
    }

    fn apply_offset(&mut self, offset: f32, duration: Duration) {
        // Margin instead of per-page transforms: transforms on several pages
        // leave blank pages behind on some mobile engines.
        if let Some(first) = self.pages.first() {
            Self::set_style(first, "transition", &transition_style(duration.as_millis()));
            Self::set_style(first, OFFSET_PROPERTY, &format!("{offset}px"));
        }
    }

    fn mark_container(&mut self, class: &str) {
        if let Some(container) = &self.container
            && let Err(err) = container.class_list().add_1(class)
        {
            warn!(class, ?err, "failed to mark slider container");
        }
    }
}
