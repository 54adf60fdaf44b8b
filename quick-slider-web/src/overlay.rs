//! On-screen debug panel.

use quick_slider::{DiagnosticSink, diagnostics::PANEL_TITLE};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

const PANEL_ID: &str = "pager_debug";
const PANEL_STYLE: &str = "position:absolute;bottom:15%;left:0;right:0;z-index:1000;height:100px;\
background-color:rgba(0,0,0,.5);color:red;overflow-y:auto;padding:0 .5em;";

/// Overlay listing diagnostic lines newest first.
///
/// Each slider owns its own overlay element; it exists between
/// [`attach`](DiagnosticSink::attach) and [`detach`](DiagnosticSink::detach).
pub struct OverlaySink {
    document: Document,
    panel: Option<HtmlElement>,
}

impl OverlaySink {
    /// Creates a sink that will draw into `document`.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            panel: None,
        }
    }

    fn create_panel(&self) -> Result<HtmlElement, JsValue> {
        let panel = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        panel.set_id(PANEL_ID);
        panel.set_attribute("style", PANEL_STYLE)?;

        let title = self.document.create_element("p")?;
        title.set_text_content(Some(PANEL_TITLE));
        panel.append_child(&title)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&panel)?;
        Ok(panel)
    }

    fn prepend_line(&self, panel: &HtmlElement, line: &str) -> Result<(), JsValue> {
        let entry = self.document.create_element("p")?;
        entry.set_text_content(Some(line));
        panel.insert_before(&entry, panel.first_child().as_ref())?;
        Ok(())
    }
}

impl DiagnosticSink for OverlaySink {
    fn attach(&mut self) {
        if self.panel.is_some() {
            return;
        }
        match self.create_panel() {
            Ok(panel) => self.panel = Some(panel),
            Err(err) => warn!(?err, "failed to create debug overlay"),
        }
    }

    fn record(&mut self, line: &str) {
        let Some(panel) = &self.panel else {
            return;
        };
        web_sys::console::log_1(&JsValue::from_str(line));
        if let Err(err) = self.prepend_line(panel, line) {
            warn!(?err, "failed to append debug line");
        }
    }

    fn detach(&mut self) {
        if let Some(panel) = self.panel.take() {
            panel.remove();
        }
    }
}
