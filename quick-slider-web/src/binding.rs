//! `wasm-bindgen` entry point wiring DOM events to a slider.

use std::{cell::RefCell, rc::Rc};

use quick_slider::{GesturePoint, QuickSlider, SliderError};
use tracing::warn;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Event, EventTarget, TouchEvent, TouchList, TransitionEvent};
use web_time::Instant;

use crate::{
    dom::DomSurface, offset::is_offset_transition, options::parse_args, overlay::OverlaySink,
};

type SharedSlider = Rc<RefCell<QuickSlider<DomSurface, OverlaySink>>>;

/// One registered DOM listener, removed again on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn register(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            warn!(kind = self.kind, ?err, "failed to remove listener");
        }
    }
}

/// Slider bound to a page set in the current document.
#[wasm_bindgen(js_name = QuickSlider)]
pub struct QuickSliderHandle {
    slider: SharedSlider,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen(js_class = QuickSlider)]
impl QuickSliderHandle {
    /// Measures the pages matched by `options.pages` and starts listening.
    ///
    /// Throws when `options.pages` is missing or blank. A selector matching
    /// nothing logs a warning and yields an inert slider.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<QuickSliderHandle, JsError> {
        if options.is_undefined() || options.is_null() {
            return Err(SliderError::MissingPages.into());
        }
        let json = js_sys::JSON::stringify(&options)
            .map_err(|_| JsError::new("[Slider]options are not serializable"))?;
        let args = parse_args(&String::from(json))?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsError::new("[Slider]no document"))?;
        let surface = DomSurface::query(&document, &args.pages)
            .map_err(|_| JsError::new("[Slider]invalid pages selector"))?;
        let container = surface.container().cloned();
        let first_page = surface.first_page().cloned();

        let slider = QuickSlider::new(args, surface, OverlaySink::new(document))?;
        let slider = Rc::new(RefCell::new(slider));

        let listeners = match (container, first_page) {
            (Some(container), Some(first_page)) => {
                register_listeners(&slider, &container, &first_page)
                    .map_err(|_| JsError::new("[Slider]failed to register listeners"))?
            }
            _ => Vec::new(),
        };

        Ok(Self {
            slider,
            _listeners: listeners,
        })
    }

    /// Index of the page shown.
    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> usize {
        self.slider.borrow().current_page()
    }

    /// Number of bound pages.
    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.slider.borrow().page_count()
    }

    /// Whether a page change is animating.
    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.slider.borrow().is_transitioning()
    }

    /// Jumps to page `index`. Returns whether a transition started.
    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&self, index: usize) -> bool {
        self.slider.borrow_mut().move_to(index, Instant::now())
    }
}

fn register_listeners(
    slider: &SharedSlider,
    container: &EventTarget,
    first_page: &EventTarget,
) -> Result<Vec<Listener>, JsValue> {
    let on_start = {
        let slider = Rc::clone(slider);
        move |event: Event| {
            let point = event
                .dyn_ref::<TouchEvent>()
                .and_then(|touch| first_point(&touch.touches()));
            let response = slider.borrow_mut().touch_start(point, Instant::now());
            if response.prevent_default {
                event.prevent_default();
            }
        }
    };

    let on_end = {
        let slider = Rc::clone(slider);
        move |event: Event| {
            let point = event
                .dyn_ref::<TouchEvent>()
                .and_then(|touch| first_point(&touch.changed_touches()));
            let outcome = slider.borrow_mut().touch_end(point, Instant::now());
            if outcome.prevent_default {
                event.prevent_default();
            }
        }
    };

    let on_transition_end = {
        let slider = Rc::clone(slider);
        let offset_element = JsValue::from(first_page.clone());
        move |event: Event| {
            let Some(transition) = event.dyn_ref::<TransitionEvent>() else {
                return;
            };
            let from_offset_element = event
                .target()
                .is_some_and(|target| JsValue::from(target) == offset_element);
            if is_offset_transition(&transition.property_name(), from_offset_element) {
                slider.borrow_mut().transition_end();
            }
        }
    };

    Ok(vec![
        Listener::register(first_page, "transitionend", on_transition_end)?,
        Listener::register(container, "touchstart", on_start)?,
        Listener::register(container, "touchend", on_end)?,
    ])
}

fn first_point(touches: &TouchList) -> Option<GesturePoint> {
    touches
        .get(0)
        .map(|touch| GesturePoint::new(touch.page_x() as f32, touch.page_y() as f32))
}
