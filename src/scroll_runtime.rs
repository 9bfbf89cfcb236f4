use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use folio_core::scroll::section_scroll_target;
use folio_core::{ScrollMetrics, SectionBounds};

pub(crate) fn read_scroll_metrics() -> ScrollMetrics {
    let Some(window) = web_sys::window() else {
        return ScrollMetrics::default();
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let content_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(viewport_height);
    ScrollMetrics::new(offset, viewport_height, content_height)
}

/// Coalesces window `scroll`/`resize` events into at most one sample per animation frame.
pub(crate) struct ScrollSampler {
    _listeners: Vec<EventListener>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl ScrollSampler {
    pub(crate) fn attach(on_sample: Rc<dyn Fn(ScrollMetrics)>) -> Option<Self> {
        let window = web_sys::window()?;
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
        let schedule = {
            let frame = Rc::clone(&frame);
            Rc::new(move || {
                if frame.borrow().is_some() {
                    return;
                }
                let pending = Rc::clone(&frame);
                let on_sample = Rc::clone(&on_sample);
                let handle = request_animation_frame(move |_timestamp| {
                    pending.borrow_mut().take();
                    on_sample(read_scroll_metrics());
                });
                *frame.borrow_mut() = Some(handle);
            })
        };
        let listeners = ["scroll", "resize"]
            .into_iter()
            .map(|kind| {
                let schedule = Rc::clone(&schedule);
                EventListener::new(&window, kind, move |_event: &Event| schedule())
            })
            .collect();
        Some(Self {
            _listeners: listeners,
            frame,
        })
    }
}

impl Drop for ScrollSampler {
    fn drop(&mut self) {
        // The pending frame's closure holds a clone of `frame`; dropping it breaks the cycle.
        self.frame.borrow_mut().take();
    }
}

#[hook]
pub(crate) fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state_eq(read_scroll_metrics);
    {
        let metrics = metrics.clone();
        use_effect_with((), move |_| {
            let sampler = ScrollSampler::attach(Rc::new(move |sample| metrics.set(sample)));
            move || drop(sampler)
        });
    }
    *metrics
}

/// Viewport-relative bounds of the sections that are currently in the DOM.
pub(crate) fn section_bounds(ids: &[&str]) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id: (*id).to_string(),
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

pub(crate) fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(section) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(section_scroll_target(section.offset_top() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
