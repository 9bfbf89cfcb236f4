use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::browser::js_err;

const GTAG: &str = "gtag";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AnalyticsEvent {
    pub(crate) action: &'static str,
    pub(crate) category: &'static str,
    pub(crate) label: String,
    pub(crate) value: u32,
}

impl AnalyticsEvent {
    pub(crate) fn cv_download(label: &str) -> Self {
        Self {
            action: "download",
            category: "CV",
            label: label.to_string(),
            value: 1,
        }
    }
}

fn gtag() -> Option<(web_sys::Window, Function)> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(GTAG)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let func = value.dyn_into::<Function>().ok()?;
    Some((window, func))
}

/// Fire-and-forget `gtag("event", …)`. Missing or failing hooks are ignored.
pub(crate) fn track(event: &AnalyticsEvent) {
    let Some((window, func)) = gtag() else {
        return;
    };
    let params = Object::new();
    let fields = [
        ("event_category", JsValue::from_str(event.category)),
        ("event_label", JsValue::from_str(&event.label)),
        ("value", JsValue::from(event.value)),
    ];
    for (key, value) in fields {
        let _ = Reflect::set(&params, &JsValue::from_str(key), &value);
    }
    if let Err(err) = func.call3(
        &window,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.action),
        &params,
    ) {
        gloo::console::warn!("analytics: gtag call failed", js_err(err));
    }
}
