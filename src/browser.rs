use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlElement, MediaQueryList, MediaQueryListEvent, Storage};

use folio_core::motion::css_time;
use folio_core::{
    ColorSchemeSignal, DisplayMode, DocumentSurface, PreferenceStore, StoreError, DARK_CLASS,
};

pub(crate) const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub(crate) const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

fn local_storage() -> Result<Storage, StoreError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

/// `localStorage`-backed preference store. Private browsing modes may refuse access; that
/// surfaces as [`StoreError::Unavailable`].
#[derive(Clone, Copy, Default)]
pub(crate) struct LocalStore;

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StoreError::Rejected(js_err(err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let result = local_storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected(js_err(err)));
        if let Err(err) = &result {
            gloo::console::warn!("theme: persist failed", err.to_string());
        }
        result
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| StoreError::Rejected(js_err(err)))
    }
}

pub(crate) fn media_query_list(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

pub(crate) fn media_matches(query: &str) -> Option<bool> {
    media_query_list(query).map(|list| list.matches())
}

#[derive(Clone, Copy, Default)]
pub(crate) struct MediaSignal;

impl ColorSchemeSignal for MediaSignal {
    fn prefers_dark(&self) -> Option<bool> {
        media_matches(DARK_SCHEME_QUERY)
    }
}

/// Keeps a `change` listener on the dark-scheme media query alive; dropping it unregisters.
pub(crate) struct SystemSchemeWatcher {
    _listener: EventListener,
}

impl SystemSchemeWatcher {
    pub(crate) fn watch<F>(on_change: F) -> Option<Self>
    where
        F: Fn(bool) + 'static,
    {
        let list = media_query_list(DARK_SCHEME_QUERY)?;
        let fallback = list.clone();
        let listener = EventListener::new(&list, "change", move |event: &Event| {
            let matches = event
                .dyn_ref::<MediaQueryListEvent>()
                .map(|event| event.matches())
                .unwrap_or_else(|| fallback.matches());
            on_change(matches);
        });
        Some(Self {
            _listener: listener,
        })
    }
}

fn root_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn body_element() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// The live page document. Clones share the pending cross-fade timer.
#[derive(Clone, Default)]
pub(crate) struct BrowserDocument {
    fade: Rc<RefCell<Option<Timeout>>>,
}

impl DocumentSurface for BrowserDocument {
    fn apply_mode(&self, mode: DisplayMode) {
        if let Some(root) = root_element() {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, mode.is_dark());
        }
        if let Some(body) = body_element() {
            let palette = mode.palette();
            let style = body.style();
            let _ = style.set_property("background-color", palette.background);
            let _ = style.set_property("color", palette.foreground);
        }
    }

    fn cross_fade(&self, duration: Duration) {
        let Some(root) = root_element() else {
            return;
        };
        let time = css_time(duration);
        let _ = root.style().set_property(
            "transition",
            &format!("background-color {time} ease, color {time} ease"),
        );
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        // Replacing the slot drops (and cancels) an older pending reset.
        *self.fade.borrow_mut() = Some(Timeout::new(millis, move || {
            let _ = root.style().remove_property("transition");
        }));
    }
}

/// Motion runs only with a real window, an `IntersectionObserver`, and no reduced-motion
/// preference. Everything else renders final poses.
pub(crate) fn motion_enabled() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let has_observer = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    has_observer && !media_matches(REDUCED_MOTION_QUERY).unwrap_or(false)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PROBE_KEY: &str = "folio.test.probe";

    fn root_has_dark() -> bool {
        root_element()
            .map(|root| root.class_list().contains(DARK_CLASS))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn local_store_round_trips_and_removes() {
        set_panic_hook();
        let store = LocalStore;
        store.write(PROBE_KEY, "dark").expect("write");
        assert_eq!(store.read(PROBE_KEY), Ok(Some("dark".to_string())));
        store.remove(PROBE_KEY).expect("remove");
        assert_eq!(store.read(PROBE_KEY), Ok(None));
    }

    #[wasm_bindgen_test]
    fn apply_mode_is_idempotent() {
        set_panic_hook();
        let document = BrowserDocument::default();
        document.apply_mode(DisplayMode::Dark);
        let body = body_element().expect("body");
        let once = body.get_attribute("style");
        document.apply_mode(DisplayMode::Dark);
        assert_eq!(body.get_attribute("style"), once);
        assert!(root_has_dark());
        let class_count = root_element().expect("root").class_list().length();
        document.apply_mode(DisplayMode::Dark);
        assert_eq!(root_element().expect("root").class_list().length(), class_count);

        document.apply_mode(DisplayMode::Light);
        assert!(!root_has_dark());
    }

    #[wasm_bindgen_test(async)]
    async fn cross_fade_override_is_removed() {
        set_panic_hook();
        let document = BrowserDocument::default();
        document.cross_fade(Duration::from_millis(20));
        let root = root_element().expect("root");
        assert!(!root.style().get_property_value("transition").unwrap_or_default().is_empty());
        TimeoutFuture::new(60).await;
        assert!(root.style().get_property_value("transition").unwrap_or_default().is_empty());
    }

    #[wasm_bindgen_test]
    fn media_signal_answers_in_browser() {
        set_panic_hook();
        assert!(MediaSignal.prefers_dark().is_some());
        assert!(SystemSchemeWatcher::watch(|_| {}).is_some());
    }
}
