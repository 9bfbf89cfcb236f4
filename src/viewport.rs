use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::browser::motion_enabled;
use folio_core::motion::REVEAL_ROOT_MARGIN;
use folio_core::{Reveal, RevealLatch, RevealState};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element for its first viewport intersection. Disconnects after firing and on
/// drop, whichever comes first.
pub(crate) struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportWatch {
    pub(crate) fn observe<F>(target: &Element, root_margin: &str, mut on_enter: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback: ObserverCallback = Closure::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if entered {
                    observer.disconnect();
                    on_enter();
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
pub(crate) fn use_motion_enabled() -> bool {
    *use_state(motion_enabled)
}

/// Reveal state for the element behind `node`. Starts (and stays) revealed when motion is
/// unavailable or the observer can't be created, so content never depends on motion.
#[hook]
pub(crate) fn use_reveal(node: NodeRef) -> RevealState {
    let latch = use_state(|| {
        if motion_enabled() {
            RevealLatch::new()
        } else {
            RevealLatch::revealed()
        }
    });
    {
        let latch = latch.clone();
        use_effect_with(node, move |node| {
            let mut watch = None;
            if !latch.is_revealed() {
                if let Some(element) = node.cast::<Element>() {
                    let handle = latch.clone();
                    watch = ViewportWatch::observe(&element, REVEAL_ROOT_MARGIN, move || {
                        let mut next = *handle;
                        if next.on_enter_viewport() {
                            handle.set(next);
                        }
                    });
                }
                if watch.is_none() {
                    gloo::console::log!("motion: viewport observer unavailable, showing content");
                    latch.set(RevealLatch::revealed());
                }
            }
            move || drop(watch)
        });
    }
    latch.state()
}
