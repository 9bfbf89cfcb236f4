use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::browser::{BrowserDocument, LocalStore, MediaSignal, SystemSchemeWatcher};
use folio_core::{DisplayMode, PreferenceController};

pub(crate) type BrowserController = PreferenceController<LocalStore, MediaSignal, BrowserDocument>;

/// What the page tree sees of the preference controller: the resolved mode (or `None` while
/// resolving) plus the only ways to change it.
#[derive(Clone)]
pub(crate) struct DisplayModeHandle {
    mode: Option<DisplayMode>,
    controller: Rc<RefCell<BrowserController>>,
    state: UseStateHandle<Option<DisplayMode>>,
}

impl PartialEq for DisplayModeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl DisplayModeHandle {
    pub(crate) fn mode(&self) -> Option<DisplayMode> {
        self.mode
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.mode.is_some()
    }

    pub(crate) fn is_dark(&self) -> bool {
        self.mode.map(DisplayMode::is_dark).unwrap_or(false)
    }

    pub(crate) fn set_mode(&self, mode: DisplayMode) {
        if let Err(err) = self.controller.borrow_mut().set_mode(mode) {
            gloo::console::warn!("theme: choice not persisted", err.to_string());
        }
        self.sync();
    }

    pub(crate) fn toggle(&self) {
        if let Err(err) = self.controller.borrow_mut().toggle() {
            gloo::console::warn!("theme: choice not persisted", err.to_string());
        }
        self.sync();
    }

    pub(crate) fn follow_system(&self) {
        if let Err(err) = self.controller.borrow_mut().follow_system() {
            gloo::console::warn!("theme: could not clear choice", err.to_string());
        }
        self.sync();
    }

    fn sync(&self) {
        let mode = self.controller.borrow().mode();
        self.state.set(mode);
    }
}

#[hook]
pub(crate) fn use_display_mode() -> DisplayModeHandle {
    let controller = use_mut_ref(|| {
        BrowserController::new(LocalStore, MediaSignal, BrowserDocument::default())
    });
    let state = use_state(|| None::<DisplayMode>);
    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let resolved = controller.borrow_mut().initialize();
            gloo::console::log!("theme: resolved", resolved.as_str());
            state.set(Some(resolved));
            let watcher = SystemSchemeWatcher::watch(move |prefers_dark| {
                let changed = controller.borrow_mut().on_system_change(prefers_dark);
                if changed {
                    state.set(controller.borrow().mode());
                }
            });
            if watcher.is_none() {
                gloo::console::log!("theme: system scheme signal unavailable");
            }
            move || drop(watcher)
        });
    }
    DisplayModeHandle {
        mode: *state,
        controller,
        state,
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let handle = use_context::<DisplayModeHandle>();
    let Some(mode) = handle.as_ref().and_then(DisplayModeHandle::mode) else {
        return html! {
            <div class={classes!("theme-toggle", "theme-toggle--placeholder", props.class.clone())}>
                <span class="theme-toggle__knob"></span>
            </div>
        };
    };
    let onclick = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(handle) = handle.as_ref() {
                handle.toggle();
            }
        })
    };
    let label = format!("Switch to {} mode", mode.toggled());
    let (state_class, glyph) = match mode {
        DisplayMode::Dark => ("theme-toggle--dark", "\u{263E}"),
        DisplayMode::Light => ("theme-toggle--light", "\u{2600}"),
    };
    html! {
        <button
            type="button"
            class={classes!("theme-toggle", state_class, props.class.clone())}
            aria-label={label}
            aria-pressed={mode.is_dark().to_string()}
            {onclick}
        >
            <span class="theme-toggle__knob">
                <span class="theme-toggle__glyph" aria-hidden="true">{glyph}</span>
            </span>
        </button>
    }
}
