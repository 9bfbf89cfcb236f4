use std::fmt;
use std::time::Duration;

use crate::mode::{DisplayMode, THEME_KEY};

/// Length of the background/text cross-fade that accompanies an explicit mode change.
pub const MODE_CROSS_FADE: Duration = Duration::from_millis(300);

/// Durable key/value storage for the persisted preference.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// The OS-level "prefers dark color scheme" signal. `None` when the query is unavailable.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Document-level presentation state owned by the controller.
pub trait DocumentSurface {
    /// Must be idempotent.
    fn apply_mode(&self, mode: DisplayMode);
    /// Temporarily installs a color transition; a later call supersedes an earlier one.
    fn cross_fade(&self, duration: Duration);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "preference storage unavailable"),
            StoreError::Rejected(reason) => write!(f, "preference storage rejected write: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Single owner of the display mode.
///
/// Resolves the initial mode from the persisted value or the OS signal, mirrors OS changes
/// while no explicit choice is persisted, and pushes every resolved mode to the document.
/// The mode is `None` until [`PreferenceController::initialize`] has run; callers render a
/// neutral placeholder in that window.
pub struct PreferenceController<S, Q, D> {
    store: S,
    signal: Q,
    surface: D,
    mode: Option<DisplayMode>,
}

impl<S, Q, D> PreferenceController<S, Q, D>
where
    S: PreferenceStore,
    Q: ColorSchemeSignal,
    D: DocumentSurface,
{
    pub fn new(store: S, signal: Q, surface: D) -> Self {
        Self {
            store,
            signal,
            surface,
            mode: None,
        }
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        self.mode
    }

    pub fn is_ready(&self) -> bool {
        self.mode.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn initialize(&mut self) -> DisplayMode {
        if let Some(mode) = self.mode {
            return mode;
        }
        let mode = match self.persisted() {
            Some(mode) => mode,
            None => {
                let mode = self.system_mode();
                // Sticky from the first visit; a failed write just leaves the key absent.
                let _ = self.store.write(THEME_KEY, mode.as_str());
                mode
            }
        };
        self.mode = Some(mode);
        self.surface.apply_mode(mode);
        mode
    }

    /// Follows an OS change only while nothing is persisted. Returns whether the mode moved.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if self.mode.is_none() || self.is_explicit() {
            return false;
        }
        let next = DisplayMode::from_prefers_dark(prefers_dark);
        if self.mode == Some(next) {
            return false;
        }
        self.mode = Some(next);
        self.surface.apply_mode(next);
        true
    }

    /// Applies `mode` and persists it. The in-memory mode and the document change even when
    /// the write fails.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<(), StoreError> {
        self.mode = Some(mode);
        let persisted = self.store.write(THEME_KEY, mode.as_str());
        self.surface.cross_fade(MODE_CROSS_FADE);
        self.surface.apply_mode(mode);
        persisted
    }

    pub fn toggle(&mut self) -> Result<DisplayMode, StoreError> {
        let next = self.mode.unwrap_or_default().toggled();
        self.set_mode(next)?;
        Ok(next)
    }

    /// Drops the explicit choice and returns to following the OS signal.
    pub fn follow_system(&mut self) -> Result<DisplayMode, StoreError> {
        self.store.remove(THEME_KEY)?;
        let mode = self.system_mode();
        self.mode = Some(mode);
        self.surface.cross_fade(MODE_CROSS_FADE);
        self.surface.apply_mode(mode);
        Ok(mode)
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self.store.read(THEME_KEY), Ok(Some(_)))
    }

    fn persisted(&self) -> Option<DisplayMode> {
        let raw = self.store.read(THEME_KEY).ok().flatten()?;
        DisplayMode::parse(&raw).ok()
    }

    fn system_mode(&self) -> DisplayMode {
        DisplayMode::from_prefers_dark(self.signal.prefers_dark().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStore(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MapStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().remove(key);
            Ok(())
        }
    }

    struct Fixed(Option<bool>);

    impl ColorSchemeSignal for Fixed {
        fn prefers_dark(&self) -> Option<bool> {
            self.0
        }
    }

    #[derive(Default)]
    struct CountingSurface {
        applied: Cell<usize>,
        fades: Cell<usize>,
    }

    impl DocumentSurface for CountingSurface {
        fn apply_mode(&self, _mode: DisplayMode) {
            self.applied.set(self.applied.get() + 1);
        }

        fn cross_fade(&self, _duration: Duration) {
            self.fades.set(self.fades.get() + 1);
        }
    }

    #[test]
    fn not_ready_before_initialize() {
        let controller =
            PreferenceController::new(MapStore::default(), Fixed(Some(true)), CountingSurface::default());
        assert!(!controller.is_ready());
        assert_eq!(controller.mode(), None);
        assert_eq!(controller.surface().applied.get(), 0);
    }

    #[test]
    fn system_change_ignored_before_ready() {
        let mut controller =
            PreferenceController::new(MapStore::default(), Fixed(None), CountingSurface::default());
        assert!(!controller.on_system_change(true));
        assert_eq!(controller.mode(), None);
    }

    #[test]
    fn initialize_runs_once() {
        let mut controller =
            PreferenceController::new(MapStore::default(), Fixed(Some(true)), CountingSurface::default());
        assert_eq!(controller.initialize(), DisplayMode::Dark);
        assert_eq!(controller.initialize(), DisplayMode::Dark);
        assert_eq!(controller.surface().applied.get(), 1);
    }

    #[test]
    fn only_explicit_changes_cross_fade() {
        let mut controller =
            PreferenceController::new(MapStore::default(), Fixed(Some(false)), CountingSurface::default());
        controller.initialize();
        assert_eq!(controller.surface().fades.get(), 0);
        controller.toggle().unwrap();
        assert_eq!(controller.surface().fades.get(), 1);
        assert_eq!(controller.mode(), Some(DisplayMode::Dark));
    }
}
