pub mod mode;
pub mod motion;
pub mod preference;
pub mod reveal;
pub mod scroll;

pub use mode::{DisplayMode, DisplayModeParseError, Palette, DARK_CLASS, THEME_KEY};
pub use motion::{Direction, MotionIntent, Pose};
pub use preference::{
    ColorSchemeSignal, DocumentSurface, PreferenceController, PreferenceStore, StoreError,
    MODE_CROSS_FADE,
};
pub use reveal::{Reveal, RevealLatch, RevealState};
pub use scroll::{active_section, ScrollMetrics, ScrollTransform, SectionBounds};
