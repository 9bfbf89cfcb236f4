use std::fmt;

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

const LIGHT_BACKGROUND: &str = "#ffffff";
const LIGHT_FOREGROUND: &str = "#111827";
const DARK_BACKGROUND: &str = "#111827";
const DARK_FOREGROUND: &str = "#ffffff";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

/// Base colors written to the document body for a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl DisplayMode {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn parse(value: &str) -> Result<Self, DisplayModeParseError> {
        match value.trim() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(DisplayModeParseError {
                found: other.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, DisplayMode::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            DisplayMode::Light => Palette {
                background: LIGHT_BACKGROUND,
                foreground: LIGHT_FOREGROUND,
            },
            DisplayMode::Dark => Palette {
                background: DARK_BACKGROUND,
                foreground: DARK_FOREGROUND,
            },
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = DisplayModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModeParseError {
    pub found: String,
}

impl fmt::Display for DisplayModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display mode must be \"light\" or \"dark\", got \"{}\"", self.found)
    }
}

impl std::error::Error for DisplayModeParseError {}
