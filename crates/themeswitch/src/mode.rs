//! Theme modes and the change notification payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two display modes a page can be in.
///
/// `Light` is the default: a page with no stored preference and a light
/// (or unknown) system signal never applies anything and stays light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Maps a "prefers dark" boolean, as reported by a color-scheme query.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The persisted representation: `"dark"` or `"light"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `"dark"` nor `"light"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme mode '{value}', expected 'dark' or 'light'")]
pub struct ParseModeError {
    pub value: String,
}

impl FromStr for ThemeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(ParseModeError {
                value: s.to_string(),
            }),
        }
    }
}

/// Payload delivered to every subscriber each time a mode is applied.
///
/// Serializes as `{"isDark": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChange {
    pub is_dark: bool,
}

impl ThemeChange {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            is_dark: mode.is_dark(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark)
    }
}
