//! Controller configuration.
//!
//! Every field has a default matching the stock page markup, so an empty
//! YAML document is a valid configuration. Unknown fields are rejected.
//! The storage key is not part of it: each store carries its own key
//! (see [`MemoryStore::with_key`](crate::MemoryStore::with_key)).
//!
//! ```yaml
//! toggle_id: darkModeToggle
//! transition_ms: 400
//! labels:
//!   when_dark: Modo Claro
//!   when_light: Modo Oscuro
//!   aria_when_dark: Cambiar a modo claro
//!   aria_when_light: Cambiar a modo oscuro
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Element id of the toggle control when none is configured.
pub const DEFAULT_TOGGLE_ID: &str = "darkModeToggle";

/// Length of the transition window when none is configured.
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Error returned when a configuration file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Text placed on the toggle control for each resulting mode.
///
/// The control always offers the *other* mode, so `when_dark` is what it
/// shows while the page is dark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleLabels {
    pub when_dark: String,
    pub when_light: String,
    pub aria_when_dark: String,
    pub aria_when_light: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            when_dark: "Light Mode".to_string(),
            when_light: "Dark Mode".to_string(),
            aria_when_dark: "Switch to light mode".to_string(),
            aria_when_light: "Switch to dark mode".to_string(),
        }
    }
}

/// Settings for a [`ThemeController`](crate::ThemeController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Element id of the toggle control.
    pub toggle_id: String,
    /// How long the transition marker and toggle animation last.
    pub transition_ms: u64,
    pub labels: ToggleLabels,
}

impl ControllerConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            transition_ms: DEFAULT_TRANSITION_MS,
            labels: ToggleLabels::default(),
        }
    }
}
