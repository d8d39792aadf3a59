//! Command results and their rendering.

use console::Style;
use serde::Serialize;
use themeswitch::{ThemeController, ThemeMode};

use crate::cli::OutputFormat;

/// What a command did, plus the controller state afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub action: &'static str,
    pub mode: ThemeMode,
    pub stored: Option<ThemeMode>,
    pub system: ThemeMode,
    pub overridden: bool,
    pub notifications: u64,
}

impl Report {
    pub fn capture(action: &'static str, controller: &ThemeController) -> Self {
        Self {
            action,
            mode: controller.mode(),
            stored: controller.stored_preference(),
            system: controller.system_preference(),
            overridden: controller.is_overridden(),
            notifications: controller.notifications(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mode_style = match self.mode {
            ThemeMode::Dark => Style::new().bold().white().on_black(),
            ThemeMode::Light => Style::new().bold().black().on_white(),
        };
        let label = Style::new().dim();
        let source = if self.overridden {
            "explicit preference"
        } else {
            "system"
        };
        let stored = self.stored.map_or("none", ThemeMode::as_str);

        format!(
            "{} {} ({})\n  {} {}\n  {} {}\n  {} {}",
            Style::new().cyan().apply_to(self.action),
            mode_style.apply_to(format!(" {} ", self.mode)),
            source,
            label.apply_to("stored:"),
            stored,
            label.apply_to("system:"),
            self.system,
            label.apply_to("notifications:"),
            self.notifications,
        )
    }
}
