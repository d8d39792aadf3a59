//! Page setup for one invocation.

use std::path::PathBuf;

use themeswitch::{
    attach_change_log, attach_theme_color_meta, prepaint, toggle_control, ControllerConfig,
    Document, PreferenceStore, SystemSignal, ThemeController, TimerQueue,
};

const STORE_DIR: &str = "themeswitch";
const STORE_FILE: &str = "preferences.json";

/// Default location of the preference file.
///
/// `<config dir>/themeswitch/preferences.json`, or the working directory
/// when the platform has no config directory.
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(STORE_DIR).join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE))
}

/// Builds the page and starts its controller.
///
/// Mirrors a browser load: pre-paint from the stored preference, start the
/// controller, attach the stock consumers, then sync the toggle control.
pub fn load(
    store: impl PreferenceStore + 'static,
    signal: impl SystemSignal + 'static,
    config: ControllerConfig,
) -> ThemeController {
    let mut doc = Document::new();
    doc.insert(config.toggle_id.clone(), toggle_control());
    if prepaint(&store, &mut doc) {
        tracing::debug!("pre-painted dark theme from stored preference");
    }

    let controller = ThemeController::builder(store, signal)
        .document(doc.shared())
        .timers(TimerQueue::new())
        .config(config)
        .init();
    attach_change_log(&controller);
    attach_theme_color_meta(&controller);
    controller.dom_ready();
    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use themeswitch::{ManualSignal, MemoryStore, ThemeMode};

    #[test]
    fn test_default_store_path_file_name() {
        assert!(default_store_path().ends_with("preferences.json"));
    }

    #[test]
    fn test_load_syncs_toggle_control() {
        let controller = load(
            MemoryStore::with_preference(ThemeMode::Dark),
            ManualSignal::new(ThemeMode::Light),
            ControllerConfig::default(),
        );
        let doc = controller.document();
        let doc = doc.borrow();
        let button = doc.get_element_by_id("darkModeToggle").unwrap();
        assert_eq!(button.attribute("aria-pressed"), Some("true"));
        assert_eq!(doc.root().style("background-color"), Some("#0f1419"));
    }

    #[test]
    fn test_meta_attached_after_init() {
        let controller = load(
            MemoryStore::new(),
            ManualSignal::new(ThemeMode::Dark),
            ControllerConfig::default(),
        );
        // Init applied before consumers were attached
        assert_eq!(controller.document().borrow().meta("theme-color"), None);
        controller.toggle();
        assert_eq!(
            controller.document().borrow().meta("theme-color"),
            Some("#2c3e50")
        );
    }
}
