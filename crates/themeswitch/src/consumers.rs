//! Downstream consumers of theme change notifications.
//!
//! None of these are part of the controller's contract; they are ordinary
//! subscribers attached with [`ThemeController::on_change`].

use std::rc::{Rc, Weak};

use serde_json::{json, Value};

use crate::controller::ThemeController;
use crate::dom::Document;
use crate::mode::ThemeMode;

/// Name of the `<meta>` tag that tints mobile browser chrome.
pub const THEME_COLOR_META: &str = "theme-color";

/// Browser chrome color while dark.
pub const THEME_COLOR_DARK: &str = "#0d1117";

/// Browser chrome color while light.
pub const THEME_COLOR_LIGHT: &str = "#2c3e50";

/// Event name reported to analytics on every change.
pub const ANALYTICS_EVENT: &str = "dark_mode_toggle";

/// Receiver for analytics events.
pub trait AnalyticsSink {
    fn track(&self, event: &str, properties: &Value);
}

/// Keeps `<meta name="theme-color">` in step with the active mode.
///
/// The tag is created on the first change if the page lacks it.
pub fn attach_theme_color_meta(controller: &ThemeController) {
    let document: Weak<_> = Rc::downgrade(&controller.document());
    controller.on_change(move |change| {
        if let Some(document) = document.upgrade() {
            update_theme_color(&mut document.borrow_mut(), change.mode());
        }
    });
}

fn update_theme_color(doc: &mut Document, mode: ThemeMode) {
    let color = if mode.is_dark() {
        THEME_COLOR_DARK
    } else {
        THEME_COLOR_LIGHT
    };
    doc.set_meta(THEME_COLOR_META, color);
}

/// Reports every change to `sink` as `dark_mode_toggle {"mode": ...}`.
pub fn attach_analytics(controller: &ThemeController, sink: Rc<dyn AnalyticsSink>) {
    controller.on_change(move |change| {
        sink.track(ANALYTICS_EVENT, &json!({ "mode": change.mode().as_str() }));
    });
}

/// Logs every change at `info`.
pub fn attach_change_log(controller: &ThemeController) {
    controller.on_change(|change| {
        let state = if change.is_dark { "enabled" } else { "disabled" };
        tracing::info!(is_dark = change.is_dark, "dark mode {}", state);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::ManualSignal;
    use crate::store::MemoryStore;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<(String, Value)>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn track(&self, event: &str, properties: &Value) {
            self.events
                .borrow_mut()
                .push((event.to_string(), properties.clone()));
        }
    }

    fn controller() -> ThemeController {
        ThemeController::builder(MemoryStore::new(), ManualSignal::new(ThemeMode::Light)).init()
    }

    #[test]
    fn test_theme_color_meta_created_and_updated() {
        let controller = controller();
        attach_theme_color_meta(&controller);
        assert_eq!(controller.document().borrow().meta(THEME_COLOR_META), None);

        controller.toggle();
        assert_eq!(
            controller.document().borrow().meta(THEME_COLOR_META),
            Some("#0d1117")
        );

        controller.toggle();
        assert_eq!(
            controller.document().borrow().meta(THEME_COLOR_META),
            Some("#2c3e50")
        );
    }

    #[test]
    fn test_analytics_event_per_change() {
        let controller = controller();
        let sink = Rc::new(RecordingSink::default());
        attach_analytics(&controller, sink.clone());

        controller.enable_dark_mode();
        controller.reset_to_system_preference();

        let events = sink.events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "dark_mode_toggle");
        assert_eq!(events[0].1, json!({ "mode": "dark" }));
        assert_eq!(events[1].1, json!({ "mode": "light" }));
    }

    #[test]
    fn test_change_log_does_not_disturb_others() {
        let controller = controller();
        attach_change_log(&controller);
        attach_theme_color_meta(&controller);
        controller.apply(ThemeMode::Dark);
        assert_eq!(
            controller.document().borrow().meta(THEME_COLOR_META),
            Some(THEME_COLOR_DARK)
        );
    }
}
