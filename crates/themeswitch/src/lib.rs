//! # Themeswitch - light/dark preference control for a page
//!
//! Themeswitch keeps one page's display mode in step with two sources: the
//! user's explicit choice, persisted in a preference store, and the
//! operating system's color-scheme preference.
//!
//! ## Quick Start
//!
//! ```rust
//! use themeswitch::{
//!     toggle_control, Document, ManualSignal, MemoryStore, PreferenceStore, ThemeController,
//!     ThemeMode,
//! };
//!
//! let mut page = Document::new();
//! page.insert("darkModeToggle", toggle_control());
//!
//! let store = MemoryStore::new();
//! let signal = ManualSignal::new(ThemeMode::Dark);
//! let controller = ThemeController::builder(store.clone(), signal.clone())
//!     .document(page.shared())
//!     .init();
//!
//! assert!(controller.is_dark_mode());
//!
//! controller.on_change(|change| println!("dark: {}", change.is_dark));
//! controller.toggle();
//!
//! assert_eq!(controller.mode(), ThemeMode::Light);
//! assert_eq!(store.get(), Some(ThemeMode::Light));
//! ```
//!
//! ## Core Concepts
//!
//! - [`ThemeMode`]: `Dark` or `Light`
//! - [`PreferenceStore`]: where explicit choices are persisted
//!   ([`MemoryStore`], [`FileStore`])
//! - [`SystemSignal`]: the OS preference and its change notifications
//!   ([`ManualSignal`], [`OsSignal`])
//! - [`ThemeController`]: applies modes, handles toggles and resets, and
//!   notifies subscribers with a [`ThemeChange`]
//! - [`Document`]: the page state the controller writes to
//! - [`TimerQueue`]: the delayed cleanups for transitions and animations
//!
//! ## Resolution Rules
//!
//! A stored preference always beats the system preference. Without one, the
//! controller follows the system, including changes while it runs, until the
//! user toggles or forces a mode. From then on system changes are ignored
//! until [`ThemeController::reset_to_system_preference`] or a new controller.
//!
//! ## Consumers
//!
//! The [`consumers`] module has ready-made subscribers for the mobile
//! `theme-color` meta tag, analytics and logging. [`prepaint`] avoids a flash
//! of the wrong theme before the controller starts.

pub mod config;
pub mod consumers;
pub mod controller;
pub mod dom;
pub mod mode;
pub mod prepaint;
pub mod shortcut;
pub mod signal;
pub mod store;
pub mod timer;

pub use config::{ConfigError, ControllerConfig, ToggleLabels};
pub use consumers::{attach_analytics, attach_change_log, attach_theme_color_meta, AnalyticsSink};
pub use controller::{
    toggle_control, ChangeCallback, ThemeController, ThemeControllerBuilder, DARK_CLASS,
    TOGGLE_TEXT_CLASS, TRANSITION_CLASS,
};
pub use dom::{Document, Element, SharedDocument};
pub use mode::{ParseModeError, ThemeChange, ThemeMode};
pub use prepaint::prepaint;
pub use shortcut::{KeyEvent, ParseKeyError};
pub use signal::{
    detect_system_mode, set_theme_detector, ManualSignal, OsSignal, SignalListener, SystemSignal,
    ThemeDetector,
};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, DEFAULT_STORAGE_KEY};
pub use timer::TimerQueue;
