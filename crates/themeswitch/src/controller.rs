//! The theme preference controller.
//!
//! [`ThemeController`] owns the active [`ThemeMode`] of one page. It derives
//! the initial mode from the stored preference or the system signal, follows
//! system changes until the user makes an explicit choice, persists those
//! choices, and tells subscribers about every applied mode.
//!
//! # Mode resolution
//!
//! | Stored preference | Explicit choice this lifetime | Active mode follows |
//! |-------------------|-------------------------------|---------------------|
//! | absent            | no                            | system signal       |
//! | present           | -                             | stored preference   |
//! | -                 | yes                           | explicit choice     |
//!
//! Overrides never expire on their own. They end when the controller is
//! rebuilt (a page reload) or [`ThemeController::reset_to_system_preference`]
//! runs.
//!
//! # Transition race
//!
//! Each apply adds the transition marker and schedules its removal on the
//! timer queue. Timers cannot be cancelled, so two applies closer together
//! than the transition window let the first timer clear the marker while the
//! second transition is still running. The marker only drives a CSS
//! transition duration, so this is left as is.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::ControllerConfig;
use crate::dom::{Document, Element, SharedDocument};
use crate::mode::{ThemeChange, ThemeMode};
use crate::prepaint::clear_prepaint;
use crate::shortcut::KeyEvent;
use crate::signal::SystemSignal;
use crate::store::PreferenceStore;
use crate::timer::TimerQueue;

/// Root class marking the dark theme.
pub const DARK_CLASS: &str = "dark-mode";

/// Root class present while a mode transition is running.
pub const TRANSITION_CLASS: &str = "dark-mode-transition";

/// Class of the label element inside the toggle control.
pub const TOGGLE_TEXT_CLASS: &str = "toggle-text";

const TOGGLE_ANIMATION: &str = "rotate(360deg)";

/// Subscriber callback registered with [`ThemeController::on_change`].
pub type ChangeCallback = Rc<dyn Fn(ThemeChange)>;

/// Builds the stock toggle control: a button with a `.toggle-text` label.
pub fn toggle_control() -> Element {
    Element::new("button").with_child(Element::new("span").with_class(TOGGLE_TEXT_CLASS))
}

/// Handle to a page's theme controller.
///
/// Clones are cheap and refer to the same controller. The controller is
/// single-threaded; callbacks and timers run on the caller's thread.
///
/// The shared document must not be borrowed while calling into the
/// controller, since applying a mode writes to it.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ManualSignal, MemoryStore, ThemeController, ThemeMode};
///
/// let store = MemoryStore::new();
/// let signal = ManualSignal::new(ThemeMode::Dark);
/// let controller = ThemeController::builder(store.clone(), signal.clone()).init();
///
/// // No stored preference: follows the system
/// assert_eq!(controller.mode(), ThemeMode::Dark);
///
/// controller.toggle();
/// assert_eq!(controller.mode(), ThemeMode::Light);
/// assert_eq!(store.raw("darkMode").as_deref(), Some("light"));
///
/// // Explicit choice wins over later system changes
/// signal.set(ThemeMode::Light);
/// signal.set(ThemeMode::Dark);
/// assert_eq!(controller.mode(), ThemeMode::Light);
/// ```
#[derive(Clone)]
pub struct ThemeController {
    inner: Rc<Inner>,
}

struct Inner {
    config: ControllerConfig,
    mode: Cell<ThemeMode>,
    explicit: Cell<bool>,
    notifications: Cell<u64>,
    store: RefCell<Box<dyn PreferenceStore>>,
    signal: Box<dyn SystemSignal>,
    document: SharedDocument,
    timers: TimerQueue,
    subscribers: RefCell<Vec<ChangeCallback>>,
}

/// Builder for [`ThemeController`].
///
/// The store and signal are required; the document, timer queue and
/// configuration default to fresh instances.
pub struct ThemeControllerBuilder {
    store: Box<dyn PreferenceStore>,
    signal: Box<dyn SystemSignal>,
    document: Option<SharedDocument>,
    timers: Option<TimerQueue>,
    config: ControllerConfig,
}

impl ThemeControllerBuilder {
    /// Uses an existing document, e.g. one already pre-painted.
    pub fn document(mut self, document: SharedDocument) -> Self {
        self.document = Some(document);
        self
    }

    /// Schedules delayed callbacks on `timers`.
    pub fn timers(mut self, timers: TimerQueue) -> Self {
        self.timers = Some(timers);
        self
    }

    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the controller and runs its initialization protocol.
    pub fn init(self) -> ThemeController {
        ThemeController::init(
            self.store,
            self.signal,
            self.document.unwrap_or_else(|| Document::new().shared()),
            self.timers.unwrap_or_default(),
            self.config,
        )
    }
}

impl ThemeController {
    /// Starts building a controller over `store` and `signal`.
    pub fn builder(
        store: impl PreferenceStore + 'static,
        signal: impl SystemSignal + 'static,
    ) -> ThemeControllerBuilder {
        ThemeControllerBuilder {
            store: Box::new(store),
            signal: Box::new(signal),
            document: None,
            timers: None,
            config: ControllerConfig::default(),
        }
    }

    /// Creates a controller and runs the initialization protocol.
    ///
    /// 1. Reads the stored preference.
    /// 2. Reads the system preference.
    /// 3. Applies the stored preference if present, otherwise `Dark` if the
    ///    system prefers it. A light system with nothing stored applies
    ///    nothing: the page is already light.
    /// 4. Subscribes to system preference changes.
    pub fn init(
        store: Box<dyn PreferenceStore>,
        signal: Box<dyn SystemSignal>,
        document: SharedDocument,
        timers: TimerQueue,
        config: ControllerConfig,
    ) -> Self {
        let stored = store.get();
        let system = signal.read();
        tracing::debug!(?stored, %system, "initializing theme controller");

        let controller = Self {
            inner: Rc::new(Inner {
                config,
                mode: Cell::new(ThemeMode::default()),
                explicit: Cell::new(false),
                notifications: Cell::new(0),
                store: RefCell::new(store),
                signal,
                document,
                timers,
                subscribers: RefCell::new(Vec::new()),
            }),
        };

        match (stored, system) {
            (Some(mode), _) => controller.apply(mode),
            (None, ThemeMode::Dark) => controller.apply(ThemeMode::Dark),
            (None, ThemeMode::Light) => {}
        }

        let weak: Weak<Inner> = Rc::downgrade(&controller.inner);
        controller.inner.signal.subscribe(Box::new(move |mode| {
            if let Some(inner) = weak.upgrade() {
                ThemeController { inner }.handle_system_change(mode);
            }
        }));

        controller
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The active mode.
    pub fn mode(&self) -> ThemeMode {
        self.inner.mode.get()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode().is_dark()
    }

    /// The preference currently in the store.
    pub fn stored_preference(&self) -> Option<ThemeMode> {
        self.inner.store.borrow().get()
    }

    /// The system preference as the signal reports it now.
    pub fn system_preference(&self) -> ThemeMode {
        self.inner.signal.read()
    }

    /// Whether system changes are currently ignored.
    ///
    /// True after an explicit choice in this lifetime, or while any
    /// preference is stored.
    pub fn is_overridden(&self) -> bool {
        self.inner.explicit.get() || self.stored_preference().is_some()
    }

    /// Number of change notifications emitted so far.
    pub fn notifications(&self) -> u64 {
        self.inner.notifications.get()
    }

    pub fn document(&self) -> SharedDocument {
        Rc::clone(&self.inner.document)
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.inner.timers
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.inner.config
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Applies `mode` to the page and notifies subscribers.
    ///
    /// Adds the transition marker (removed after the transition window),
    /// sets or clears the dark marker, refreshes the toggle control, then
    /// calls every subscriber in registration order. Applying the current
    /// mode again still notifies.
    pub fn apply(&self, mode: ThemeMode) {
        tracing::debug!(%mode, "applying theme mode");
        {
            let mut doc = self.inner.document.borrow_mut();
            let root = doc.root_mut();
            root.add_class(TRANSITION_CLASS);
            root.set_class(DARK_CLASS, mode.is_dark());
            clear_prepaint(root);
            self.update_toggle_control(&mut doc, mode);
        }
        self.inner.mode.set(mode);

        let document = Rc::downgrade(&self.inner.document);
        self.inner
            .timers
            .schedule(self.inner.config.transition(), move || {
                if let Some(document) = document.upgrade() {
                    document.borrow_mut().root_mut().remove_class(TRANSITION_CLASS);
                }
            });

        self.inner
            .notifications
            .set(self.inner.notifications.get() + 1);
        self.notify(ThemeChange::new(mode));
    }

    /// Switches to the opposite mode and remembers it as the user's choice.
    pub fn toggle(&self) {
        let next = self.mode().toggled();
        self.apply(next);
        self.persist(next);
        self.animate_toggle();
    }

    /// Forces `mode` and remembers it as the user's choice.
    pub fn set_explicit_mode(&self, mode: ThemeMode) {
        self.apply(mode);
        self.persist(mode);
    }

    pub fn enable_dark_mode(&self) {
        self.set_explicit_mode(ThemeMode::Dark);
    }

    pub fn enable_light_mode(&self) {
        self.set_explicit_mode(ThemeMode::Light);
    }

    /// Forgets the user's choice and goes back to following the system.
    pub fn reset_to_system_preference(&self) {
        self.inner.store.borrow_mut().clear();
        self.inner.explicit.set(false);
        let system = self.inner.signal.read();
        tracing::debug!(%system, "theme preference reset to system");
        self.apply(system);
    }

    /// Registers `callback` for every future applied mode.
    ///
    /// Callbacks may call back into the controller. There is no way to
    /// unsubscribe; callbacks live as long as the controller.
    pub fn on_change(&self, callback: impl Fn(ThemeChange) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Syncs the toggle control with the active mode.
    ///
    /// Call once the control exists in the document.
    pub fn dom_ready(&self) {
        let mut doc = self.inner.document.borrow_mut();
        self.update_toggle_control(&mut doc, self.mode());
    }

    /// Handles a click on the element with id `target`.
    ///
    /// Returns `true` if the click hit the toggle control and toggled.
    pub fn handle_click(&self, target: &str) -> bool {
        let is_toggle = target == self.inner.config.toggle_id
            && self
                .inner
                .document
                .borrow()
                .get_element_by_id(target)
                .is_some();
        if is_toggle {
            self.toggle();
        }
        is_toggle
    }

    /// Handles a document-level key press.
    ///
    /// Returns `true` if the press was the toggle shortcut, meaning the
    /// browser's default action should be prevented.
    pub fn handle_key(&self, event: &KeyEvent) -> bool {
        if !event.is_toggle_shortcut() {
            return false;
        }
        self.toggle();
        true
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn handle_system_change(&self, mode: ThemeMode) {
        if self.is_overridden() {
            tracing::debug!(%mode, "system theme changed; explicit preference kept");
            return;
        }
        self.apply(mode);
    }

    fn persist(&self, mode: ThemeMode) {
        self.inner.store.borrow_mut().set(mode);
        self.inner.explicit.set(true);
    }

    fn notify(&self, change: ThemeChange) {
        let subscribers: Vec<ChangeCallback> = self.inner.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(change);
        }
    }

    fn update_toggle_control(&self, doc: &mut Document, mode: ThemeMode) {
        let Some(button) = doc.get_element_by_id_mut(&self.inner.config.toggle_id) else {
            return;
        };
        let labels = &self.inner.config.labels;
        let (text, aria) = if mode.is_dark() {
            (&labels.when_dark, &labels.aria_when_dark)
        } else {
            (&labels.when_light, &labels.aria_when_light)
        };

        if let Some(label) = button.find_by_class_mut(TOGGLE_TEXT_CLASS) {
            label.set_text(text.as_str());
        }
        button.set_attribute("aria-label", aria.as_str());
        button.set_attribute("aria-pressed", mode.is_dark().to_string());
    }

    fn animate_toggle(&self) {
        let id = self.inner.config.toggle_id.clone();
        {
            let mut doc = self.inner.document.borrow_mut();
            let Some(button) = doc.get_element_by_id_mut(&id) else {
                return;
            };
            button.set_style("transform", TOGGLE_ANIMATION);
        }

        let document = Rc::downgrade(&self.inner.document);
        self.inner
            .timers
            .schedule(self.inner.config.transition(), move || {
                let Some(document) = document.upgrade() else {
                    return;
                };
                let mut doc = document.borrow_mut();
                if let Some(button) = doc.get_element_by_id_mut(&id) {
                    button.set_style("transform", "");
                }
            });
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode())
            .field("explicit", &self.inner.explicit.get())
            .field("notifications", &self.notifications())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}
