//! System signal backed by operating-system theme detection.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::{Listeners, SignalListener, SystemSignal};
use crate::mode::ThemeMode;

/// Function used to query the OS color scheme.
pub type ThemeDetector = fn() -> ThemeMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the OS prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific system mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Runs the current detector.
pub fn detect_system_mode() -> ThemeMode {
    let detector = *THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    detector()
}

fn os_theme_detector() -> ThemeMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemeMode::Dark,
        OsThemeMode::Light => ThemeMode::Light,
    }
}

/// A system signal that reads the OS color scheme.
///
/// Operating systems do not push scheme changes to us, so listeners are only
/// notified when [`OsSignal::poll`] runs. [`SystemSignal::read`] always asks
/// the detector, so a reset picks up the current scheme even between polls.
/// The mode seen by the last poll is kept only to decide what counts as a
/// change.
#[derive(Debug, Clone)]
pub struct OsSignal {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    last: Cell<ThemeMode>,
    listeners: Listeners,
}

impl OsSignal {
    /// Detects the current scheme and starts tracking it.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                last: Cell::new(detect_system_mode()),
                listeners: Listeners::default(),
            }),
        }
    }

    /// Re-detects the scheme, notifying listeners if it changed.
    ///
    /// Returns `true` when a change was observed.
    pub fn poll(&self) -> bool {
        let detected = detect_system_mode();
        if self.inner.last.replace(detected) == detected {
            return false;
        }
        tracing::debug!(mode = %detected, "system color scheme changed");
        self.inner.listeners.notify(detected);
        true
    }
}

impl Default for OsSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSignal for OsSignal {
    fn read(&self) -> ThemeMode {
        detect_system_mode()
    }

    fn subscribe(&self, listener: SignalListener) {
        self.inner.listeners.push(listener);
    }
}
