//! Operating-system color-scheme signals.
//!
//! A [`SystemSignal`] reports whether the environment prefers a dark or light
//! scheme and notifies listeners when that preference changes while the
//! controller is alive.
//!
//! - [`ManualSignal`]: driven explicitly, like an emulated media query
//! - [`OsSignal`]: backed by OS detection, re-checked on [`OsSignal::poll`]

mod manual;
mod os;

pub use manual::ManualSignal;
pub use os::{detect_system_mode, set_theme_detector, OsSignal, ThemeDetector};

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::mode::ThemeMode;

/// Callback invoked with the new system mode after each change.
pub type SignalListener = Box<dyn FnMut(ThemeMode)>;

/// Source of the system color-scheme preference.
pub trait SystemSignal {
    /// Returns the current system preference.
    fn read(&self) -> ThemeMode;

    /// Registers `listener` for every future change.
    ///
    /// Listeners stay registered for the lifetime of the signal.
    fn subscribe(&self, listener: SignalListener);
}

/// Listener list shared by the signal implementations.
///
/// Listeners are moved out while they run, so a listener may read the
/// signal or register further listeners without a double borrow. A change
/// reported while listeners are running is queued and delivered once the
/// current pass finishes, so every listener sees every change in order.
#[derive(Default)]
pub(crate) struct Listeners {
    inner: RefCell<Vec<SignalListener>>,
    pending: RefCell<VecDeque<ThemeMode>>,
    delivering: Cell<bool>,
}

impl Listeners {
    pub(crate) fn push(&self, listener: SignalListener) {
        self.inner.borrow_mut().push(listener);
    }

    pub(crate) fn notify(&self, mode: ThemeMode) {
        self.pending.borrow_mut().push_back(mode);
        if self.delivering.replace(true) {
            return;
        }

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(mode) = next else {
                break;
            };
            let mut running = std::mem::take(&mut *self.inner.borrow_mut());
            for listener in running.iter_mut() {
                listener(mode);
            }
            let mut slot = self.inner.borrow_mut();
            let added = std::mem::take(&mut *slot);
            *slot = running;
            slot.extend(added);
        }
        self.delivering.set(false);
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.len()).finish()
    }
}
