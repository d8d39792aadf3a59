//! Explicitly driven system signal.

use std::cell::Cell;
use std::rc::Rc;

use super::{Listeners, SignalListener, SystemSignal};
use crate::mode::ThemeMode;

/// A system signal whose value is set by the caller.
///
/// Stands in for a `prefers-color-scheme` media query: [`ManualSignal::set`]
/// plays the role of the user flipping their OS theme while the page is
/// open. Clones share state.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ManualSignal, SystemSignal, ThemeMode};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let signal = ManualSignal::new(ThemeMode::Light);
/// let seen = Rc::new(Cell::new(None));
/// let sink = seen.clone();
/// signal.subscribe(Box::new(move |mode| sink.set(Some(mode))));
///
/// signal.set(ThemeMode::Dark);
/// assert_eq!(seen.get(), Some(ThemeMode::Dark));
/// ```
#[derive(Debug, Clone)]
pub struct ManualSignal {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    current: Cell<ThemeMode>,
    listeners: Listeners,
}

impl ManualSignal {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            inner: Rc::new(Inner {
                current: Cell::new(initial),
                listeners: Listeners::default(),
            }),
        }
    }

    /// Changes the system preference, notifying listeners if it differs.
    pub fn set(&self, mode: ThemeMode) {
        if self.inner.current.replace(mode) != mode {
            self.inner.listeners.notify(mode);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

impl SystemSignal for ManualSignal {
    fn read(&self) -> ThemeMode {
        self.inner.current.get()
    }

    fn subscribe(&self, listener: SignalListener) {
        self.inner.listeners.push(listener);
    }
}
