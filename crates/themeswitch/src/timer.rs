//! Single-threaded delayed callbacks.
//!
//! [`TimerQueue`] is a virtual clock plus a queue of fire-and-forget tasks.
//! Nothing runs on its own: the owner advances the clock and due tasks run
//! in deadline order (ties in scheduling order). There is no cancellation;
//! a task scheduled is a task that will run once its deadline passes.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

type Task = Box<dyn FnOnce()>;

/// Shared handle to a virtual-clock task queue.
///
/// # Example
///
/// ```rust
/// use themeswitch::TimerQueue;
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let timers = TimerQueue::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// timers.schedule(Duration::from_millis(400), move || flag.set(true));
///
/// timers.advance(Duration::from_millis(399));
/// assert!(!fired.get());
/// timers.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Clone, Default)]
pub struct TimerQueue {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    now: Cell<Duration>,
    seq: Cell<u64>,
    tasks: RefCell<BTreeMap<(Duration, u64), Task>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time, measured from queue creation.
    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    /// Number of tasks waiting for their deadline.
    pub fn pending(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    /// Schedules `task` to run `delay` after the current virtual time.
    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) {
        let seq = self.inner.seq.get();
        self.inner.seq.set(seq + 1);
        let deadline = self.now() + delay;
        self.inner
            .tasks
            .borrow_mut()
            .insert((deadline, seq), Box::new(task));
    }

    /// Moves the clock forward by `by`, running every task that becomes due.
    ///
    /// Each task observes [`TimerQueue::now`] equal to its own deadline.
    /// Tasks scheduled by a running task run in the same call if they fall
    /// due before the target time. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        while let Some(((deadline, _), task)) = self.pop_due(target) {
            self.inner.now.set(deadline);
            task();
            ran += 1;
        }
        self.inner.now.set(target);
        ran
    }

    /// Runs every pending task, advancing the clock to the last deadline.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.inner.tasks.borrow().keys().next().map(|(d, _)| *d);
            match next {
                Some(deadline) => {
                    let by = deadline.saturating_sub(self.now());
                    ran += self.advance(by);
                }
                None => return ran,
            }
        }
    }

    fn pop_due(&self, target: Duration) -> Option<((Duration, u64), Task)> {
        let mut tasks = self.inner.tasks.borrow_mut();
        let key = *tasks.keys().next()?;
        if key.0 > target {
            return None;
        }
        tasks.remove(&key).map(|task| (key, task))
    }
}

impl std::fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}
