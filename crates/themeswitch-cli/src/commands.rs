//! Command execution against a loaded page.

use std::time::Duration;

use themeswitch::ThemeController;

use crate::cli::Command;
use crate::report::Report;

/// Runs a one-shot command and reports the resulting state.
///
/// `Watch` is not one-shot; use [`watch`] for it.
pub fn execute(command: &Command, controller: &ThemeController) -> Report {
    let action = match command {
        Command::Status | Command::Watch { .. } => "status",
        Command::Toggle => {
            controller.toggle();
            "toggle"
        }
        Command::Set { mode } => {
            controller.set_explicit_mode(*mode);
            "set"
        }
        Command::Reset => {
            controller.reset_to_system_preference();
            "reset"
        }
        Command::Key { combo } => {
            if controller.handle_key(combo) {
                "toggle"
            } else {
                tracing::info!(key = %combo.key, "key is not the toggle shortcut");
                "ignored"
            }
        }
    };
    Report::capture(action, controller)
}

/// How often and how long to watch.
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    pub interval: Duration,
    /// Number of checks before returning; `None` watches forever.
    pub count: Option<u64>,
}

/// Polls the system signal, reporting each check that applied a mode.
///
/// Between checks the page's timers advance by the interval, so transition
/// cleanups run as they would in a browser. Returns the number of reports
/// emitted.
pub fn watch(
    controller: &ThemeController,
    options: WatchOptions,
    mut poll: impl FnMut() -> bool,
    mut sleep: impl FnMut(Duration),
    mut emit: impl FnMut(Report),
) -> u64 {
    let mut checks = 0;
    let mut emitted = 0;
    while options.count.map_or(true, |count| checks < count) {
        sleep(options.interval);
        controller.timers().advance(options.interval);
        checks += 1;

        let before = controller.notifications();
        if poll() && controller.notifications() > before {
            emit(Report::capture("system", controller));
            emitted += 1;
        }
    }
    emitted
}
