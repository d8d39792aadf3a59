//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use themeswitch::{KeyEvent, ThemeMode, DEFAULT_STORAGE_KEY};

/// Inspect and change the persisted light/dark preference.
///
/// Every invocation behaves like one page load: the stored preference and
/// the OS color scheme are read, the command runs, and pending transitions
/// settle before exit.
#[derive(Debug, Parser)]
#[command(name = "themeswitch", version, about)]
pub struct Cli {
    /// Preference file (a JSON object emulating local storage)
    #[arg(long, env = "THEMESWITCH_STORE", global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Key of the preference entry inside the store
    #[arg(
        long,
        env = "THEMESWITCH_STORAGE_KEY",
        global = true,
        default_value = DEFAULT_STORAGE_KEY,
        value_name = "KEY"
    )]
    pub storage_key: String,

    /// YAML controller configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the active mode and where it comes from (default)
    Status,
    /// Switch to the opposite mode and remember it
    Toggle,
    /// Force a mode and remember it
    Set {
        /// `dark` or `light`
        mode: ThemeMode,
    },
    /// Forget the stored choice and follow the OS again
    Reset,
    /// Feed a keyboard combo, e.g. `ctrl+shift+D`
    Key {
        combo: KeyEvent,
    },
    /// Follow OS color scheme changes, printing each applied mode
    Watch {
        /// Milliseconds between OS checks
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
        /// Stop after this many checks
        #[arg(long)]
        count: Option<u64>,
    },
}
