//! `themeswitch`: drive a theme preference controller from the shell.

mod cli;
mod commands;
mod page;
mod report;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use themeswitch::{ControllerConfig, FileStore, OsSignal};
use tracing::Level;

use crate::cli::{Cli, Command};
use crate::commands::WatchOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => ControllerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ControllerConfig::default(),
    };

    let store_path = cli.store.clone().unwrap_or_else(page::default_store_path);
    tracing::debug!(
        path = %store_path.display(),
        key = %cli.storage_key,
        "using preference store"
    );
    let store = FileStore::new(store_path).with_key(cli.storage_key.clone());
    let signal = OsSignal::new();
    let controller = page::load(store, signal.clone(), config);

    let command = cli.command.clone().unwrap_or(Command::Status);
    if let Command::Watch { interval_ms, count } = command {
        let options = WatchOptions {
            interval: Duration::from_millis(interval_ms),
            count,
        };
        print_report(&commands::execute(&Command::Status, &controller), &cli)?;
        let mut failure = None;
        commands::watch(
            &controller,
            options,
            || signal.poll(),
            std::thread::sleep,
            |report| {
                if failure.is_none() {
                    failure = print_report(&report, &cli).err();
                }
            },
        );
        if let Some(err) = failure {
            return Err(err);
        }
    } else {
        let report = commands::execute(&command, &controller);
        controller.timers().run_until_idle();
        print_report(&report, &cli)?;
    }

    Ok(())
}

fn print_report(report: &report::Report, cli: &Cli) -> Result<()> {
    let rendered = report
        .render(cli.output)
        .context("serializing report")?;
    println!("{}", rendered);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
