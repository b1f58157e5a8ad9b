//! `termfolio` - A personal website rendered as a simulated shell
//!
//! This library provides the content store, the command interpreter with its
//! modal viewer, and the front ends that present them: an interactive
//! terminal session, scripted batch execution and a plain single-page view.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod operations;
pub mod shell;
pub mod system;
pub mod utils;
pub mod viewer;

use anyhow::{Context as _, Result};
use cli::Args;
use config::Settings;
use config::prefs::{DisplayMode, PreferenceStore};
use error::SiteError;
use operations::{Session, plain_page, run_batch, run_interactive};
use shell::Shell;
use std::io::{self, BufRead as _, IsTerminal as _, Write as _};
use system::System;
use tracing::{debug, info, warn};

/// Main entry point for the termfolio library
///
/// Picks the front end from the arguments and the terminal: `--exec`
/// commands run in batch, a plain preference with redirected output prints
/// the plain page, redirected input runs in batch, and anything else starts
/// an interactive session.
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    let settings = Settings::from_args(args);
    let store = settings.load_content(system)?;
    let prefs_store = PreferenceStore::new(system, settings.prefs_path.as_deref());
    let prefs = settings.effective(prefs_store.load());
    debug!("Effective preferences: {prefs:?}");

    let stdin_is_tty = io::stdin().is_terminal();
    let stdout_is_tty = io::stdout().is_terminal();
    let mut shell = Shell::new(store, system);

    if !settings.exec.is_empty() {
        info!("Running {} command(s) in batch mode", settings.exec.len());
        let failures = run_batch(&mut shell, &settings.exec, &mut io::stdout().lock())?;
        return check_failures(failures);
    }

    if prefs.mode == DisplayMode::Plain && !stdout_is_tty {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(plain_page(shell.store()).as_bytes())
            .context("Failed to write plain page")?;
        stdout.flush().context("Failed to write plain page")?;
        return Ok(());
    }

    if !stdin_is_tty || !stdout_is_tty {
        info!("Reading commands from standard input");
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read commands from standard input")?;
        let failures = run_batch(&mut shell, &lines, &mut io::stdout().lock())?;
        return check_failures(failures);
    }

    let mut session = Session::new(shell, prefs_store, prefs);
    run_interactive(&mut session)
}

/// Fail the run with the first command error so batch callers see its exit code
fn check_failures(failures: Vec<SiteError>) -> Result<()> {
    let count = failures.len();
    match failures.into_iter().next() {
        Some(first) => {
            warn!("{count} command(s) reported an error");
            Err(first.into())
        }
        None => Ok(()),
    }
}
