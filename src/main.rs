//! # `termfolio`
//!
//! `termfolio` presents a personal website as a simulated command-line
//! shell: `ls`, `cd` and `view` browse the biography, publications,
//! experiences and blog, and entries open in a vim-style viewer.
//!
//! ## Usage
//!
//! **Interactive session:**
//! ```sh
//! termfolio
//! ```
//!
//! **Scripted:**
//! ```sh
//! termfolio --exec "cd blog" --exec "view post1.txt"
//! ```
//!
//! **Plain page:**
//! ```sh
//! termfolio --mode plain | less
//! ```
//!
//! See `termfolio --help` for all options.

use anyhow::{Context as _, Result};
use clap::Parser as _;
use std::fs::File;
use std::io::{self, IsTerminal as _};
use std::sync::Mutex;
use termfolio::cli::Args;
use termfolio::error::SiteError;
use termfolio::system::real::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging(&args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }

    let system = RealSystem::new();
    match termfolio::run(&args, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<SiteError>()
                    .map_or(1, SiteError::exit_code),
            );
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let interactive =
        args.exec.is_empty() && io::stdin().is_terminal() && io::stdout().is_terminal();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            fmt()
                .with_target(false)
                .with_ansi(false)
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Log lines would land on top of the full-screen session
        None if interactive => {
            fmt()
                .with_target(false)
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
        None => {
            fmt()
                .with_target(false)
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
