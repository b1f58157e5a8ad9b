use crate::config::prefs::{DisplayMode, Theme};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for termfolio
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "termfolio")]
#[command(about = "A personal website rendered as a simulated shell in your terminal")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Directory of YAML content documents (defaults to the built-in site)
    #[arg(long, value_name = "DIR")]
    pub content: Option<PathBuf>,

    /// Preferences file path
    #[arg(long, value_name = "PATH", env = "TERMFOLIO_PREFS")]
    pub prefs: Option<PathBuf>,

    /// Display mode for this run, overriding the stored preference
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<DisplayMode>,

    /// Colour theme for this run, overriding the stored preference
    #[arg(long, value_enum, value_name = "THEME")]
    pub theme: Option<Theme>,

    /// Run a shell command and print its output instead of starting a
    /// session (can be specified multiple times)
    #[arg(long = "exec", short = 'e', value_name = "COMMAND")]
    pub exec: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to a file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
