//! Command-line configuration

use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Калькулятор";

#[derive(Debug, Clone, Parser)]
#[command(name = "calctty", version, about = "A chain calculator for the terminal")]
pub struct Config {
    /// Write diagnostic logs to this file (the terminal itself is owned by the UI)
    #[arg(long, value_name = "PATH", env = "CALCTTY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not capture the mouse; the keypad is then keyboard-only
    #[arg(long)]
    pub no_mouse: bool,

    /// Heading shown above the display
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,
}

impl Config {
    /// Default tracing filter when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: None,
            verbose: 0,
            no_mouse: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
