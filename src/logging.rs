//! Diagnostic logging
//!
//! The UI owns the terminal, so events go to a file and only when one is
//! configured. Without a log file no subscriber is installed and the
//! `tracing` macros are no-ops.

use crate::config::Config;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("cannot open log file: {0}")]
    Io(#[from] io::Error),

    #[error("cannot install log subscriber: {0}")]
    Subscriber(String),
}

/// Install the global subscriber described by `config`.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `-v`.
pub fn init(config: &Config) -> Result<(), LogInitError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogInitError::Subscriber(e.to_string()))
}
