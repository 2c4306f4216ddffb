//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily
//! rolling file `pomoclock.<date>.log` in the configured log directory
//! (default: `~/.local/share/pomoclock/logs/`). Logging is best effort: if
//! the file cannot be set up the timer still runs, just without a log.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log directory, or `None` when
/// logging is disabled or could not be set up.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let log_dir = expand_log_dir(&config.log_dir);
    match install(config, &log_dir) {
        Ok(()) => Some(log_dir),
        Err(e) => {
            // Subscriber is not up yet; the alternate screen is not entered yet either
            eprintln!("Logging disabled: {:#}", e);
            None
        }
    }
}

fn install(config: &LoggingConfig, log_dir: &Path) -> Result<()> {
    let appender = open_appender(log_dir)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

/// Daily rolling appender; the date in the file name follows the wall clock
/// at write time, so a run past midnight moves on to the next day's file.
fn open_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("pomoclock")
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))
}

/// Expand a leading `~` to the home directory.
fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    PathBuf::from(log_dir)
}
