//! Configuration data model.
//!
//! Structs are read from TOML with `Deserialize`; the app never writes the file.
//! Every field has a sensible default so the application works out of the box.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub chime: ChimeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Show the key help line in the status bar.
    #[serde(default = "default_true")]
    pub show_help: bool,
    /// Draw the clock with large block glyphs.
    #[serde(default = "default_true")]
    pub big_clock: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help: true,
            big_clock: true,
        }
    }
}

/// End-of-phase sound settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ChimeConfig {
    /// Ring the terminal bell when a phase completes.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// External player command, e.g. `paplay ~/sounds/bell.oga`.
    #[serde(default)]
    pub command: Option<String>,
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            bell: true,
            command: None,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/pomoclock/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
