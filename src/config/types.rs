use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// UI loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Milliseconds between ticks of the event loop (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Logging settings.
///
/// The terminal is owned by the TUI, so logs only go to a file; when no
/// file is configured, logging is disabled entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. None disables logging.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default tracing filter, overridden by `RUST_LOG` (default: "info").
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_tick_rate_ms() -> u64 {
    250
}
