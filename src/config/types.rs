use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Toast behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Hide toasts automatically (default: true).
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss: bool,
    /// Delay before an automatic hide, in milliseconds (default: 3000).
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: u64,
}

impl ToastConfig {
    /// Delay for the auto-dismiss timer, or `None` when it is turned off.
    pub fn auto_dismiss_delay(&self) -> Option<Duration> {
        self.auto_dismiss
            .then(|| Duration::from_millis(self.auto_dismiss_ms))
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Logging stays off when neither this nor
    /// `SOCIALSYNC_LOG` is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_auto_dismiss() -> bool {
    true
}

fn default_auto_dismiss_ms() -> u64 {
    3000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_dismiss: default_auto_dismiss(),
            auto_dismiss_ms: default_auto_dismiss_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
