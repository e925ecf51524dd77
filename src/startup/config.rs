//! Application configuration.
//!
//! Layered as defaults, then environment, then command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::error::StoreError;
use crate::notifications::NotificationTimings;

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "CODELINGO_API_URL";
/// Environment variable overriding the data directory
pub const ENV_HOME: &str = "CODELINGO_HOME";
/// Environment variable holding the log filter
pub const ENV_LOG: &str = "CODELINGO_LOG";

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration.
///
/// Use the builder pattern to customize.
///
/// # Example
///
/// ```ignore
/// use codelingo::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("http://lessons.internal:8000")
///     .with_log_filter("debug");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the lessons API
    pub api_url: String,
    /// Directory holding the session file and the log (default `~/.codelingo`)
    pub data_dir: Option<PathBuf>,
    /// `tracing` filter directive
    pub log_filter: String,
    /// How long notifications stay up
    pub notification_timings: NotificationTimings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notification_timings: NotificationTimings::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the notification lifetimes.
    pub fn with_notification_ttls(mut self, success: Duration, error: Duration) -> Self {
        self.notification_timings = NotificationTimings { success, error };
        self
    }

    /// Defaults overridden by `CODELINGO_API_URL`, `CODELINGO_HOME` and
    /// `CODELINGO_LOG`. Empty values are ignored.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = var(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(home) = var(ENV_HOME) {
            config = config.with_data_dir(home);
        }
        if let Some(filter) = var(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        config
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> Result<PathBuf, StoreError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(".codelingo"))
                .ok_or(StoreError::NoHomeDirectory),
        }
    }

    /// Path of the log file inside the data directory.
    pub fn log_path(&self) -> Result<PathBuf, StoreError> {
        Ok(self.data_dir()?.join("codelingo.log"))
    }
}
