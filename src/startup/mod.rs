//! Startup support: configuration and logging.
//!
//! - [`config`] - [`AppConfig`] layered from defaults, environment and flags
//! - [`logging`] - File-backed `tracing` subscriber
//!
//! # Usage
//!
//! ```ignore
//! use codelingo::startup::{init_logging, AppConfig};
//!
//! let config = AppConfig::from_env();
//! init_logging(&config.log_path()?, &config.log_filter)?;
//! ```

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;
