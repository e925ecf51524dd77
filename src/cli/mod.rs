//! CLI module for CodeLingo.
//!
//! Handles the flags that act without starting the TUI. Call
//! [`run_cli_command`] early in `main()`:
//!
//! ```ignore
//! use codelingo::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&args.command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::adapters::FileSessionStore;
use crate::startup::AppConfig;
use crate::traits::SessionStorage;

/// Forget the stored session without starting the UI.
pub fn handle_logout_command(config: &AppConfig) -> Result<()> {
    let store = FileSessionStore::in_dir(config.data_dir()?);
    store.clear()?;
    tracing::info!("Stored session cleared from the command line");
    println!("Signed out.");
    Ok(())
}

/// Run a CLI command if applicable.
///
/// Returns `None` for `RunTui`, otherwise the outcome of the command.
pub fn run_cli_command(command: &CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Logout => Some(handle_logout_command(config)),
        CliCommand::RunTui => None,
    }
}
