//! Input handling module for keyboard processing.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Executed by [`handlers::execute_command`]
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use codelingo::input::{handle_key, CommandRegistry};
//!
//! let registry = CommandRegistry::new();
//! handle_key(&mut app, &registry, key_event);
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod registry;

pub use command::Command;
pub use context::{FocusTarget, InputContext};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::App;

/// Dispatch a key press against the current app state and execute it.
///
/// Returns `true` if the key changed anything.
pub fn handle_key(app: &mut App, registry: &CommandRegistry, key: KeyEvent) -> bool {
    let context = InputContext::from_app(app);
    match registry.dispatch(key, &context) {
        Some(cmd) => {
            tracing::trace!("Key {:?} -> {:?}", key.code, cmd);
            handlers::execute_command(app, &cmd)
        }
        None => false,
    }
}

/// Insert pasted text into the focused field.
pub fn handle_paste(app: &mut App, text: String) -> bool {
    handlers::execute_command(app, &Command::Paste(text))
}
