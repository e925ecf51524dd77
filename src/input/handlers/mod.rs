//! Command handlers for executing commands.
//!
//! This module contains handler functions organized by category:
//! - [`navigation`] - Focus movement, view transitions and submissions
//! - [`editing`] - Text input and cursor movement in the focused field

pub mod editing;
pub mod navigation;

pub use editing::*;
pub use navigation::*;

use crate::app::App;
use crate::input::Command;

/// Execute a dispatched command against the app.
///
/// Returns `true` if the command changed anything.
pub fn execute_command(app: &mut App, cmd: &Command) -> bool {
    let handled = if cmd.edits_text()
        || matches!(
            cmd,
            Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
        ) {
        handle_editing_command(app, cmd)
    } else {
        handle_navigation_command(app, cmd)
    };
    if handled {
        app.mark_dirty();
    }
    handled
}
