//! Command definitions for keyboard input handling.
//!
//! This module defines all commands that can be triggered by keyboard input.
//! The [`Command`] enum decouples key bindings from their effects.

/// Represents all possible commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C)
    Quit,
    /// Log out from an authenticated view (Ctrl+L)
    Logout,
    /// Switch between Login and Register (Ctrl+R)
    ToggleAuthView,
    /// Show or mask the password (Ctrl+P)
    TogglePasswordVisibility,

    // =========================================================================
    // Navigation
    // =========================================================================
    /// Next field or column (Tab)
    FocusNext,
    /// Previous field or column (Shift+Tab)
    FocusPrev,
    /// Submit the form or activate the focused control (Enter)
    Activate,
    /// Leave the current view (Esc)
    Back,
    /// Move the highlight up
    MoveUp,
    /// Move the highlight down
    MoveDown,
    /// Submit the exercise draft from anywhere in the lesson view (Ctrl+S)
    SubmitSolution,

    // =========================================================================
    // Editing
    // =========================================================================
    /// Insert a character at cursor position
    InsertChar(char),
    /// Insert a newline into the draft (Enter on the draft editor)
    InsertNewline,
    /// Insert pasted text
    Paste(String),
    /// Delete character before cursor (Backspace)
    Backspace,
    /// Delete character at cursor (Delete)
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,

    /// Key is recognized but does nothing in this context
    Noop,
}

impl Command {
    /// True for commands that change the text of the focused field.
    pub fn edits_text(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::Paste(_)
                | Command::Backspace
                | Command::DeleteChar
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_text() {
        assert!(Command::InsertChar('a').edits_text());
        assert!(Command::Paste("x".into()).edits_text());
        assert!(!Command::MoveCursorLeft.edits_text());
        assert!(!Command::Activate.edits_text());
    }
}
