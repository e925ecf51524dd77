//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! [`InputContext`]:
//! 1. Global bindings (Ctrl+C, Ctrl+L, Ctrl+R, Ctrl+P)
//! 2. Navigation keys (Tab, Enter, Esc, arrows)
//! 3. Editing keys, only when a text field or the draft has focus

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{FocusTarget, InputContext};
use crate::app::ViewKind;

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry;

impl CommandRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.dispatch_control(key.code, context);
        }

        match key.code {
            KeyCode::Tab => Some(Command::FocusNext),
            KeyCode::BackTab => Some(Command::FocusPrev),
            KeyCode::Esc => Some(Command::Back),
            KeyCode::Enter if context.focus == FocusTarget::Draft => {
                if key.modifiers.contains(KeyModifiers::ALT) {
                    Some(Command::SubmitSolution)
                } else {
                    Some(Command::InsertNewline)
                }
            }
            KeyCode::Enter => Some(Command::Activate),
            KeyCode::Up if !context.accepts_text() => Some(Command::MoveUp),
            KeyCode::Down if !context.accepts_text() => Some(Command::MoveDown),
            _ if context.accepts_text() => self.dispatch_editing(key),
            KeyCode::Char('k') => Some(Command::MoveUp),
            KeyCode::Char('j') => Some(Command::MoveDown),
            _ => None,
        }
    }

    fn dispatch_control(&self, code: KeyCode, context: &InputContext) -> Option<Command> {
        match code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('l') if context.is_authenticated_view() => Some(Command::Logout),
            KeyCode::Char('r') if !context.is_authenticated_view() => {
                Some(Command::ToggleAuthView)
            }
            KeyCode::Char('p') if !context.is_authenticated_view() => {
                Some(Command::TogglePasswordVisibility)
            }
            KeyCode::Char('s') if context.view == ViewKind::Lesson => {
                Some(Command::SubmitSolution)
            }
            KeyCode::Char('a') if context.accepts_text() => Some(Command::MoveCursorHome),
            KeyCode::Char('e') if context.accepts_text() => Some(Command::MoveCursorEnd),
            _ => Some(Command::Noop),
        }
    }

    fn dispatch_editing(&self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) => {
                Some(Command::InsertChar(c))
            }
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Delete => Some(Command::DeleteChar),
            KeyCode::Left => Some(Command::MoveCursorLeft),
            KeyCode::Right => Some(Command::MoveCursorRight),
            KeyCode::Home => Some(Command::MoveCursorHome),
            KeyCode::End => Some(Command::MoveCursorEnd),
            _ => None,
        }
    }
}
