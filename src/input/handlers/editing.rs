//! Editing command handlers.
//!
//! Handles text input and cursor movement in whichever field has focus.

use crate::app::{App, LessonFocus, View};
use crate::domain::TextField;
use crate::input::Command;

/// The text field under focus, and whether it belongs to a credential form.
fn focused_field(view: &mut View) -> Option<(&mut TextField, bool)> {
    match view {
        View::Login(form) => form.focused_field().map(|f| (f, true)),
        View::Register(form) => form.focused_field().map(|f| (f, true)),
        View::Lesson(lesson) if lesson.focus == LessonFocus::Draft => {
            Some((&mut lesson.draft, false))
        }
        _ => None,
    }
}

/// Handles editing-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    let Some((field, is_form)) = focused_field(&mut app.view) else {
        return false;
    };

    let edited = match cmd {
        Command::InsertChar(c) => {
            field.insert_char(*c);
            true
        }
        // Credential fields are single-line
        Command::InsertNewline if is_form => false,
        Command::InsertNewline => {
            field.insert_char('\n');
            true
        }
        Command::Paste(text) => {
            let text = if is_form {
                text.replace(['\r', '\n'], "")
            } else {
                text.replace("\r\n", "\n")
            };
            field.insert_str(&text);
            true
        }
        Command::Backspace => field.backspace(),
        Command::DeleteChar => field.delete(),
        Command::MoveCursorLeft => {
            field.move_left();
            return true;
        }
        Command::MoveCursorRight => {
            field.move_right();
            return true;
        }
        Command::MoveCursorHome => {
            field.move_home();
            return true;
        }
        Command::MoveCursorEnd => {
            field.move_end();
            return true;
        }
        _ => return false,
    };

    if edited && is_form {
        app.on_form_edited();
    }
    edited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStore, MockHttpClient};
    use crate::api::LessonApiClient;
    use crate::app::{LessonView, LoginField, LoginForm};
    use crate::models::Lesson;
    use std::sync::Arc;

    fn app() -> App {
        let api = LessonApiClient::with_http("http://api.test", Arc::new(MockHttpClient::new()));
        App::new(api, Arc::new(InMemorySessionStore::new()))
    }

    #[test]
    fn test_typing_into_login_username() {
        let mut app = app();
        handle_editing_command(&mut app, &Command::InsertChar('a'));
        handle_editing_command(&mut app, &Command::InsertChar('n'));
        match &app.view {
            View::Login(form) => assert_eq!(form.username.text(), "an"),
            other => panic!("unexpected view {:?}", other.kind()),
        }
    }

    #[test]
    fn test_editing_clears_notification() {
        let mut app = app();
        app.notifications.error("Bad credentials");
        handle_editing_command(&mut app, &Command::InsertChar('x'));
        assert!(app.notifications.current().is_none());
    }

    #[test]
    fn test_newline_ignored_in_form() {
        let mut app = app();
        app.view = View::Login(LoginForm {
            focus: LoginField::Password,
            ..Default::default()
        });
        assert!(!handle_editing_command(&mut app, &Command::InsertNewline));
        handle_editing_command(&mut app, &Command::Paste("pa\nss".into()));
        match &app.view {
            View::Login(form) => assert_eq!(form.password.text(), "pass"),
            other => panic!("unexpected view {:?}", other.kind()),
        }
    }

    #[test]
    fn test_draft_accepts_newlines() {
        let mut app = app();
        app.view = View::Lesson(LessonView::new(Lesson::new("loops", "", "", ""), 0));
        handle_editing_command(&mut app, &Command::InsertChar('a'));
        handle_editing_command(&mut app, &Command::InsertNewline);
        handle_editing_command(&mut app, &Command::Paste("b\r\nc".into()));
        match &app.view {
            View::Lesson(v) => assert_eq!(v.draft.text(), "a\nb\nc"),
            other => panic!("unexpected view {:?}", other.kind()),
        }
    }

    #[test]
    fn test_no_field_under_focus() {
        let mut app = app();
        app.view = View::Login(LoginForm {
            focus: LoginField::Submit,
            ..Default::default()
        });
        assert!(!handle_editing_command(&mut app, &Command::InsertChar('x')));
    }
}
