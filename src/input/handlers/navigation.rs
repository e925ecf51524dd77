//! Navigation command handlers.
//!
//! Handles focus movement, list highlight, view transitions and the
//! submissions triggered by Enter.

use crate::app::{App, LanguageColumn, LessonFocus, LoginField, View};
use crate::input::Command;

/// Handles navigation-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.should_quit = true;
            true
        }
        Command::Logout => {
            if !app.view.requires_auth() {
                return false;
            }
            app.logout();
            true
        }
        Command::ToggleAuthView => {
            match app.view {
                View::Login(_) => app.show_register(),
                View::Register(_) => app.show_login(),
                _ => return false,
            }
            true
        }
        Command::TogglePasswordVisibility => {
            app.toggle_password_visibility();
            true
        }
        Command::FocusNext => cycle_focus(app, true),
        Command::FocusPrev => cycle_focus(app, false),
        Command::MoveUp => move_highlight(app, false),
        Command::MoveDown => move_highlight(app, true),
        Command::Activate => activate(app),
        Command::Back => go_back(app),
        Command::SubmitSolution => {
            app.submit_solution();
            true
        }
        Command::Noop => true,
        _ => false,
    }
}

fn cycle_focus(app: &mut App, forward: bool) -> bool {
    match &mut app.view {
        View::Login(form) => {
            form.focus = if forward { form.focus.next() } else { form.focus.prev() };
        }
        View::Register(form) => {
            form.focus = if forward { form.focus.next() } else { form.focus.prev() };
        }
        View::LanguageSelection(selection) => {
            selection.column = if forward {
                selection.column.next()
            } else {
                selection.column.prev()
            };
        }
        View::Lesson(lesson) => {
            lesson.focus = match lesson.focus {
                LessonFocus::Draft => LessonFocus::Submit,
                LessonFocus::Submit => LessonFocus::Draft,
            };
        }
        View::Lessons(_) => return false,
    }
    true
}

fn move_highlight(app: &mut App, down: bool) -> bool {
    let target_len = app.lessons.target().len();
    match &mut app.view {
        View::LanguageSelection(selection) => {
            if down {
                selection.move_down();
            } else {
                selection.move_up();
            }
        }
        View::Lessons(list) => {
            list.selected = if down {
                (list.selected + 1).min(target_len.saturating_sub(1))
            } else {
                list.selected.saturating_sub(1)
            };
        }
        _ => return false,
    }
    true
}

fn activate(app: &mut App) -> bool {
    match &mut app.view {
        View::Login(_) => app.submit_login(),
        View::Register(_) => app.submit_registration(),
        View::LanguageSelection(selection) => {
            if selection.column == LanguageColumn::Confirm {
                app.confirm_languages();
            } else {
                selection.choose_highlighted();
                selection.column = selection.column.next();
            }
        }
        View::Lessons(list) => {
            let index = list.selected;
            app.open_lesson(index);
        }
        View::Lesson(lesson) => {
            if lesson.focus == LessonFocus::Submit {
                app.submit_solution();
            } else {
                return false;
            }
        }
    }
    true
}

fn go_back(app: &mut App) -> bool {
    match &mut app.view {
        View::Lesson(_) => app.back_to_lessons(),
        View::Register(_) => app.show_login(),
        View::Login(form) => form.focus = LoginField::Username,
        _ => return false,
    }
    true
}
