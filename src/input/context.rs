//! Input context for command dispatch.
//!
//! A snapshot of the parts of [`App`] state that decide how a key is
//! interpreted, so the registry never needs the app itself.

use crate::app::{App, LanguageColumn, LessonFocus, LoginField, RegisterField, View, ViewKind};

/// What the keyboard is currently pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// A single-line form field
    #[default]
    TextField,
    /// The multi-line exercise draft
    Draft,
    /// A list or picker column
    List,
    /// A button
    Button,
}

/// Current UI state relevant to key dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub view: ViewKind,
    pub focus: FocusTarget,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the view.
    pub fn with_view(mut self, view: ViewKind) -> Self {
        self.view = view;
        self
    }

    /// Builder method to set the focus.
    pub fn with_focus(mut self, focus: FocusTarget) -> Self {
        self.focus = focus;
        self
    }

    /// Capture the context from the app.
    pub fn from_app(app: &App) -> Self {
        let focus = match &app.view {
            View::Login(form) => match form.focus {
                LoginField::Submit => FocusTarget::Button,
                _ => FocusTarget::TextField,
            },
            View::Register(form) => match form.focus {
                RegisterField::Submit => FocusTarget::Button,
                _ => FocusTarget::TextField,
            },
            View::LanguageSelection(selection) => match selection.column {
                LanguageColumn::Confirm => FocusTarget::Button,
                _ => FocusTarget::List,
            },
            View::Lessons(_) => FocusTarget::List,
            View::Lesson(lesson) => match lesson.focus {
                LessonFocus::Draft => FocusTarget::Draft,
                LessonFocus::Submit => FocusTarget::Button,
            },
        };
        Self {
            view: app.view_kind(),
            focus,
        }
    }

    /// Whether printable keys should be inserted as text.
    pub fn accepts_text(&self) -> bool {
        matches!(self.focus, FocusTarget::TextField | FocusTarget::Draft)
    }

    pub fn is_authenticated_view(&self) -> bool {
        !matches!(self.view, ViewKind::Login | ViewKind::Register)
    }
}
