//! Type definitions for the application state.
//!
//! Contains the view sum type and the per-view working state:
//! - [`View`] - Which view is active, together with its form state
//! - [`ViewKind`] - Payload-free discriminant of [`View`]
//! - [`LoginForm`], [`RegisterForm`] - Credential forms
//! - [`LanguageSelection`] - Two-column picker over the catalog
//! - [`LessonList`], [`LessonView`] - Lesson browsing and the exercise draft

use crate::domain::TextField;
use crate::models::{Catalog, LanguagePair, Lesson};

/// Which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Login,
    Register,
    LanguageSelection,
    Lessons,
    Lesson,
}

/// The active view and the working state that belongs to it.
///
/// Form contents live inside their variant, so leaving a view drops them.
#[derive(Debug, Clone)]
pub enum View {
    Login(LoginForm),
    Register(RegisterForm),
    LanguageSelection(LanguageSelection),
    Lessons(LessonList),
    Lesson(LessonView),
}

impl Default for View {
    fn default() -> Self {
        View::Login(LoginForm::default())
    }
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Login(_) => ViewKind::Login,
            View::Register(_) => ViewKind::Register,
            View::LanguageSelection(_) => ViewKind::LanguageSelection,
            View::Lessons(_) => ViewKind::Lessons,
            View::Lesson(_) => ViewKind::Lesson,
        }
    }

    /// Views reachable only with a token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Login(_) | View::Register(_))
    }
}

/// Focusable parts of the login form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Username => LoginField::Submit,
            LoginField::Password => LoginField::Username,
            LoginField::Submit => LoginField::Password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
    /// Render the password in clear text
    pub show_password: bool,
}

impl LoginForm {
    /// The text field under focus, if the focus is on a field.
    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginField::Username => Some(&mut self.username),
            LoginField::Password => Some(&mut self.password),
            LoginField::Submit => None,
        }
    }
}

/// Focusable parts of the registration form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Username,
    Password,
    Submit,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Username,
            RegisterField::Username => RegisterField::Password,
            RegisterField::Password => RegisterField::Submit,
            RegisterField::Submit => RegisterField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Submit,
            RegisterField::Username => RegisterField::Name,
            RegisterField::Password => RegisterField::Username,
            RegisterField::Submit => RegisterField::Password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: TextField,
    pub username: TextField,
    pub password: TextField,
    pub focus: RegisterField,
    pub show_password: bool,
}

impl RegisterForm {
    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            RegisterField::Name => Some(&mut self.name),
            RegisterField::Username => Some(&mut self.username),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::Submit => None,
        }
    }
}

/// Columns of the language picker, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageColumn {
    #[default]
    Known,
    Target,
    Confirm,
}

impl LanguageColumn {
    pub fn next(self) -> Self {
        match self {
            LanguageColumn::Known => LanguageColumn::Target,
            LanguageColumn::Target => LanguageColumn::Confirm,
            LanguageColumn::Confirm => LanguageColumn::Known,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LanguageColumn::Known => LanguageColumn::Confirm,
            LanguageColumn::Target => LanguageColumn::Known,
            LanguageColumn::Confirm => LanguageColumn::Target,
        }
    }
}

/// Language picker state.
///
/// `known` and `target` are chosen catalog indices; the cursors only track
/// the highlighted row in each column.
#[derive(Debug, Clone, Default)]
pub struct LanguageSelection {
    pub catalog: Catalog,
    /// True until the catalog request resolves
    pub loading: bool,
    pub known: Option<usize>,
    pub target: Option<usize>,
    pub known_cursor: usize,
    pub target_cursor: usize,
    pub column: LanguageColumn,
}

impl LanguageSelection {
    /// Picker waiting for the catalog.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Install a freshly fetched catalog, dropping any stale choice.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.loading = false;
        self.known = None;
        self.target = None;
        self.known_cursor = 0;
        self.target_cursor = 0;
    }

    pub fn move_up(&mut self) {
        match self.column {
            LanguageColumn::Known => self.known_cursor = self.known_cursor.saturating_sub(1),
            LanguageColumn::Target => self.target_cursor = self.target_cursor.saturating_sub(1),
            LanguageColumn::Confirm => {}
        }
    }

    pub fn move_down(&mut self) {
        let last = self.catalog.len().saturating_sub(1);
        match self.column {
            LanguageColumn::Known => self.known_cursor = (self.known_cursor + 1).min(last),
            LanguageColumn::Target => self.target_cursor = (self.target_cursor + 1).min(last),
            LanguageColumn::Confirm => {}
        }
    }

    /// Choose the highlighted row of the focused column.
    pub fn choose_highlighted(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        match self.column {
            LanguageColumn::Known => self.known = Some(self.known_cursor),
            LanguageColumn::Target => self.target = Some(self.target_cursor),
            LanguageColumn::Confirm => {}
        }
    }

    pub fn known_language(&self) -> Option<&str> {
        self.known.and_then(|i| self.catalog.get(i)).map(String::as_str)
    }

    pub fn target_language(&self) -> Option<&str> {
        self.target.and_then(|i| self.catalog.get(i)).map(String::as_str)
    }

    /// Both chosen languages, if both are chosen.
    pub fn chosen_pair(&self) -> Option<LanguagePair> {
        Some(LanguagePair::new(
            self.known_language()?,
            self.target_language()?,
        ))
    }

    pub fn can_confirm(&self) -> bool {
        self.chosen_pair().is_some()
    }
}

/// Lesson list state
#[derive(Debug, Clone, Default)]
pub struct LessonList {
    /// Highlighted row
    pub selected: usize,
}

/// Focusable parts of the lesson view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonFocus {
    #[default]
    Draft,
    Submit,
}

/// A single lesson opened from the list, with the learner's draft answer.
#[derive(Debug, Clone)]
pub struct LessonView {
    pub lesson: Lesson,
    /// Position in the target list, restored on the way back
    pub index: usize,
    pub draft: TextField,
    pub focus: LessonFocus,
    /// Outcome of the last completed check for this lesson
    pub last_check: Option<bool>,
}

impl LessonView {
    pub fn new(lesson: Lesson, index: usize) -> Self {
        Self {
            lesson,
            index,
            draft: TextField::new(),
            focus: LessonFocus::Draft,
            last_check: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> LanguageSelection {
        let mut selection = LanguageSelection::loading();
        selection.set_catalog(vec!["Python".into(), "Rust".into(), "Go".into()]);
        selection
    }

    #[test]
    fn test_default_view_is_login() {
        assert_eq!(View::default().kind(), ViewKind::Login);
        assert!(!View::default().requires_auth());
        assert!(View::Lessons(LessonList::default()).requires_auth());
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(LoginField::Submit.next(), LoginField::Username);
        assert_eq!(LoginField::Username.prev(), LoginField::Submit);
        assert_eq!(RegisterField::Password.next(), RegisterField::Submit);
        assert_eq!(LanguageColumn::Confirm.next(), LanguageColumn::Known);
    }

    #[test]
    fn test_language_selection_requires_both() {
        let mut selection = picker();
        assert!(!selection.loading);
        assert!(!selection.can_confirm());

        selection.move_down();
        selection.choose_highlighted();
        assert_eq!(selection.known_language(), Some("Rust"));
        assert!(!selection.can_confirm());

        selection.column = LanguageColumn::Target;
        selection.move_down();
        selection.move_down();
        selection.move_down();
        selection.choose_highlighted();
        assert_eq!(
            selection.chosen_pair(),
            Some(LanguagePair::new("Rust", "Go"))
        );
    }

    #[test]
    fn test_choose_with_empty_catalog() {
        let mut selection = LanguageSelection::loading();
        selection.set_catalog(Vec::new());
        selection.choose_highlighted();
        assert!(selection.known.is_none());
        selection.move_down();
        assert_eq!(selection.known_cursor, 0);
    }

    #[test]
    fn test_set_catalog_resets_choice() {
        let mut selection = picker();
        selection.choose_highlighted();
        selection.set_catalog(vec!["Java".into()]);
        assert!(selection.known.is_none());
    }
}
