//! User intents for the App.
//!
//! Each gated action checks `busy`, validates locally, then spawns exactly
//! one request whose outcome comes back as an [`AppMessage`]. Nothing here
//! awaits.

use tracing::{debug, info, warn};

use crate::models::LessonDirection;

use super::{App, AppMessage, LanguageSelection, LessonList, LessonView, LoginForm, RegisterForm, View};

impl App {
    // ========================================================================
    // Credentials
    // ========================================================================

    /// Submit the login form.
    pub fn submit_login(&mut self) {
        if self.busy {
            return;
        }
        let View::Login(form) = &self.view else {
            return;
        };
        let username = form.username.text().trim().to_string();
        let password = form.password.text().to_string();
        if username.is_empty() || password.is_empty() {
            self.notifications.error("Enter your username and password");
            return;
        }

        self.busy = true;
        let epoch = self.next_epoch();
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        info!("Logging in as {}", username);
        tokio::spawn(async move {
            let result = api.login(&username, &password).await;
            let _ = tx.send(AppMessage::LoginFinished { epoch, result });
        });
    }

    /// Submit the registration form.
    pub fn submit_registration(&mut self) {
        if self.busy {
            return;
        }
        let View::Register(form) = &self.view else {
            return;
        };
        let name = form.name.text().trim().to_string();
        let username = form.username.text().trim().to_string();
        let password = form.password.text().to_string();
        if name.is_empty() || username.is_empty() || password.is_empty() {
            self.notifications.error("Fill in your name, username and password");
            return;
        }

        self.busy = true;
        let epoch = self.next_epoch();
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        info!("Registering {}", username);
        tokio::spawn(async move {
            let result = api.register(&name, &username, &password).await;
            let _ = tx.send(AppMessage::RegisterFinished { epoch, result });
        });
    }

    /// Switch from Login to Register.
    pub fn show_register(&mut self) {
        if self.busy || !matches!(self.view, View::Login(_)) {
            return;
        }
        self.view = View::Register(RegisterForm::default());
        self.mark_dirty();
    }

    /// Switch from Register to Login.
    pub fn show_login(&mut self) {
        if self.busy || !matches!(self.view, View::Register(_)) {
            return;
        }
        self.view = View::Login(LoginForm::default());
        self.mark_dirty();
    }

    /// Toggle clear-text rendering of the password on the active form.
    pub fn toggle_password_visibility(&mut self) {
        match &mut self.view {
            View::Login(form) => form.show_password = !form.show_password,
            View::Register(form) => form.show_password = !form.show_password,
            _ => return,
        }
        self.mark_dirty();
    }

    /// A form field was edited: any visible notification is dismissed.
    pub fn on_form_edited(&mut self) {
        self.notifications.clear();
        self.mark_dirty();
    }

    // ========================================================================
    // Language selection
    // ========================================================================

    /// Enter the language picker and fetch the catalog.
    pub(super) fn enter_language_selection(&mut self) {
        self.view = View::LanguageSelection(LanguageSelection::loading());
        self.mark_dirty();

        let epoch = self.epoch;
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.list_languages().await;
            let _ = tx.send(AppMessage::CatalogLoaded { epoch, result });
        });
    }

    /// Confirm the chosen language pair.
    pub fn confirm_languages(&mut self) {
        if self.busy {
            return;
        }
        let View::LanguageSelection(selection) = &self.view else {
            return;
        };
        let Some(pair) = selection.chosen_pair() else {
            self.notifications
                .error("Choose the language you know and the language you want to learn");
            return;
        };
        let Some(token) = self.session.token.clone() else {
            warn!("Language confirmation without a session");
            self.logout();
            return;
        };

        self.busy = true;
        let epoch = self.next_epoch();
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        info!("Saving language pair {} -> {}", pair.known, pair.target);
        tokio::spawn(async move {
            let result = api.set_language_pair(&token, &pair).await;
            let _ = tx.send(AppMessage::LanguagePairSaved {
                epoch,
                pair,
                result,
            });
        });
    }

    // ========================================================================
    // Lessons
    // ========================================================================

    /// Fetch both lesson collections concurrently.
    pub(super) fn load_lessons(&mut self) {
        self.spawn_lesson_load(LessonDirection::Target);
        self.spawn_lesson_load(LessonDirection::Known);
    }

    /// Fetch one lesson collection. `busy` holds until every pending load
    /// has resolved.
    pub(super) fn spawn_lesson_load(&mut self, direction: LessonDirection) {
        let Some(token) = self.session.token.clone() else {
            return;
        };
        self.pending_loads += 1;
        self.busy = true;

        let epoch = self.epoch;
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        debug!("Fetching {} lessons", direction);
        tokio::spawn(async move {
            let result = api.list_lessons(&token, direction).await;
            let _ = tx.send(AppMessage::LessonsLoaded {
                epoch,
                direction,
                result,
            });
        });
    }

    /// Open the target lesson at `index` from the list.
    pub fn open_lesson(&mut self, index: usize) {
        if !matches!(self.view, View::Lessons(_)) {
            return;
        }
        let Some(lesson) = self.lessons.target_at(index) else {
            return;
        };
        debug!("Opening lesson {}", lesson.topic);
        self.view = View::Lesson(LessonView::new(lesson.clone(), index));
        self.notifications.clear();
        self.mark_dirty();
    }

    /// Leave the lesson view. Collections are untouched.
    pub fn back_to_lessons(&mut self) {
        let View::Lesson(lesson_view) = &self.view else {
            return;
        };
        let selected = lesson_view.index;
        self.view = View::Lessons(LessonList { selected });
        self.mark_dirty();
    }

    /// Submit the draft answer of the open lesson.
    ///
    /// Ignored while busy or when the draft is blank.
    pub fn submit_solution(&mut self) {
        if self.busy {
            return;
        }
        let View::Lesson(lesson_view) = &self.view else {
            return;
        };
        if lesson_view.draft.is_blank() {
            return;
        }
        let Some(token) = self.session.token.clone() else {
            return;
        };

        let code = lesson_view.draft.text().to_string();
        let topic = lesson_view.lesson.topic.clone();
        let language = self.session.target_language.clone().unwrap_or_default();

        self.busy = true;
        self.mark_dirty();
        let epoch = self.epoch;
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        debug!("Checking solution for {}", topic);
        tokio::spawn(async move {
            let result = api.check_solution(&token, &code, &topic, &language).await;
            let _ = tx.send(AppMessage::SolutionChecked {
                epoch,
                topic,
                result,
            });
        });
    }

    // ========================================================================
    // Logout
    // ========================================================================

    /// Forget the session and return to Login. Allowed from any view.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.next_epoch();
        self.session = Default::default();
        self.lessons.clear();
        self.view = View::default();
        self.busy = false;
        self.pending_loads = 0;
        self.notifications.clear();
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear stored session: {}", e);
            self.notifications.error(e.user_message());
        }
        self.mark_dirty();
    }
}
