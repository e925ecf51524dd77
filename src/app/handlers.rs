//! Message handling for the App.

use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::models::{Catalog, LanguagePair, Lesson, LessonDirection, Session};

use super::{App, AppMessage, LessonList, View};

impl App {
    /// Handle an incoming async message.
    ///
    /// Outcomes spawned in an earlier epoch belong to a session or flow that
    /// no longer exists and are dropped untouched.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if let Some(epoch) = msg.epoch() {
            if epoch != self.epoch {
                debug!(
                    "Dropping stale {} (epoch {}, current {})",
                    msg.name(),
                    epoch,
                    self.epoch
                );
                return;
            }
        }

        self.mark_dirty();
        match msg {
            AppMessage::LoginFinished { result, .. } => self.on_login_finished(result),
            AppMessage::RegisterFinished { result, .. } => self.on_register_finished(result),
            AppMessage::LanguagePairLookup { result, .. } => self.on_pair_lookup(result),
            AppMessage::CatalogLoaded { result, .. } => self.on_catalog_loaded(result),
            AppMessage::LanguagePairSaved { pair, result, .. } => {
                self.on_language_pair_saved(pair, result)
            }
            AppMessage::LessonsLoaded {
                direction, result, ..
            } => self.on_lessons_loaded(direction, result),
            AppMessage::SolutionChecked { topic, result, .. } => {
                self.on_solution_checked(&topic, result)
            }
            AppMessage::NotificationExpired(id) => {
                self.notifications.expire(id);
            }
        }
    }

    fn on_login_finished(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(token) => {
                info!("Login succeeded");
                self.session = Session::authenticated(token.clone());
                if self.persist_session() {
                    self.notifications.success("Login successful");
                }

                // Look up a language pair on file; busy stays set until it resolves.
                let epoch = self.epoch;
                let api = self.api.clone();
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = api.list_lessons(&token, LessonDirection::Target).await;
                    let _ = tx.send(AppMessage::LanguagePairLookup { epoch, result });
                });
            }
            Err(e) => {
                warn!("Login failed: {}", e.error_code());
                self.busy = false;
                self.notifications.error(e.user_message());
            }
        }
    }

    fn on_register_finished(&mut self, result: Result<String, ApiError>) {
        self.busy = false;
        match result {
            Ok(token) => {
                info!("Registration succeeded");
                self.session = Session::authenticated(token);
                if self.persist_session() {
                    self.notifications.success("Registration successful");
                }
                self.enter_language_selection();
            }
            Err(e) => {
                warn!("Registration failed: {}", e.error_code());
                self.notifications.error(e.user_message());
            }
        }
    }

    fn on_pair_lookup(&mut self, result: Result<Vec<Lesson>, ApiError>) {
        self.busy = false;
        match result {
            Ok(lessons) => {
                info!("Language pair on file, showing lessons");
                self.lessons.replace_target(lessons);
                self.view = View::Lessons(LessonList::default());
                self.spawn_lesson_load(LessonDirection::Known);
            }
            Err(e) => {
                info!("No usable language pair ({}), selecting languages", e.error_code());
                if !e.is_auth() {
                    self.notifications.error(e.user_message());
                }
                self.enter_language_selection();
            }
        }
    }

    fn on_catalog_loaded(&mut self, result: Result<Catalog, ApiError>) {
        let View::LanguageSelection(selection) = &mut self.view else {
            debug!("Catalog arrived outside language selection, ignoring");
            return;
        };
        match result {
            Ok(catalog) => {
                debug!("Catalog has {} languages", catalog.len());
                selection.set_catalog(catalog);
            }
            Err(e) => {
                warn!("Failed to load languages: {}", e.error_code());
                selection.loading = false;
                self.notifications.error(e.user_message());
            }
        }
    }

    fn on_language_pair_saved(&mut self, pair: LanguagePair, result: Result<(), ApiError>) {
        self.busy = false;
        match result {
            Ok(()) => {
                info!("Language pair saved");
                self.session.set_language_pair(&pair);
                if self.persist_session() {
                    self.notifications.success("Languages saved");
                }
                self.lessons.clear();
                self.view = View::Lessons(LessonList::default());
                self.load_lessons();
            }
            Err(e) => {
                warn!("Failed to save language pair: {}", e.error_code());
                self.notifications.error(e.user_message());
            }
        }
    }

    fn on_lessons_loaded(&mut self, direction: LessonDirection, result: Result<Vec<Lesson>, ApiError>) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        if self.pending_loads == 0 {
            self.busy = false;
        }

        match result {
            Ok(lessons) => {
                self.lessons.replace(direction, lessons);
                if let View::Lessons(list) = &mut self.view {
                    let len = self.lessons.target().len();
                    list.selected = list.selected.min(len.saturating_sub(1));
                }
            }
            // The server no longer accepts the token: fall back to Login
            Err(e) if e.is_auth() && direction == LessonDirection::Target => {
                info!("Token rejected while loading lessons, signing out");
                self.logout();
            }
            Err(e) => {
                warn!("Failed to load {} lessons: {}", direction, e.error_code());
                self.notifications.error(e.user_message());
            }
        }
    }

    fn on_solution_checked(&mut self, topic: &str, result: Result<bool, ApiError>) {
        self.busy = false;
        let View::Lesson(lesson_view) = &mut self.view else {
            debug!("Solution result for {} arrived after leaving the lesson", topic);
            return;
        };
        if lesson_view.lesson.topic != topic {
            debug!("Solution result for {} arrived for another lesson", topic);
            return;
        }

        match result {
            Ok(correct) => {
                lesson_view.last_check = Some(correct);
                if correct {
                    self.notifications.success("Correct! Well done.");
                } else {
                    self.notifications.error("Not quite. Try again.");
                }
            }
            Err(e) => {
                warn!("Solution check failed: {}", e.error_code());
                self.notifications.error(e.user_message());
            }
        }
    }
}
