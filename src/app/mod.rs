//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - The active view and its working state
//! - [`AppMessage`] - Messages for async communication
//!
//! `App` is the only writer of the session store and the lesson repository.
//! User intents live in `actions`, outcomes of spawned requests are applied
//! in `handlers`.

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{
    LanguageColumn, LanguageSelection, LessonFocus, LessonList, LessonView, LoginField,
    LoginForm, RegisterField, RegisterForm, View, ViewKind,
};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::LessonApiClient;
use crate::models::{LessonDirection, Session};
use crate::notifications::{NotificationChannel, NotificationTimings};
use crate::repository::LessonRepository;
use crate::traits::SessionStorage;

/// Main application state
pub struct App {
    /// Active view and its working state
    pub view: View,
    /// In-memory mirror of the persisted session
    pub session: Session,
    /// Lesson collections of the current language pair
    pub lessons: LessonRepository,
    /// Single-slot success/error banner
    pub notifications: NotificationChannel,
    /// A network-dependent transition is in flight; gates action controls
    pub busy: bool,
    /// Lesson fetches still outstanding
    pub pending_loads: u8,
    /// Bumped whenever the owner of in-flight results changes
    pub epoch: u64,
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Tick counter for the busy spinner
    pub tick_count: u64,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    api: LessonApiClient,
    store: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("view", &self.view.kind())
            .field("busy", &self.busy)
            .field("pending_loads", &self.pending_loads)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create a new App with default notification timings.
    pub fn new(api: LessonApiClient, store: Arc<dyn SessionStorage>) -> Self {
        Self::with_timings(api, store, NotificationTimings::default())
    }

    pub fn with_timings(
        api: LessonApiClient,
        store: Arc<dyn SessionStorage>,
        timings: NotificationTimings,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: View::default(),
            session: Session::default(),
            lessons: LessonRepository::new(),
            notifications: NotificationChannel::with_timings(message_tx.clone(), timings),
            busy: false,
            pending_loads: 0,
            epoch: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            api,
            store,
        }
    }

    pub fn view_kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation clock. Only the spinner animates, so a redraw
    /// is needed only while busy.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.busy {
            self.mark_dirty();
        }
    }

    /// Reconcile the persisted session with the server and pick the first
    /// view. Runs once, before the first frame.
    ///
    /// The target-lesson lookup for a session with missing languages is
    /// awaited here so the first frame already shows the right view.
    pub async fn start(&mut self) {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to load session, starting signed out: {}", e);
                Session::default()
            }
        };
        self.session = session.normalized();
        self.mark_dirty();

        let Some(token) = self.session.token.clone() else {
            tracing::info!("No stored session, starting at login");
            self.view = View::default();
            return;
        };

        if self.session.language_pair().is_some() {
            tracing::info!("Resuming session with stored language pair");
            self.view = View::Lessons(LessonList::default());
            self.load_lessons();
            return;
        }

        tracing::info!("Stored session has no language pair, probing the server");
        match self.api.list_lessons(&token, LessonDirection::Target).await {
            Ok(lessons) => {
                tracing::info!("Server has a language pair for this account");
                self.lessons.replace_target(lessons);
                self.view = View::Lessons(LessonList::default());
                self.spawn_lesson_load(LessonDirection::Known);
            }
            Err(e) => {
                tracing::info!("Language pair lookup failed ({}), selecting languages", e.error_code());
                if !e.is_auth() {
                    self.notifications.error(e.user_message());
                }
                self.enter_language_selection();
            }
        }
    }

    /// Start a new ownership epoch; results spawned earlier are dropped.
    fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Write the in-memory session through to the store.
    ///
    /// On failure the store error is posted and `false` returned; callers
    /// must not replace it with their own success notification.
    fn persist_session(&mut self) -> bool {
        match self.store.save(&self.session) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save session: {}", e);
                self.notifications.error(e.user_message());
                false
            }
        }
    }
}
