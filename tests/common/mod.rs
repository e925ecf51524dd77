//! Common test utilities for integration tests.
//!
//! [`Harness`] wires an [`App`] to a scripted HTTP client and an in-memory
//! session store, and feeds spawned outcomes back into the app the way the
//! event loop does.
//!
//! # Example
//!
//! ```ignore
//! let mut harness = Harness::new(Session::default());
//! harness.app.submit_login();
//! harness.settle().await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use codelingo::adapters::mock::{InMemorySessionStore, MockHttpClient, MockResponse};
use codelingo::api::LessonApiClient;
use codelingo::app::{App, AppMessage};
use codelingo::models::Session;
use codelingo::notifications::NotificationTimings;
use serde_json::json;
use tokio::sync::mpsc;

pub const API: &str = "http://api.test";

pub fn url(path: &str) -> String {
    format!("{}{}", API, path)
}

/// Lesson JSON as served by the API.
pub fn lesson_json(topic: &str, example: &str) -> serde_json::Value {
    json!({
        "topic": topic,
        "explanation": format!("About {}", topic),
        "example": example,
        "exercise": format!("Write some {}", topic),
    })
}

pub fn target_lessons() -> serde_json::Value {
    json!([
        lesson_json("variables", "let x = 1;"),
        lesson_json("loops", r"for i in 0..3 {\n\tprintln!();\n}"),
    ])
}

pub fn known_lessons() -> serde_json::Value {
    json!([
        lesson_json("variables", "x = 1"),
        lesson_json("loops", r"for i in range(3):\n\tprint()"),
    ])
}

pub struct Harness {
    pub app: App,
    pub http: MockHttpClient,
    pub store: InMemorySessionStore,
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl Harness {
    /// App over a store holding `session`. Notifications never expire
    /// during a test.
    pub fn new(session: Session) -> Self {
        let http = MockHttpClient::new();
        let store = InMemorySessionStore::with_session(session);
        let api = LessonApiClient::with_http(API, Arc::new(http.clone()));
        let timings = NotificationTimings {
            success: Duration::from_secs(60),
            error: Duration::from_secs(60),
        };
        let mut app = App::with_timings(api, Arc::new(store.clone()), timings);
        let rx = app.message_rx.take().expect("receiver present on a fresh app");
        Self {
            app,
            http,
            store,
            rx,
        }
    }

    pub fn respond(&self, path: &str, response: MockResponse) {
        self.http.set_response(&url(path), response);
    }

    /// Script both lesson collections with the default fixtures.
    pub fn serve_lessons(&self) {
        self.respond("/get-lessons-target", MockResponse::json(200, target_lessons()));
        self.respond("/get-lessons-known", MockResponse::json(200, known_lessons()));
    }

    /// Apply spawned outcomes until nothing arrives for a short while.
    pub async fn settle(&mut self) {
        while let Ok(Some(msg)) =
            tokio::time::timeout(Duration::from_millis(200), self.rx.recv()).await
        {
            self.app.handle_message(msg);
        }
    }

    /// Next raw message without applying it.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        tokio::time::timeout(Duration::from_secs(1), self.rx.recv())
            .await
            .ok()
            .flatten()
    }

    pub fn notification_text(&self) -> Option<String> {
        self.app.notifications.current().map(|n| n.text.clone())
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.http.requests_to(&url(path)).len()
    }
}
