//! Session persistence across application restarts.
//!
//! Runs the app against the file-backed store in a temporary directory.

use std::sync::Arc;
use std::time::Duration;

use codelingo::adapters::mock::{MockHttpClient, MockResponse};
use codelingo::adapters::FileSessionStore;
use codelingo::api::LessonApiClient;
use codelingo::app::{App, LanguageSelection, View, ViewKind};
use codelingo::models::{LanguagePair, Session};
use codelingo::traits::SessionStorage;
use serde_json::json;
use tempfile::TempDir;

const API: &str = "http://api.test";

fn scripted_http() -> MockHttpClient {
    let http = MockHttpClient::new();
    http.set_response(&format!("{}/get-lessons-target", API), MockResponse::json(200, json!([])));
    http.set_response(&format!("{}/get-lessons-known", API), MockResponse::json(200, json!([])));
    http.set_response(
        &format!("{}/register-languages", API),
        MockResponse::json(200, json!({})),
    );
    http
}

fn app_in(dir: &TempDir, http: &MockHttpClient) -> App {
    let api = LessonApiClient::with_http(API, Arc::new(http.clone()));
    App::new(api, Arc::new(FileSessionStore::in_dir(dir.path())))
}

async fn settle(app: &mut App) {
    let mut rx = app.message_rx.take().unwrap();
    while let Ok(Some(msg)) = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await {
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}

#[tokio::test]
async fn test_chosen_pair_survives_restart() {
    let dir = TempDir::new().unwrap();
    let http = scripted_http();
    FileSessionStore::in_dir(dir.path())
        .save(&Session::authenticated("tok"))
        .unwrap();

    let mut app = app_in(&dir, &http);
    app.session = Session::authenticated("tok");
    let mut selection = LanguageSelection::loading();
    selection.set_catalog(vec!["Python".into(), "Rust".into()]);
    selection.known = Some(0);
    selection.target = Some(1);
    app.view = View::LanguageSelection(selection);
    app.confirm_languages();
    settle(&mut app).await;
    assert_eq!(app.view_kind(), ViewKind::Lessons);
    drop(app);

    let mut restarted = app_in(&dir, &http);
    restarted.start().await;
    assert_eq!(restarted.view_kind(), ViewKind::Lessons);
    assert_eq!(
        restarted.session.language_pair(),
        Some(LanguagePair::new("Python", "Rust"))
    );
}

#[tokio::test]
async fn test_logout_survives_restart() {
    let dir = TempDir::new().unwrap();
    let http = scripted_http();
    FileSessionStore::in_dir(dir.path())
        .save(&Session::with_pair("tok", &LanguagePair::new("Python", "Rust")))
        .unwrap();

    let mut app = app_in(&dir, &http);
    app.start().await;
    assert_eq!(app.view_kind(), ViewKind::Lessons);
    app.logout();
    drop(app);

    let mut restarted = app_in(&dir, &http);
    restarted.start().await;
    assert_eq!(restarted.view_kind(), ViewKind::Login);
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_corrupt_session_file_starts_signed_out() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "{not json").unwrap();

    let http = scripted_http();
    let mut app = app_in(&dir, &http);
    app.start().await;

    assert_eq!(app.view_kind(), ViewKind::Login);
    assert!(http.get_requests().is_empty());
}
