//! File-backed session store.
//!
//! The session lives in `~/.codelingo/session.json` as three independently
//! expiring entries:
//!
//! ```json
//! {
//!   "auth_token":      { "value": "eyJ...", "expires_at": 1767225600 },
//!   "known_language":  { "value": "Python", "expires_at": 1767225600 },
//!   "target_language": { "value": "Rust",   "expires_at": 1767225600 }
//! }
//! ```

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::models::Session;
use crate::traits::SessionStorage;

/// The session file name.
pub const SESSION_FILE: &str = "session.json";

/// Default retention of every persisted entry.
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    /// Unix timestamp (seconds) after which the entry is ignored
    expires_at: i64,
}

impl StoredEntry {
    fn live_value(self, now: i64) -> Option<String> {
        (now < self.expires_at).then_some(self.value)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<StoredEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    known_language: Option<StoredEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_language: Option<StoredEntry>,
}

/// Session store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    session_path: PathBuf,
    retention: Duration,
}

impl FileSessionStore {
    /// Store the session in `<dir>/session.json` with the default retention.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            session_path: dir.as_ref().join(SESSION_FILE),
            retention: Duration::days(DEFAULT_RETENTION_DAYS),
        }
    }

    /// Store the session in `~/.codelingo/session.json`.
    pub fn new() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDirectory)?;
        Ok(Self::in_dir(home.join(".codelingo")))
    }

    /// Override how long saved entries stay valid.
    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    fn read_stored(&self) -> Result<StoredSession, StoreError> {
        if !self.session_path.exists() {
            return Ok(StoredSession::default());
        }
        let file = File::open(&self.session_path)
            .map_err(|e| StoreError::io(&self.session_path, &e))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl SessionStorage for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let expires_at = (Utc::now() + self.retention).timestamp();
        let entry = |value: &Option<String>| {
            value.as_ref().map(|v| StoredEntry {
                value: v.clone(),
                expires_at,
            })
        };
        let stored = StoredSession {
            auth_token: entry(&session.token),
            known_language: entry(&session.known_language),
            target_language: entry(&session.target_language),
        };

        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, &e))?;
            }
        }

        let file = File::create(&self.session_path)
            .map_err(|e| StoreError::io(&self.session_path, &e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &stored)?;
        writer
            .flush()
            .map_err(|e| StoreError::io(&self.session_path, &e))
    }

    fn load(&self) -> Result<Session, StoreError> {
        let stored = self.read_stored()?;
        let now = Utc::now().timestamp();
        let session = Session {
            token: stored.auth_token.and_then(|e| e.live_value(now)),
            known_language: stored.known_language.and_then(|e| e.live_value(now)),
            target_language: stored.target_language.and_then(|e| e.live_value(now)),
        };
        Ok(session.normalized())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if !self.session_path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.session_path).map_err(|e| StoreError::io(&self.session_path, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LanguagePair;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> FileSessionStore {
        FileSessionStore::in_dir(temp_dir.path().join(".codelingo"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(store(&temp_dir).load().unwrap(), Session::default());
    }

    #[test]
    fn test_save_and_load_full_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let session = Session::with_pair("abc", &LanguagePair::new("Python", "Rust"));

        store.save(&session).unwrap();
        assert!(store.session_path().exists());
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn test_save_token_only_removes_previous_languages() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store
            .save(&Session::with_pair("old", &LanguagePair::new("Python", "Rust")))
            .unwrap();
        store.save(&Session::authenticated("new")).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("new"));
        assert!(loaded.known_language.is_none());
        assert!(loaded.target_language.is_none());
    }

    #[test]
    fn test_absent_fields_are_not_written_as_empty_strings() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.save(&Session::authenticated("abc")).unwrap();

        let raw = fs::read_to_string(store.session_path()).unwrap();
        assert!(raw.contains("auth_token"));
        assert!(!raw.contains("known_language"));
    }

    #[test]
    fn test_expired_token_hides_languages() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::create_dir_all(store.session_path().parent().unwrap()).unwrap();
        let far_future = Utc::now().timestamp() + 3600;
        fs::write(
            store.session_path(),
            format!(
                r#"{{
                    "auth_token": {{"value": "abc", "expires_at": 0}},
                    "known_language": {{"value": "Python", "expires_at": {far_future}}},
                    "target_language": {{"value": "Rust", "expires_at": {far_future}}}
                }}"#
            ),
        )
        .unwrap();

        assert_eq!(store.load().unwrap(), Session::default());
    }

    #[test]
    fn test_entries_expire_independently() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::create_dir_all(store.session_path().parent().unwrap()).unwrap();
        let far_future = Utc::now().timestamp() + 3600;
        fs::write(
            store.session_path(),
            format!(
                r#"{{
                    "auth_token": {{"value": "abc", "expires_at": {far_future}}},
                    "known_language": {{"value": "Python", "expires_at": 0}},
                    "target_language": {{"value": "Rust", "expires_at": {far_future}}}
                }}"#
            ),
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("abc"));
        assert!(loaded.known_language.is_none());
        assert_eq!(loaded.target_language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_zero_retention_expires_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir).with_retention(Duration::seconds(-1));
        store.save(&Session::authenticated("abc")).unwrap();
        assert!(!store.load().unwrap().is_authenticated());
    }

    #[test]
    fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.save(&Session::authenticated("abc")).unwrap();

        store.clear().unwrap();
        assert!(!store.session_path().exists());
        assert_eq!(store.load().unwrap(), Session::default());
    }

    #[test]
    fn test_clear_missing_file_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        assert!(store(&temp_dir).clear().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::create_dir_all(store.session_path().parent().unwrap()).unwrap();
        fs::write(store.session_path(), "not valid json").unwrap();

        assert!(matches!(
            store.load(),
            Err(StoreError::Serialization { .. })
        ));
    }
}
