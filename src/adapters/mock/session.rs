//! In-memory session store for testing.

use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::models::Session;
use crate::traits::SessionStorage;

/// In-memory session store with failure injection and call counters.
///
/// Clones share state, so a test can keep one handle while the app owns
/// another.
///
/// # Example
///
/// ```ignore
/// use codelingo::adapters::mock::InMemorySessionStore;
/// use codelingo::models::Session;
///
/// let store = InMemorySessionStore::with_session(Session::authenticated("abc"));
/// assert!(store.stored().is_authenticated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<Mutex<Session>>,
    save_should_fail: Arc<Mutex<bool>>,
    clear_count: Arc<Mutex<usize>>,
    save_count: Arc<Mutex<usize>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `session` (stored verbatim).
    pub fn with_session(session: Session) -> Self {
        let store = Self::default();
        *store.session.lock().unwrap() = session;
        store
    }

    /// Make subsequent `save` calls fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Raw stored value, without normalization.
    pub fn stored(&self) -> Session {
        self.session.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    pub fn clear_count(&self) -> usize {
        *self.clear_count.lock().unwrap()
    }
}

impl SessionStorage for InMemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(StoreError::Io {
                path: "memory".into(),
                message: "Mock save failure".to_string(),
            });
        }
        *self.save_count.lock().unwrap() += 1;
        *self.session.lock().unwrap() = session.clone();
        Ok(())
    }

    fn load(&self) -> Result<Session, StoreError> {
        Ok(self.stored().normalized())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.clear_count.lock().unwrap() += 1;
        *self.session.lock().unwrap() = Session::default();
        Ok(())
    }
}
