//! Session storage trait abstraction.

use crate::error::StoreError;
use crate::models::Session;

/// Persistence for the session identifiers (token and language pair).
///
/// Only the state machine writes through this trait. Implementations are
/// purely local; none of them touch the network.
pub trait SessionStorage: Send + Sync {
    /// Persist the session, replacing whatever was stored before.
    ///
    /// The token is always written; each language is written when present
    /// and removed when absent.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Load whatever subset of the session is still persisted.
    ///
    /// Absent or expired entries come back as `None`. Without a token
    /// the language fields are reported absent as well.
    fn load(&self) -> Result<Session, StoreError>;

    /// Remove every persisted field.
    fn clear(&self) -> Result<(), StoreError>;
}
