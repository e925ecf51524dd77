//! AppMessage enum for async communication within the application.

use crate::error::ApiError;
use crate::models::{Catalog, LanguagePair, Lesson, LessonDirection};

/// Outcomes of spawned work, delivered back to the event loop.
///
/// Every request outcome carries the epoch it was spawned in; the app drops
/// outcomes from an earlier epoch.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Login request finished
    LoginFinished {
        epoch: u64,
        result: Result<String, ApiError>,
    },
    /// Registration request finished
    RegisterFinished {
        epoch: u64,
        result: Result<String, ApiError>,
    },
    /// Target-lesson fetch used to discover whether a language pair is on
    /// file for the account
    LanguagePairLookup {
        epoch: u64,
        result: Result<Vec<Lesson>, ApiError>,
    },
    /// Language catalog fetched
    CatalogLoaded {
        epoch: u64,
        result: Result<Catalog, ApiError>,
    },
    /// Language pair recorded on the server
    LanguagePairSaved {
        epoch: u64,
        pair: LanguagePair,
        result: Result<(), ApiError>,
    },
    /// One lesson collection fetched
    LessonsLoaded {
        epoch: u64,
        direction: LessonDirection,
        result: Result<Vec<Lesson>, ApiError>,
    },
    /// Exercise answer checked
    SolutionChecked {
        epoch: u64,
        topic: String,
        result: Result<bool, ApiError>,
    },
    /// Expiry timer fired for the notification with this id
    NotificationExpired(u64),
}

impl AppMessage {
    /// Epoch of the request this message completes, if it completes one.
    pub fn epoch(&self) -> Option<u64> {
        match self {
            AppMessage::LoginFinished { epoch, .. }
            | AppMessage::RegisterFinished { epoch, .. }
            | AppMessage::LanguagePairLookup { epoch, .. }
            | AppMessage::CatalogLoaded { epoch, .. }
            | AppMessage::LanguagePairSaved { epoch, .. }
            | AppMessage::LessonsLoaded { epoch, .. }
            | AppMessage::SolutionChecked { epoch, .. } => Some(*epoch),
            AppMessage::NotificationExpired(_) => None,
        }
    }

    /// Short name for log lines. Never includes payloads.
    pub fn name(&self) -> &'static str {
        match self {
            AppMessage::LoginFinished { .. } => "LoginFinished",
            AppMessage::RegisterFinished { .. } => "RegisterFinished",
            AppMessage::LanguagePairLookup { .. } => "LanguagePairLookup",
            AppMessage::CatalogLoaded { .. } => "CatalogLoaded",
            AppMessage::LanguagePairSaved { .. } => "LanguagePairSaved",
            AppMessage::LessonsLoaded { .. } => "LessonsLoaded",
            AppMessage::SolutionChecked { .. } => "SolutionChecked",
            AppMessage::NotificationExpired(_) => "NotificationExpired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_extraction() {
        let msg = AppMessage::LessonsLoaded {
            epoch: 4,
            direction: LessonDirection::Known,
            result: Ok(Vec::new()),
        };
        assert_eq!(msg.epoch(), Some(4));
        assert_eq!(msg.name(), "LessonsLoaded");
        assert_eq!(AppMessage::NotificationExpired(1).epoch(), None);
    }

    #[test]
    fn test_login_debug_does_not_need_payload_name() {
        let msg = AppMessage::LoginFinished {
            epoch: 0,
            result: Err(ApiError::auth("nope")),
        };
        assert_eq!(msg.name(), "LoginFinished");
    }
}
