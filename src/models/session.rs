//! Authenticated session: bearer token plus the chosen language pair.

use serde::{Deserialize, Serialize};

/// The learner's language pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Language the learner already knows (reference examples)
    pub known: String,
    /// Language being learned (drives the lesson list)
    pub target: String,
}

impl LanguagePair {
    pub fn new(known: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            known: known.into(),
            target: target.into(),
        }
    }
}

/// Session state mirrored between the session store and the state machine.
///
/// A session is only meaningful when authenticated: without a token the
/// language fields are ignored, see [`Session::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub known_language: Option<String>,
    pub target_language: Option<String>,
}

impl Session {
    /// Fresh session for a just-authenticated user with no language pair on file.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            known_language: None,
            target_language: None,
        }
    }

    /// Session with a token and a full language pair.
    pub fn with_pair(token: impl Into<String>, pair: &LanguagePair) -> Self {
        Self {
            token: Some(token.into()),
            known_language: Some(pair.known.clone()),
            target_language: Some(pair.target.clone()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Both languages, if both are present.
    pub fn language_pair(&self) -> Option<LanguagePair> {
        match (&self.known_language, &self.target_language) {
            (Some(known), Some(target)) => Some(LanguagePair::new(known, target)),
            _ => None,
        }
    }

    pub fn set_language_pair(&mut self, pair: &LanguagePair) {
        self.known_language = Some(pair.known.clone());
        self.target_language = Some(pair.target.clone());
    }

    /// Drop language fields when there is no token, and empty strings everywhere.
    pub fn normalized(self) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        let token = non_empty(self.token);
        if token.is_none() {
            return Self::default();
        }
        Self {
            token,
            known_language: non_empty(self.known_language),
            target_language: non_empty(self.target_language),
        }
    }
}
