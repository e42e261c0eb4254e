use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of the user session held by a [`SessionState`](super::SessionState).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub current_user: Option<Value>,
}

impl Session {
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            current_user: None,
        }
    }

    /// Returns the token only when it is present and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }

    // Mutations are the only way session fields change.
    pub fn apply(&mut self, mutation: SessionMutation) {
        match mutation {
            SessionMutation::SetAccessToken(token) => self.access_token = Some(token),
            SessionMutation::ClearAccessToken => self.access_token = None,
            SessionMutation::SetCurrentUser(user) => self.current_user = Some(user),
            SessionMutation::ClearCurrentUser => self.current_user = None,
        }
    }
}

// Named, atomic updates accepted by the session store.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMutation {
    SetAccessToken(String),
    ClearAccessToken,
    SetCurrentUser(Value),
    ClearCurrentUser,
}

impl SessionMutation {
    // Stable namespaced name, used for logging and by recording stores.
    pub fn name(&self) -> &'static str {
        match self {
            SessionMutation::SetAccessToken(_) => "user/SET_ACCESS_TOKEN",
            SessionMutation::ClearAccessToken => "user/CLEAR_ACCESS_TOKEN",
            SessionMutation::SetCurrentUser(_) => "user/SET_CURRENT_USER",
            SessionMutation::ClearCurrentUser => "user/CLEAR_CURRENT_USER",
        }
    }
}
