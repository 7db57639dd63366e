//! Session state — explicit replacement for ambient "isLoggedIn" flags.
//!
//! Each request resolves its bearer token into a `SessionState` exactly once;
//! handlers receive it as an extractor argument and never consult global state.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::linkedin::LinkedInProfile;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: Uuid,
    pub user_id: Uuid,
    pub linked_profile: Option<LinkedInProfile>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.created_at) > ttl
    }

    /// Skills from the connected LinkedIn profile, if any.
    pub fn linked_skills(&self) -> &[String] {
        self.linked_profile
            .as_ref()
            .and_then(|p| p.skills.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub enum SessionState {
    Authenticated(Session),
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The session, or `Unauthorized` for anonymous callers.
    pub fn require(self) -> Result<Session, AppError> {
        match self {
            SessionState::Authenticated(session) => Ok(session),
            SessionState::Anonymous => Err(AppError::Unauthorized),
        }
    }
}

/// Open sessions keyed by token. Sessions older than `ttl` count as closed and
/// are pruned whenever a new one is opened.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn open(&self, user_id: Uuid) -> Result<Session, AppError> {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4(),
            user_id,
            linked_profile: None,
            created_at: now,
        };
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| anyhow!("session store lock poisoned"))?;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(self.ttl, now));
        if sessions.len() < before {
            debug!("Pruned {} expired sessions", before - sessions.len());
        }
        sessions.insert(session.token, session.clone());
        Ok(session)
    }

    pub fn get(&self, token: Uuid) -> Result<Option<Session>, AppError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .read()
            .map_err(|_| anyhow!("session store lock poisoned"))?
            .get(&token)
            .filter(|s| !s.is_expired(self.ttl, now))
            .cloned())
    }

    /// Removes the session. Returns whether it existed.
    pub fn close(&self, token: Uuid) -> Result<bool, AppError> {
        Ok(self
            .sessions
            .write()
            .map_err(|_| anyhow!("session store lock poisoned"))?
            .remove(&token)
            .is_some())
    }

    pub fn attach_linked_profile(
        &self,
        token: Uuid,
        profile: LinkedInProfile,
    ) -> Result<Session, AppError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| anyhow!("session store lock poisoned"))?;
        let now = Utc::now();
        let session = sessions
            .get_mut(&token)
            .filter(|s| !s.is_expired(self.ttl, now))
            .ok_or(AppError::Unauthorized)?;
        session.linked_profile = Some(profile);
        Ok(session.clone())
    }

    /// Resolves an optional bearer token into a session state. Unknown or
    /// malformed tokens are anonymous.
    pub fn resolve(&self, token: Option<&str>) -> Result<SessionState, AppError> {
        let Some(token) = token.and_then(|t| Uuid::parse_str(t.trim()).ok()) else {
            return Ok(SessionState::Anonymous);
        };
        Ok(match self.get(token)? {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Anonymous,
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

#[async_trait]
impl FromRequestParts<AppState> for SessionState {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.sessions.resolve(bearer_token(parts))
    }
}
