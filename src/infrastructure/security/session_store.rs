// src/infrastructure/security/session_store.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::{
    dto::SessionClaims,
    error::{ApplicationError, ApplicationResult},
    ports::session::SessionStore,
};
use crate::domain::user::UserId;

struct Entry {
    claims: SessionClaims,
    expires_at: Instant,
}

/// Process-local session store for single-instance deployments and tests.
/// Expiry is rolling: every successful lookup pushes it out by the TTL.
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Entry>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> ApplicationResult<std::sync::MutexGuard<'_, HashMap<String, Entry>>> {
        self.sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session_id: &str, claims: SessionClaims) -> ApplicationResult<()> {
        let mut sessions = self.lock()?;
        sessions.insert(
            session_id.to_string(),
            Entry {
                claims,
                expires_at: Instant::now() + self.ttl,
            },
        );
        Ok(())
    }

    async fn find(&self, session_id: &str) -> ApplicationResult<Option<SessionClaims>> {
        let mut sessions = self.lock()?;
        let now = Instant::now();
        match sessions.get_mut(session_id) {
            Some(entry) if entry.expires_at > now => {
                entry.expires_at = now + self.ttl;
                Ok(Some(entry.claims.clone()))
            }
            Some(_) => {
                sessions.remove(session_id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn replace(&self, session_id: &str, claims: SessionClaims) -> ApplicationResult<()> {
        let mut sessions = self.lock()?;
        let entry = sessions
            .get_mut(session_id)
            .filter(|entry| entry.expires_at > Instant::now())
            .ok_or_else(|| ApplicationError::unauthorized("session expired or unknown"))?;
        entry.claims = claims;
        entry.expires_at = Instant::now() + self.ttl;
        Ok(())
    }

    async fn invalidate(&self, session_id: &str) -> ApplicationResult<()> {
        self.lock()?.remove(session_id);
        Ok(())
    }

    async fn invalidate_user(&self, user_id: UserId) -> ApplicationResult<()> {
        self.lock()?
            .retain(|_, entry| entry.claims.user_id != user_id);
        Ok(())
    }
}
