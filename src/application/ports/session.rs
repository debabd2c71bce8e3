// src/application/ports/session.rs
use crate::application::ApplicationResult;
use crate::application::dto::SessionClaims;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Server-side session state, keyed by the id carried in the session
/// cookie. The only cross-request shared mutable resource in the system.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session_id: &str, claims: SessionClaims) -> ApplicationResult<()>;
    async fn find(&self, session_id: &str) -> ApplicationResult<Option<SessionClaims>>;
    /// Swap the claims of a live session in place (role grant/revoke,
    /// profile edits). Fails with `Unauthorized` when the session is gone.
    async fn replace(&self, session_id: &str, claims: SessionClaims) -> ApplicationResult<()>;
    async fn invalidate(&self, session_id: &str) -> ApplicationResult<()>;
    /// Drop every session belonging to a user (account withdrawal).
    async fn invalidate_user(&self, user_id: UserId) -> ApplicationResult<()>;
}
