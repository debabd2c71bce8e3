// src/application/dto/sessions.rs
use crate::domain::user::{Role, User, UserId};
use chrono::{DateTime, Utc};

/// What a session knows about its user. Replaced wholesale when the
/// user's profile or authority set changes; never consulted across
/// requests except through the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: UserId,
    pub username: String,
    pub nickname: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
}

impl SessionClaims {
    pub fn for_user(user: &User, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            username: user.username.to_string(),
            nickname: user.nickname.as_str().to_string(),
            role: user.role,
            issued_at,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// The resolved identity of the current request: session id plus the
/// claims stored under it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub session_id: String,
    pub claims: SessionClaims,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> UserId {
        self.claims.user_id
    }

    pub fn username(&self) -> &str {
        &self.claims.username
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role.is_admin()
    }
}
