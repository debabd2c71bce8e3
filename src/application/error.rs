// src/application/error.rs
use crate::domain::errors::DomainError;
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Why a login attempt was turned away. Surfaced to the login page as the
/// `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailureKind {
    BadPassword,
    UnknownUsername,
    Suspended,
}

impl LoginFailureKind {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            LoginFailureKind::BadPassword => "password",
            LoginFailureKind::UnknownUsername => "username",
            LoginFailureKind::Suspended => "suspend",
        }
    }
}

impl fmt::Display for LoginFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("requested page is out of range")]
    InvalidPage,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("login failed: {0}")]
    Login(LoginFailureKind),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
