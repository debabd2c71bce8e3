// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::{cookies::SESSION_COOKIE, state::HttpState},
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn session_id_from(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
}

async fn state_from(parts: &mut Parts) -> Result<HttpState, HttpError> {
    let Extension(state) = Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;
    Ok(state)
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let state = state_from(parts).await?;

        let session_id = session_id_from(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "missing session cookie".into(),
            ))
        })?;

        let user = state
            .services
            .authenticate(&session_id)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl FromRequestParts<()> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let state = state_from(parts).await?;

        let Some(session_id) = session_id_from(parts) else {
            return Ok(Self(None));
        };

        // A stale cookie degrades to an anonymous request.
        match state.services.authenticate(&session_id).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(ApplicationError::Unauthorized(_)) => Ok(Self(None)),
            Err(other) => Err(HttpError::from_error(other)),
        }
    }
}
