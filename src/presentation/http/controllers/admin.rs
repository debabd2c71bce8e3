// src/presentation/http/controllers/admin.rs
use axum::{Extension, Json};
use serde::Serialize;

use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::Authenticated,
    state::HttpState,
};

#[derive(Serialize)]
pub struct RoleResponse {
    pub role: String,
}

/// Elevates the current session to admin authority; the account must
/// hold the admin role in the first place.
pub async fn grant(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<RoleResponse>> {
    let claims = state
        .services
        .user_commands
        .grant_admin_authority(&actor)
        .await
        .into_http()?;
    Ok(Json(RoleResponse {
        role: claims.role.as_str().to_string(),
    }))
}

pub async fn revoke(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<RoleResponse>> {
    let claims = state
        .services
        .user_commands
        .revoke_admin_authority(&actor)
        .await
        .into_http()?;
    Ok(Json(RoleResponse {
        role: claims.role.as_str().to_string(),
    }))
}
