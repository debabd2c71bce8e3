// src/presentation/http/controllers/users.rs
use axum::{
    Extension, Form, Json,
    extract::Path,
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    application::{commands::users::ModifyProfileCommand, dto::UserDto, error::ApplicationError},
    presentation::http::{
        cookies::clear_session_cookie,
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};

/// The modification page lives under the session user's own username;
/// any other path is refused.
pub async fn modification_form(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .ensure_profile_access(&actor, &username)
        .into_http()?;
    let profile = state
        .services
        .user_commands
        .profile(&actor)
        .await
        .into_http()?;
    Ok(Json(profile))
}

#[derive(Deserialize)]
pub struct ModifyForm {
    password: String,
    #[serde(rename = "confirmPassword")]
    confirm_password: String,
    name: String,
    nickname: String,
    category: String,
}

/// A failed password confirmation bounces back to the form with the
/// error marker instead of surfacing a JSON error.
pub async fn modify(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<ModifyForm>,
) -> HttpResult<Response> {
    let username = actor.username().to_string();
    let result = state
        .services
        .user_commands
        .modify_profile(
            &actor,
            ModifyProfileCommand {
                password: form.password,
                confirm_password: form.confirm_password,
                name: form.name,
                nickname: form.nickname,
                category: form.category,
            },
        )
        .await;

    match result {
        Ok(_) => Ok(Redirect::to(&format!("/{username}/modification")).into_response()),
        Err(ApplicationError::Validation(_)) => Ok(Redirect::to(&format!(
            "/{username}/modification?error=true&type=password"
        ))
        .into_response()),
        Err(other) => Err(HttpError::from_error(other)),
    }
}

#[derive(Deserialize)]
pub struct WithdrawForm {
    password: String,
}

pub async fn withdraw(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<WithdrawForm>,
) -> HttpResult<Response> {
    state
        .services
        .user_commands
        .withdraw(&actor, &form.password)
        .await
        .into_http()?;
    Ok((
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/"),
    )
        .into_response())
}
