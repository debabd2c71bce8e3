// src/presentation/http/controllers/auth.rs
use axum::{
    Extension, Form,
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    application::{
        commands::users::{LoginCommand, RegisterUserCommand},
        error::ApplicationError,
    },
    presentation::http::{
        cookies::{clear_session_cookie, session_cookie},
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};

#[derive(Deserialize)]
pub struct RegisterForm {
    username: String,
    password: String,
    #[serde(rename = "confirmPassword")]
    confirm_password: String,
    name: String,
    nickname: String,
    email: String,
    phone: String,
    category: String,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Form(form): Form<RegisterForm>,
) -> HttpResult<Redirect> {
    state
        .services
        .user_commands
        .register(RegisterUserCommand {
            username: form.username,
            password: form.password,
            confirm_password: form.confirm_password,
            name: form.name,
            nickname: form.nickname,
            email: form.email,
            phone: form.phone,
            category: form.category,
        })
        .await
        .into_http()?;
    Ok(Redirect::to("/login"))
}

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

/// Successful logins set the session cookie and land on the front page.
/// Failures bounce back to the login page carrying the failure kind, so
/// it can tell apart a wrong password, an unknown username and a
/// suspended account.
pub async fn login(
    Extension(state): Extension<HttpState>,
    Form(form): Form<LoginForm>,
) -> HttpResult<Response> {
    let result = state
        .services
        .user_commands
        .login(LoginCommand {
            username: form.username,
            password: form.password,
        })
        .await;

    match result {
        Ok(login) => {
            let cookie = session_cookie(&login.session_id);
            Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
        }
        Err(ApplicationError::Login(kind)) => Ok(Redirect::to(&format!(
            "/login?error=true&type={}",
            kind.as_query_value()
        ))
        .into_response()),
        Err(other) => Err(HttpError::from_error(other)),
    }
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Response> {
    state
        .services
        .user_commands
        .logout(&actor)
        .await
        .into_http()?;
    Ok((
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/"),
    )
        .into_response())
}
