// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    admin, articles, auth, comments, questions, users,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/article", get(articles::list))
        .route(
            "/article/write",
            get(articles::write_form).post(articles::write),
        )
        .route("/article/delete", get(articles::delete))
        .route("/article/like", get(articles::like))
        .route("/article/{id}", get(articles::detail))
        .route("/ajax/article/like", get(articles::ajax_like))
        .route("/comment/write", post(comments::write))
        .route("/comment/delete", get(comments::delete))
        .route("/ajax/comment/like", get(comments::ajax_like))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/{username}/modification", get(users::modification_form))
        .route("/modification", post(users::modify))
        .route("/withdrawal", post(users::withdraw))
        .route("/admin/grant", post(admin::grant))
        .route("/admin/revoke", post(admin::revoke))
        .route("/question", get(questions::list))
        .route(
            "/question/write",
            post(questions::write),
        )
        .route("/question/modify", post(questions::modify))
        .route("/question/delete", get(questions::delete))
        .route("/question/{id}", get(questions::detail))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
