// src/presentation/http/controllers/comments.rs
use axum::{
    Extension, Form,
    extract::Query,
    response::{Html, Redirect},
};
use serde::Deserialize;

use super::articles::like_fragment;
use crate::{
    application::commands::articles::SaveCommentCommand,
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};

#[derive(Deserialize)]
pub struct CommentWriteForm {
    #[serde(rename = "articleId")]
    article_id: i64,
    #[serde(rename = "commentId")]
    comment_id: Option<i64>,
    content: String,
}

pub async fn write(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<CommentWriteForm>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .save_comment(
            &actor,
            form.article_id,
            SaveCommentCommand {
                id: form.comment_id,
                content: form.content,
            },
        )
        .await
        .into_http()?;
    Ok(Redirect::to(&format!("/article/{}", form.article_id)))
}

#[derive(Deserialize)]
pub struct CommentTarget {
    #[serde(rename = "articleId")]
    article_id: i64,
    #[serde(rename = "commentId")]
    comment_id: i64,
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(target): Query<CommentTarget>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .delete_comment(&actor, target.article_id, target.comment_id)
        .await
        .into_http()?;
    Ok(Redirect::to(&format!("/article/{}", target.article_id)))
}

pub async fn ajax_like(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(target): Query<CommentTarget>,
) -> HttpResult<Html<String>> {
    let status = state
        .services
        .article_commands
        .toggle_comment_like(&actor, target.article_id, target.comment_id)
        .await
        .into_http()?;
    Ok(Html(like_fragment(status)))
}
