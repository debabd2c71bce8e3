// src/presentation/http/controllers/questions.rs
use axum::{
    Extension, Form, Json,
    extract::{Path, Query},
    response::Redirect,
};
use serde::Deserialize;

use crate::{
    application::{
        commands::questions::{CreateQuestionCommand, ModifyQuestionCommand},
        dto::{Page, QuestionDto},
    },
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};

#[derive(Deserialize)]
pub struct ListParams {
    page: Option<u32>,
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Page<QuestionDto>>> {
    let page = state
        .services
        .question_queries
        .list(params.page.unwrap_or(1))
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<QuestionDto>> {
    let question = state.services.question_queries.get(id).await.into_http()?;
    Ok(Json(question))
}

#[derive(Deserialize)]
pub struct WriteQuestionForm {
    subject: String,
    content: String,
    point: i32,
    category: String,
}

pub async fn write(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<WriteQuestionForm>,
) -> HttpResult<Redirect> {
    state
        .services
        .question_commands
        .create(
            &actor,
            CreateQuestionCommand {
                subject: form.subject,
                content: form.content,
                point: form.point,
                category: form.category,
            },
        )
        .await
        .into_http()?;
    Ok(Redirect::to("/question?page=1"))
}

#[derive(Deserialize)]
pub struct ModifyQuestionForm {
    id: i64,
    subject: String,
    content: String,
    category: String,
}

pub async fn modify(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<ModifyQuestionForm>,
) -> HttpResult<Redirect> {
    let question = state
        .services
        .question_commands
        .modify(
            &actor,
            ModifyQuestionCommand {
                id: form.id,
                subject: form.subject,
                content: form.content,
                category: form.category,
            },
        )
        .await
        .into_http()?;
    Ok(Redirect::to(&format!("/question/{}", question.id)))
}

#[derive(Deserialize)]
pub struct QuestionTarget {
    id: i64,
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(target): Query<QuestionTarget>,
) -> HttpResult<Redirect> {
    state
        .services
        .question_commands
        .delete(&actor, target.id)
        .await
        .into_http()?;
    Ok(Redirect::to("/question?page=1"))
}
