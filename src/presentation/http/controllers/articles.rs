// src/presentation/http/controllers/articles.rs
use axum::{
    Extension, Form, Json,
    extract::{Path, Query},
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};
use serde::Deserialize;

use crate::{
    application::{
        commands::articles::SaveArticleCommand,
        dto::{ArticleDto, ArticleSummaryDto, LikeStatusDto, Page},
        error::ApplicationError,
        queries::articles::ListArticlesQuery,
    },
    presentation::http::{
        cookies::{VIEWED_ARTICLES_COOKIE, decode_viewed_articles, viewed_articles_cookie},
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::{Authenticated, MaybeAuthenticated},
        state::HttpState,
    },
};

#[derive(Deserialize)]
pub struct ListParams {
    page: Option<u32>,
    category: Option<String>,
    #[serde(rename = "searchMatcher")]
    search_matcher: Option<String>,
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    let page = state
        .services
        .article_queries
        .list(ListArticlesQuery {
            page: params.page.unwrap_or(1),
            category: params.category.unwrap_or_else(|| "ALL".to_string()),
            search: params.search_matcher,
        })
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let viewed = headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(VIEWED_ARTICLES_COOKIE).map(str::to_string))
        .map(|value| decode_viewed_articles(&value))
        .unwrap_or_default();

    // First view within the cookie's lifetime bumps the counter; repeat
    // views within 24h do not.
    let fresh_view = !viewed.contains(&id);
    if fresh_view {
        state
            .services
            .article_commands
            .increase_hit(id)
            .await
            .into_http()?;
    }

    let article = state
        .services
        .article_queries
        .get(viewer.as_ref(), id)
        .await
        .into_http()?;

    if fresh_view {
        let cookie = viewed_articles_cookie(&viewed, id);
        Ok(([(header::SET_COOKIE, cookie)], Json(article)).into_response())
    } else {
        Ok(Json(article).into_response())
    }
}

#[derive(Deserialize)]
pub struct WriteFormParams {
    id: Option<i64>,
}

/// Payload behind the write form: the existing article when editing,
/// nothing when composing a new one. Editing someone else's article is
/// refused here, before any submit happens.
pub async fn write_form(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<WriteFormParams>,
) -> HttpResult<Json<Option<ArticleDto>>> {
    let Some(id) = params.id else {
        return Ok(Json(None));
    };

    let article = state
        .services
        .article_queries
        .get(Some(&actor), id)
        .await
        .into_http()?;

    if article.author_id != i64::from(actor.user_id()) {
        return Err(HttpError::from_error(ApplicationError::forbidden(
            "only the author may edit this article",
        )));
    }
    Ok(Json(Some(article)))
}

#[derive(Deserialize)]
pub struct WriteArticleForm {
    id: Option<i64>,
    category: String,
    title: String,
    content: String,
    author: Option<String>,
}

pub async fn write(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<WriteArticleForm>,
) -> HttpResult<Redirect> {
    let saved = state
        .services
        .article_commands
        .save(
            &actor,
            SaveArticleCommand {
                id: form.id,
                category: form.category,
                title: form.title,
                content: form.content,
                author: form.author,
            },
        )
        .await
        .into_http()?;

    Ok(Redirect::to(&format!(
        "/article?page=1&category={}",
        saved.category
    )))
}

#[derive(Deserialize)]
pub struct ArticleTarget {
    id: i64,
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(target): Query<ArticleTarget>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .delete(&actor, target.id)
        .await
        .into_http()?;
    Ok(Redirect::to("/article?page=1&category=ALL"))
}

pub async fn like(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(target): Query<ArticleTarget>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .toggle_like(&actor, target.id)
        .await
        .into_http()?;
    Ok(Redirect::to(&format!("/article/{}", target.id)))
}

pub async fn ajax_like(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(target): Query<ArticleTarget>,
) -> HttpResult<Html<String>> {
    let status = state
        .services
        .article_commands
        .toggle_like(&actor, target.id)
        .await
        .into_http()?;
    Ok(Html(like_fragment(status)))
}

/// Shared by the article and comment ajax endpoints: the bit of markup
/// the page swaps in after a like toggle.
pub(super) fn like_fragment(status: LikeStatusDto) -> String {
    let heart = if status.liked { "♥" } else { "♡" };
    format!(
        "<span class=\"like-heart\">{heart}</span><span class=\"like-count\">{}</span>",
        status.like_count
    )
}
