use crate::domain::article::{Article, CommentWithMeta};
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// List-view shape: no content body, no comments.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub hit: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            category: article.category,
            hit: article.hit,
            author_id: article.author_id.into(),
            created_at: article.created_at,
        }
    }
}

/// Detail-view shape: full body plus like state and the comment thread.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub hit: i64,
    pub author_id: i64,
    pub author_nickname: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u64,
    pub liked_by_viewer: bool,
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: i64,
    pub author_id: i64,
    pub author_nickname: String,
    pub content: String,
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithMeta> for CommentDto {
    fn from(meta: CommentWithMeta) -> Self {
        Self {
            id: meta.comment.id.into(),
            author_id: meta.comment.author_id.into(),
            author_nickname: meta.author_nickname,
            content: meta.comment.content.into(),
            like_count: meta.like_count,
            created_at: meta.comment.created_at,
        }
    }
}

/// Result of a like toggle: the state after the call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikeStatusDto {
    pub liked: bool,
    pub like_count: u64,
}
