// src/domain/article/comment.rs
use crate::domain::article::value_objects::{ArticleId, CommentContent, CommentId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

/// A comment together with its like count and author nickname, shaped for
/// the article detail view.
#[derive(Debug, Clone)]
pub struct CommentWithMeta {
    pub comment: Comment,
    pub author_nickname: String,
    pub like_count: u64,
}
