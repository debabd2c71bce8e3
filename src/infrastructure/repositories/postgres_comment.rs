// src/infrastructure/repositories/postgres_comment.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::error::map_sqlx;
use crate::domain::{
    article::{
        ArticleId, Comment, CommentContent, CommentId, CommentRepository, CommentWithMeta,
        NewComment,
    },
    errors::{DomainError, DomainResult},
    user::UserId,
};

const COMMENT_COLUMNS: &str = "id, article_id, author_id, content, created_at";

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            content: CommentContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

/// Detail-view row: the comment plus its author's nickname and like count.
#[derive(sqlx::FromRow)]
struct CommentMetaRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    author_nickname: String,
    like_count: i64,
}

impl TryFrom<CommentMetaRow> for CommentWithMeta {
    type Error = DomainError;

    fn try_from(row: CommentMetaRow) -> Result<Self, Self::Error> {
        Ok(CommentWithMeta {
            comment: Comment {
                id: CommentId::new(row.id)?,
                article_id: ArticleId::new(row.article_id)?,
                author_id: UserId::new(row.author_id)?,
                content: CommentContent::new(row.content)?,
                created_at: row.created_at,
            },
            author_nickname: row.author_nickname,
            like_count: row.like_count as u64,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let sql = format!(
            "INSERT INTO comments (article_id, author_id, content, created_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(comment.article_id))
            .bind(i64::from(comment.author_id))
            .bind(comment.content.as_str())
            .bind(comment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn find(
        &self,
        article_id: ArticleId,
        comment_id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        let sql =
            format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = $1 AND id = $2");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(article_id))
            .bind(i64::from(comment_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(TryInto::try_into).transpose()
    }

    async fn update_content(
        &self,
        comment_id: CommentId,
        content: CommentContent,
    ) -> DomainResult<Comment> {
        let sql = format!(
            "UPDATE comments SET content = $2 WHERE id = $1 RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(comment_id))
            .bind(content.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn delete(&self, comment_id: CommentId) -> DomainResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(comment_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentWithMeta>> {
        let rows = sqlx::query_as::<_, CommentMetaRow>(
            "SELECT c.id, c.article_id, c.author_id, c.content, c.created_at, \
                    COALESCE(u.nickname, '') AS author_nickname, \
                    (SELECT COUNT(*) FROM comment_likes cl WHERE cl.comment_id = c.id) \
                        AS like_count \
             FROM comments c \
             LEFT JOIN users u ON u.id = c.author_id \
             WHERE c.article_id = $1 \
             ORDER BY c.id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
