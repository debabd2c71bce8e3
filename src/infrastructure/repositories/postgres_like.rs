// src/infrastructure/repositories/postgres_like.rs
use async_trait::async_trait;
use sqlx::PgPool;

use super::error::map_sqlx;
use crate::domain::{
    article::{ArticleId, CommentId, LikeRepository},
    errors::DomainResult,
    user::UserId,
};

/// Likes live in two narrow tables with a UNIQUE (user, target) pair;
/// inserts ride on `ON CONFLICT DO NOTHING` so a double-like never fails.
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, sql: &str, user_id: i64, target_id: i64) -> DomainResult<bool> {
        let exists: bool = sqlx::query_scalar(sql)
            .bind(user_id)
            .bind(target_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(exists)
    }

    async fn count(&self, sql: &str, target_id: i64) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(sql)
            .bind(target_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count as u64)
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn article_like_exists(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<bool> {
        self.exists(
            "SELECT EXISTS(SELECT 1 FROM article_likes WHERE user_id = $1 AND article_id = $2)",
            user_id.into(),
            article_id.into(),
        )
        .await
    }

    async fn insert_article_like(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_likes (user_id, article_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete_article_like(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "DELETE FROM article_likes WHERE user_id = $1 AND article_id = $2",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn article_like_count(&self, article_id: ArticleId) -> DomainResult<u64> {
        self.count(
            "SELECT COUNT(*) FROM article_likes WHERE article_id = $1",
            article_id.into(),
        )
        .await
    }

    async fn comment_like_exists(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<bool> {
        self.exists(
            "SELECT EXISTS(SELECT 1 FROM comment_likes WHERE user_id = $1 AND comment_id = $2)",
            user_id.into(),
            comment_id.into(),
        )
        .await
    }

    async fn insert_comment_like(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO comment_likes (user_id, comment_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(comment_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete_comment_like(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "DELETE FROM comment_likes WHERE user_id = $1 AND comment_id = $2",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(comment_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn comment_like_count(&self, comment_id: CommentId) -> DomainResult<u64> {
        self.count(
            "SELECT COUNT(*) FROM comment_likes WHERE comment_id = $1",
            comment_id.into(),
        )
        .await
    }
}
