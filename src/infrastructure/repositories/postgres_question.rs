// src/infrastructure/repositories/postgres_question.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::error::map_sqlx;
use crate::domain::{
    errors::{DomainError, DomainResult},
    question::{NewQuestion, Question, QuestionId, QuestionRepository, QuestionUpdate},
    user::UserId,
};

const QUESTION_COLUMNS: &str = "id, subject, content, point, category, author_id, created_at";

pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    subject: String,
    content: String,
    point: i32,
    category: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = DomainError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: QuestionId::new(row.id)?,
            subject: row.subject,
            content: row.content,
            point: row.point,
            category: row.category.parse()?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let sql = format!(
            "INSERT INTO questions (subject, content, point, category, author_id, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {QUESTION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(&question.subject)
            .bind(&question.content)
            .bind(question.point)
            .bind(question.category.as_str())
            .bind(i64::from(question.author_id))
            .bind(question.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");
        let row = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(TryInto::try_into).transpose()
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Question>, u64)> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(i64::from(limit))
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let questions = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((questions, total as u64))
    }

    async fn update(&self, update: QuestionUpdate) -> DomainResult<Question> {
        let sql = format!(
            "UPDATE questions SET subject = $2, content = $3, category = $4 \
             WHERE id = $1 \
             RETURNING {QUESTION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(i64::from(update.id))
            .bind(&update.subject)
            .bind(&update.content)
            .bind(update.category.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn delete(&self, id: QuestionId) -> DomainResult<()> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
