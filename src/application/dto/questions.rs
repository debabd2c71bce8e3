use crate::domain::category::Category;
use crate::domain::question::Question;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub subject: String,
    pub content: String,
    pub point: i32,
    pub category: Category,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.into(),
            subject: question.subject,
            content: question.content,
            point: question.point,
            category: question.category,
            author_id: question.author_id.into(),
            created_at: question.created_at,
        }
    }
}
