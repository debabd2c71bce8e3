// src/domain/question/entity.rs
use crate::domain::category::Category;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(pub i64);

impl QuestionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "question id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<QuestionId> for i64 {
    fn from(value: QuestionId) -> Self {
        value.0
    }
}

/// Lightweight Q&A entry; no comments or likes attach to it.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub subject: String,
    pub content: String,
    pub point: i32,
    pub category: Category,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub subject: String,
    pub content: String,
    pub point: i32,
    pub category: Category,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QuestionUpdate {
    pub id: QuestionId,
    pub subject: String,
    pub content: String,
    pub category: Category,
}
