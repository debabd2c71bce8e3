// src/application/queries/questions.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{Page, QuestionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::question::{QuestionId, QuestionRepository},
};

/// The Q&A board renders shorter pages than the article board.
const QUESTIONS_PER_PAGE: u32 = 10;

pub struct QuestionQueryService {
    repo: Arc<dyn QuestionRepository>,
}

impl QuestionQueryService {
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, page: u32) -> ApplicationResult<Page<QuestionDto>> {
        if page == 0 {
            return Err(ApplicationError::InvalidPage);
        }
        let offset = u64::from(page - 1) * u64::from(QUESTIONS_PER_PAGE);
        let (questions, total) = self.repo.list_page(offset, QUESTIONS_PER_PAGE).await?;

        let result = Page::new(
            questions.into_iter().map(Into::into).collect(),
            page,
            QUESTIONS_PER_PAGE,
            total,
        );

        if page > result.total_pages && result.total_pages != 0 {
            return Err(ApplicationError::InvalidPage);
        }

        Ok(result)
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<QuestionDto> {
        let id = QuestionId::new(id)?;
        let question = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;
        Ok(question.into())
    }
}
