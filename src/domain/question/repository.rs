use crate::domain::errors::DomainResult;
use crate::domain::question::entity::{NewQuestion, Question, QuestionId, QuestionUpdate};
use async_trait::async_trait;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question>;
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>>;
    /// One offset page, newest-first, plus the total row count.
    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Question>, u64)>;
    async fn update(&self, update: QuestionUpdate) -> DomainResult<Question>;
    async fn delete(&self, id: QuestionId) -> DomainResult<()>;
}
