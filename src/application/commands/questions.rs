// src/application/commands/questions.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, QuestionDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::Category,
        question::{NewQuestion, Question, QuestionId, QuestionRepository, QuestionUpdate},
    },
};

pub struct CreateQuestionCommand {
    pub subject: String,
    pub content: String,
    pub point: i32,
    pub category: String,
}

pub struct ModifyQuestionCommand {
    pub id: i64,
    pub subject: String,
    pub content: String,
    pub category: String,
}

pub struct QuestionCommandService {
    repo: Arc<dyn QuestionRepository>,
    clock: Arc<dyn Clock>,
}

impl QuestionCommandService {
    pub fn new(repo: Arc<dyn QuestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        command: CreateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let category: Category = command.category.parse()?;
        validate_text(&command.subject, &command.content)?;

        let question = self
            .repo
            .insert(NewQuestion {
                subject: command.subject,
                content: command.content,
                point: command.point,
                category,
                author_id: actor.user_id(),
                created_at: self.clock.now(),
            })
            .await?;
        Ok(question.into())
    }

    pub async fn modify(
        &self,
        actor: &AuthenticatedUser,
        command: ModifyQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let category: Category = command.category.parse()?;
        validate_text(&command.subject, &command.content)?;
        let question = self.owned_or_admin(actor, command.id).await?;

        let updated = self
            .repo
            .update(QuestionUpdate {
                id: question.id,
                subject: command.subject,
                content: command.content,
                category,
            })
            .await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let question = self.owned_or_admin(actor, id).await?;
        self.repo.delete(question.id).await?;
        Ok(())
    }

    async fn owned_or_admin(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<Question> {
        let id = QuestionId::new(id)?;
        let question = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        if !question.is_owned_by(actor.user_id()) && !actor.is_admin() {
            return Err(ApplicationError::forbidden(
                "no permission for this question",
            ));
        }
        Ok(question)
    }
}

fn validate_text(subject: &str, content: &str) -> ApplicationResult<()> {
    if subject.trim().is_empty() {
        return Err(ApplicationError::validation("subject cannot be empty"));
    }
    if content.trim().is_empty() {
        return Err(ApplicationError::validation("content cannot be empty"));
    }
    Ok(())
}
