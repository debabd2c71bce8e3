// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleCommandService {
    /// Deletion is open to the owner and to admins; everyone else is
    /// turned away.
    pub async fn delete(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.is_owned_by(actor.user_id()) && !actor.is_admin() {
            return Err(ApplicationError::forbidden(
                "no permission to delete this article",
            ));
        }

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
