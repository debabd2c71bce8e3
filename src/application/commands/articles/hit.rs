// src/application/commands/articles/hit.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

impl ArticleCommandService {
    /// Bump the view counter. Per-viewer de-duplication happens at the
    /// HTTP layer via the `viewedArticles` cookie; by the time this runs
    /// the increment is unconditional.
    pub async fn increase_hit(&self, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;
        self.write_repo.increase_hit(id).await?;
        Ok(())
    }
}
