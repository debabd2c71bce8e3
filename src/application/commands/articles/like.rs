// src/application/commands/articles/like.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LikeStatusDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleCommandService {
    pub async fn has_user_liked(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<bool> {
        let id = self.existing_article_id(id).await?;
        Ok(self
            .like_repo
            .article_like_exists(actor.user_id(), id)
            .await?)
    }

    /// Idempotent: liking an already-liked article changes nothing, the
    /// (user, article) pair stays unique.
    pub async fn like(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let id = self.existing_article_id(id).await?;
        self.like_repo
            .insert_article_like(actor.user_id(), id)
            .await?;
        Ok(())
    }

    pub async fn unlike(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let id = self.existing_article_id(id).await?;
        let removed = self
            .like_repo
            .delete_article_like(actor.user_id(), id)
            .await?;
        if !removed {
            return Err(ApplicationError::not_found(
                "no like by this user to remove",
            ));
        }
        Ok(())
    }

    /// The like endpoints are a two-state toggle: one call flips the
    /// state, two calls land back where they started.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<LikeStatusDto> {
        let article_id = self.existing_article_id(id).await?;

        let liked = if self
            .like_repo
            .article_like_exists(actor.user_id(), article_id)
            .await?
        {
            self.like_repo
                .delete_article_like(actor.user_id(), article_id)
                .await?;
            false
        } else {
            self.like_repo
                .insert_article_like(actor.user_id(), article_id)
                .await?;
            true
        };

        let like_count = self.like_repo.article_like_count(article_id).await?;
        Ok(LikeStatusDto { liked, like_count })
    }

    pub(super) async fn existing_article_id(&self, id: i64) -> ApplicationResult<ArticleId> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(id)
    }
}
