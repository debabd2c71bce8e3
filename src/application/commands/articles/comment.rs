// src/application/commands/articles/comment.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LikeStatusDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, Comment, CommentContent, CommentId, NewComment},
};

/// Create-or-update for comments, switched on id presence like the
/// comment form submits it.
pub struct SaveCommentCommand {
    pub id: Option<i64>,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn save_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        command: SaveCommentCommand,
    ) -> ApplicationResult<()> {
        let article_id = self.existing_article_id(article_id).await?;
        let content = CommentContent::new(command.content)?;

        match command.id {
            None => {
                let new_comment = NewComment {
                    article_id,
                    author_id: actor.user_id(),
                    content,
                    created_at: self.clock.now(),
                };
                self.comment_repo.insert(new_comment).await?;
            }
            Some(comment_id) => {
                let comment = self
                    .owned_comment(actor, article_id, comment_id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
                self.comment_repo
                    .update_content(comment.id, content)
                    .await?;
            }
        }

        Ok(())
    }

    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        comment_id: i64,
    ) -> ApplicationResult<()> {
        let article_id = self.existing_article_id(article_id).await?;

        let comment = if actor.is_admin() {
            self.existing_comment(article_id, comment_id).await?
        } else {
            self.owned_comment(actor, article_id, comment_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("comment not found"))?
        };

        self.comment_repo.delete(comment.id).await?;
        Ok(())
    }

    /// Ok(true): the comment is the actor's. Ok(false): no such comment
    /// on this article. Forbidden: the comment exists but belongs to
    /// someone else; callers must not treat that the same as absence.
    pub async fn check_comment_ownership(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        comment_id: i64,
    ) -> ApplicationResult<bool> {
        let article_id = self.existing_article_id(article_id).await?;
        Ok(self
            .owned_comment(actor, article_id, comment_id)
            .await?
            .is_some())
    }

    pub async fn has_user_liked_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        comment_id: i64,
    ) -> ApplicationResult<bool> {
        let article_id = self.existing_article_id(article_id).await?;
        let comment = self.existing_comment(article_id, comment_id).await?;
        Ok(self
            .like_repo
            .comment_like_exists(actor.user_id(), comment.id)
            .await?)
    }

    pub async fn like_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        comment_id: i64,
    ) -> ApplicationResult<()> {
        let article_id = self.existing_article_id(article_id).await?;
        let comment = self.existing_comment(article_id, comment_id).await?;
        self.like_repo
            .insert_comment_like(actor.user_id(), comment.id)
            .await?;
        Ok(())
    }

    pub async fn unlike_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        comment_id: i64,
    ) -> ApplicationResult<()> {
        let article_id = self.existing_article_id(article_id).await?;
        let comment = self.existing_comment(article_id, comment_id).await?;
        let removed = self
            .like_repo
            .delete_comment_like(actor.user_id(), comment.id)
            .await?;
        if !removed {
            return Err(ApplicationError::not_found(
                "no like by this user to remove",
            ));
        }
        Ok(())
    }

    pub async fn toggle_comment_like(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        comment_id: i64,
    ) -> ApplicationResult<LikeStatusDto> {
        let article_id = self.existing_article_id(article_id).await?;
        let comment = self.existing_comment(article_id, comment_id).await?;

        let liked = if self
            .like_repo
            .comment_like_exists(actor.user_id(), comment.id)
            .await?
        {
            self.like_repo
                .delete_comment_like(actor.user_id(), comment.id)
                .await?;
            false
        } else {
            self.like_repo
                .insert_comment_like(actor.user_id(), comment.id)
                .await?;
            true
        };

        let like_count = self.like_repo.comment_like_count(comment.id).await?;
        Ok(LikeStatusDto { liked, like_count })
    }

    async fn existing_comment(
        &self,
        article_id: ArticleId,
        comment_id: i64,
    ) -> ApplicationResult<Comment> {
        let comment_id = CommentId::new(comment_id)?;
        self.comment_repo
            .find(article_id, comment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }

    /// None when the comment does not exist on this article; Forbidden
    /// when it exists under someone else's name.
    async fn owned_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: ArticleId,
        comment_id: i64,
    ) -> ApplicationResult<Option<Comment>> {
        let comment_id = CommentId::new(comment_id)?;
        match self.comment_repo.find(article_id, comment_id).await? {
            None => Ok(None),
            Some(comment) if comment.is_owned_by(actor.user_id()) => Ok(Some(comment)),
            Some(_) => Err(ApplicationError::forbidden(
                "no permission for this comment",
            )),
        }
    }
}
