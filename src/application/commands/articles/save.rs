// src/application/commands/articles/save.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, NewArticle},
        category::Category,
        user::{UserId, Username},
    },
};

/// Create-or-update, switched on id presence like the write form submits
/// it: no id means a new article, an id means an edit of an existing one.
pub struct SaveArticleCommand {
    pub id: Option<i64>,
    pub category: String,
    pub title: String,
    pub content: String,
    /// Admins may create an article on another user's behalf.
    pub author: Option<String>,
}

impl ArticleCommandService {
    pub async fn save(
        &self,
        actor: &AuthenticatedUser,
        command: SaveArticleCommand,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let category: Category = command.category.parse()?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;

        match command.id {
            None => {
                self.create(actor, category, title, content, command.author)
                    .await
            }
            Some(id) => self.update(actor, id, category, title, content).await,
        }
    }

    async fn create(
        &self,
        actor: &AuthenticatedUser,
        category: Category,
        title: ArticleTitle,
        content: ArticleContent,
        author: Option<String>,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let author_id = self.resolve_author(actor, author).await?;

        let new_article = NewArticle {
            title,
            content,
            category,
            author_id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }

    async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        category: Category,
        title: ArticleTitle,
        content: ArticleContent,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let id = ArticleId::new(id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        // Editing is owner-only; admins may delete but not rewrite.
        if !article.is_owned_by(actor.user_id()) {
            return Err(ApplicationError::forbidden(
                "only the author may edit this article",
            ));
        }

        let updated = self
            .write_repo
            .update(ArticleUpdate {
                id,
                category,
                title,
                content,
            })
            .await?;
        Ok(updated.into())
    }

    async fn resolve_author(
        &self,
        actor: &AuthenticatedUser,
        author: Option<String>,
    ) -> ApplicationResult<UserId> {
        match author {
            None => Ok(actor.user_id()),
            Some(username) if username == actor.username() => Ok(actor.user_id()),
            Some(username) => {
                if !actor.is_admin() {
                    return Err(ApplicationError::forbidden(
                        "only admins may post on behalf of another user",
                    ));
                }
                let username = Username::new(username)?;
                let user = self
                    .user_repo
                    .find_by_username(&username)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("author not found"))?;
                Ok(user.id)
            }
        }
    }
}
