// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleQueryService {
    /// Full detail view: body, author nickname, like state for the
    /// current viewer (if any), and the comment thread with per-comment
    /// like counts.
    pub async fn get(
        &self,
        viewer: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let author_nickname = match self.user_repo.find_by_id(article.author_id).await? {
            Some(author) => author.nickname.as_str().to_string(),
            None => String::new(),
        };

        let like_count = self.like_repo.article_like_count(id).await?;
        let liked_by_viewer = match viewer {
            Some(viewer) => {
                self.like_repo
                    .article_like_exists(viewer.user_id(), id)
                    .await?
            }
            None => false,
        };

        let comments = self
            .comment_repo
            .list_for_article(id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ArticleDto {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            category: article.category,
            hit: article.hit,
            author_id: article.author_id.into(),
            author_nickname,
            created_at: article.created_at,
            like_count,
            liked_by_viewer,
            comments,
        })
    }
}
