use crate::domain::article::comment::{Comment, CommentWithMeta, NewComment};
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, CommentContent, CommentId};
use crate::domain::category::CategoryFilter;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// One offset page, newest-first, plus the total number of rows
    /// matching the filter. `search` matches against title and content.
    async fn list_page(
        &self,
        filter: CategoryFilter,
        search: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn increase_hit(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find(
        &self,
        article_id: ArticleId,
        comment_id: CommentId,
    ) -> DomainResult<Option<Comment>>;
    async fn update_content(
        &self,
        comment_id: CommentId,
        content: CommentContent,
    ) -> DomainResult<Comment>;
    async fn delete(&self, comment_id: CommentId) -> DomainResult<()>;
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentWithMeta>>;
}

/// Likes for articles and comments. Uniqueness of the (user, target)
/// pair is the storage layer's responsibility; `insert_*` is a no-op when
/// the pair already exists and `delete_*` reports whether a row was
/// actually removed.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn article_like_exists(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<bool>;
    async fn insert_article_like(&self, user_id: UserId, article_id: ArticleId)
    -> DomainResult<()>;
    async fn delete_article_like(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<bool>;
    async fn article_like_count(&self, article_id: ArticleId) -> DomainResult<u64>;

    async fn comment_like_exists(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<bool>;
    async fn insert_comment_like(&self, user_id: UserId, comment_id: CommentId)
    -> DomainResult<()>;
    async fn delete_comment_like(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<bool>;
    async fn comment_like_count(&self, comment_id: CommentId) -> DomainResult<u64>;
}
