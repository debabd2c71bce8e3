// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, CommentRepository, LikeRepository},
    user::UserRepository,
};

/// Articles per list page, matching the board's fixed layout.
pub(super) const ARTICLES_PER_PAGE: u32 = 20;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            like_repo,
            user_repo,
        }
    }
}
