// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, CommentRepository, LikeRepository,
        },
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            comment_repo,
            like_repo,
            user_repo,
            clock,
        }
    }
}
