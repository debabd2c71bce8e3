// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, questions::QuestionCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{security::PasswordHasher, session::SessionStore, time::Clock},
        queries::{articles::ArticleQueryService, questions::QuestionQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, CommentRepository, LikeRepository},
        question::QuestionRepository,
        user::UserRepository,
    },
};

/// Everything the HTTP layer needs, wired once at startup.
pub struct ApplicationServices {
    pub article_commands: ArticleCommandService,
    pub article_queries: ArticleQueryService,
    pub user_commands: UserCommandService,
    pub question_commands: QuestionCommandService,
    pub question_queries: QuestionQueryService,
    session_store: Arc<dyn SessionStore>,
}

pub struct ApplicationDependencies {
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub like_repo: Arc<dyn LikeRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub question_repo: Arc<dyn QuestionRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub session_store: Arc<dyn SessionStore>,
    pub clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(deps: ApplicationDependencies) -> Self {
        let article_commands = ArticleCommandService::new(
            deps.article_read_repo.clone(),
            deps.article_write_repo,
            deps.comment_repo.clone(),
            deps.like_repo.clone(),
            deps.user_repo.clone(),
            deps.clock.clone(),
        );
        let article_queries = ArticleQueryService::new(
            deps.article_read_repo,
            deps.comment_repo,
            deps.like_repo,
            deps.user_repo.clone(),
        );
        let user_commands = UserCommandService::new(
            deps.user_repo,
            deps.password_hasher,
            deps.session_store.clone(),
            deps.clock.clone(),
        );
        let question_commands = QuestionCommandService::new(deps.question_repo.clone(), deps.clock);
        let question_queries = QuestionQueryService::new(deps.question_repo);

        Self {
            article_commands,
            article_queries,
            user_commands,
            question_commands,
            question_queries,
            session_store: deps.session_store,
        }
    }

    /// Resolves a session cookie value to the claims it was issued with.
    pub async fn authenticate(&self, session_id: &str) -> ApplicationResult<AuthenticatedUser> {
        let claims = self
            .session_store
            .find(session_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("session expired or unknown"))?;
        Ok(AuthenticatedUser {
            session_id: session_id.to_string(),
            claims,
        })
    }
}
