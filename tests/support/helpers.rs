// tests/support/helpers.rs
#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;

use super::mocks;
use axum::Router;

use agora_core::application::services::{ApplicationDependencies, ApplicationServices};
use agora_core::domain::article::Article;
use agora_core::domain::user::User;
use agora_core::infrastructure::security::InMemorySessionStore;
use agora_core::presentation::http::routes::build_router;
use agora_core::presentation::http::state::HttpState;

pub struct TestApp {
    pub router: Router,
    pub articles: Arc<mocks::InMemoryArticleRepo>,
    pub sessions: Arc<InMemorySessionStore>,
}

/// Full router wired against in-memory doubles, no CORS origin
/// restrictions. Repo handles are exposed so tests can assert on the
/// stored state behind the HTTP surface.
pub fn make_test_app(users: Vec<User>, articles: Vec<Article>) -> TestApp {
    let article_repo = Arc::new(mocks::InMemoryArticleRepo::new(articles));
    let sessions = Arc::new(InMemorySessionStore::new(Duration::from_secs(3600)));

    let services = ApplicationServices::new(ApplicationDependencies {
        article_read_repo: article_repo.clone(),
        article_write_repo: article_repo.clone(),
        comment_repo: Arc::new(mocks::InMemoryCommentRepo::new(Vec::new())),
        like_repo: Arc::new(mocks::InMemoryLikeRepo::new()),
        user_repo: Arc::new(mocks::InMemoryUserRepo::new(users)),
        question_repo: Arc::new(mocks::InMemoryQuestionRepo::new(Vec::new())),
        password_hasher: Arc::new(mocks::PlainPasswordHasher),
        session_store: sessions.clone(),
        clock: mocks::fixed_clock(),
    });

    let state = HttpState {
        services: Arc::new(services),
    };
    TestApp {
        router: build_router(state, &[]),
        articles: article_repo,
        sessions,
    }
}
