// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::PasswordHasher, session::SessionStore, time::Clock},
    domain::user::UserRepository,
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) session_store: Arc<dyn SessionStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            session_store,
            clock,
        }
    }
}
