// src/application/commands/users/withdraw.rs
use super::UserCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl UserCommandService {
    /// Account deletion: the password is re-confirmed, every session of
    /// the user is invalidated, then the row goes away.
    pub async fn withdraw(
        &self,
        actor: &AuthenticatedUser,
        password: &str,
    ) -> ApplicationResult<()> {
        let user = self
            .user_repo
            .find_by_id(actor.user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        self.session_store.invalidate(&actor.session_id).await?;
        self.session_store.invalidate_user(user.id).await?;
        self.user_repo.delete(user.id).await?;
        Ok(())
    }
}
