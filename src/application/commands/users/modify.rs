// src/application/commands/users/modify.rs
use super::{UserCommandService, validation};
use crate::{
    application::{
        dto::{AuthenticatedUser, SessionClaims, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::Category,
        user::{Nickname, PasswordHash, UserUpdate},
    },
};

pub struct ModifyProfileCommand {
    /// Empty means "keep the current password".
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub nickname: String,
    pub category: String,
}

impl UserCommandService {
    /// The modification page is reachable only under the session user's
    /// own username.
    pub fn ensure_profile_access(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
    ) -> ApplicationResult<()> {
        if actor.username() != username {
            return Err(ApplicationError::forbidden(
                "no permission to modify this account",
            ));
        }
        Ok(())
    }

    pub async fn profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }

    /// Apply only the fields that actually changed, then refresh the
    /// live session's claims so the new nickname/role show up without a
    /// re-login.
    pub async fn modify_profile(
        &self,
        actor: &AuthenticatedUser,
        command: ModifyProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(user.id);

        if !command.password.is_empty() {
            if !validation::confirm_password(&command.password, &command.confirm_password) {
                return Err(ApplicationError::validation(
                    "password confirmation does not match",
                ));
            }
            validation::validate_password(&command.password)?;
            let hashed = self.password_hasher.hash(&command.password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if user.name != command.name {
            update = update.with_name(command.name.clone());
        }
        if user.nickname.as_str() != command.nickname {
            update = update.with_nickname(Nickname::new(command.nickname.clone())?);
        }
        let category: Category = command.category.parse()?;
        if user.category != category {
            update = update.with_category(category);
        }

        let user = if update.is_empty() {
            user
        } else {
            self.user_repo.update(update).await?
        };

        let claims = SessionClaims::for_user(&user, self.clock.now())
            .with_role(actor.claims.role);
        self.session_store
            .replace(&actor.session_id, claims)
            .await?;

        Ok(user.into())
    }
}
