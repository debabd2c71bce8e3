// src/application/commands/users/role.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SessionClaims},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Role,
};

impl UserCommandService {
    pub fn is_admin(&self, actor: &AuthenticatedUser) -> bool {
        actor.is_admin()
    }

    /// Elevate the CURRENT session to the admin authority set. The swap
    /// lives only in the session store; nothing is persisted. Guarded by
    /// the user's stored role so a plain session cannot elevate itself.
    pub async fn grant_admin_authority(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<SessionClaims> {
        let user = self
            .user_repo
            .find_by_id(actor.user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if !user.is_admin() {
            return Err(ApplicationError::forbidden(
                "account does not hold the admin role",
            ));
        }

        self.swap_session_role(actor, Role::Admin).await
    }

    /// Drop the CURRENT session back to the plain user authority set.
    pub async fn revoke_admin_authority(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<SessionClaims> {
        self.swap_session_role(actor, Role::User).await
    }

    async fn swap_session_role(
        &self,
        actor: &AuthenticatedUser,
        role: Role,
    ) -> ApplicationResult<SessionClaims> {
        let claims = actor.claims.clone().with_role(role);
        self.session_store
            .replace(&actor.session_id, claims.clone())
            .await?;
        Ok(claims)
    }
}
