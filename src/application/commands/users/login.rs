// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SessionClaims, UserDto},
        error::{ApplicationError, ApplicationResult, LoginFailureKind},
    },
    domain::user::Username,
};
use uuid::Uuid;

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub session_id: String,
    pub user: UserDto,
}

impl UserCommandService {
    /// Authenticate and open a session. Failures carry a
    /// [`LoginFailureKind`] so the login page can tell an unknown
    /// username from a wrong password from a suspended account.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::Login(LoginFailureKind::UnknownUsername))?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(ApplicationError::Login(LoginFailureKind::UnknownUsername))?;

        if user.suspended {
            return Err(ApplicationError::Login(LoginFailureKind::Suspended));
        }

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::Login(LoginFailureKind::BadPassword)
                }
                other => other,
            })?;

        let session_id = Uuid::new_v4().to_string();
        let claims = SessionClaims::for_user(&user, self.clock.now());
        self.session_store.create(&session_id, claims).await?;

        Ok(LoginResult {
            session_id,
            user: user.into(),
        })
    }

    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.session_store.invalidate(&actor.session_id).await
    }
}
