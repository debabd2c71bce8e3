// src/application/commands/users/register.rs
use super::{UserCommandService, validation};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::Category,
        user::{Email, NewUser, Nickname, PasswordHash, Phone, Role, Username},
    },
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub phone: String,
    pub category: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        let nickname = Nickname::new(command.nickname)?;
        let category: Category = command.category.parse()?;

        if !validation::confirm_password(&command.password, &command.confirm_password) {
            return Err(ApplicationError::validation(
                "password confirmation does not match",
            ));
        }
        validation::validate_password(&command.password)?;

        if !validation::is_valid_phone_format(&command.phone) {
            return Err(ApplicationError::validation(
                "phone number must look like 010-1234-5678",
            ));
        }
        let phone = Phone::new(command.phone)?;

        self.ensure_unique(&username, &email, &phone).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            username,
            password_hash: PasswordHash::new(hashed)?,
            nickname,
            name: command.name,
            email,
            phone,
            category,
            role: Role::User,
            created_at: self.clock.now(),
        };

        let user = self.user_repo.insert(new_user).await?;
        Ok(user.into())
    }

    pub async fn is_username_available(&self, username: &str) -> ApplicationResult<bool> {
        Ok(self.user_repo.count_by_username(username).await? == 0)
    }

    pub async fn is_email_available(&self, email: &str) -> ApplicationResult<bool> {
        Ok(self.user_repo.count_by_email(email).await? == 0)
    }

    pub async fn is_phone_available(&self, phone: &str) -> ApplicationResult<bool> {
        Ok(self.user_repo.count_by_phone(phone).await? == 0)
    }

    async fn ensure_unique(
        &self,
        username: &Username,
        email: &Email,
        phone: &Phone,
    ) -> ApplicationResult<()> {
        if !self.is_username_available(username.as_str()).await? {
            return Err(ApplicationError::conflict("username already in use"));
        }
        if !self.is_email_available(email.as_str()).await? {
            return Err(ApplicationError::conflict("email already in use"));
        }
        if !self.is_phone_available(phone.as_str()).await? {
            return Err(ApplicationError::conflict("phone number already in use"));
        }
        Ok(())
    }
}
