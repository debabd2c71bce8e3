// src/domain/user/entity.rs
use crate::domain::category::Category;
use crate::domain::user::value_objects::{
    Email, Nickname, PasswordHash, Phone, Role, UserId, Username,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub nickname: Nickname,
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub category: Category,
    pub role: Role,
    pub point: i32,
    pub accumulated_point: i32,
    pub suspended: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub nickname: Nickname,
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub category: Category,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied field-by-field; absent fields keep their
/// stored value.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub password_hash: Option<PasswordHash>,
    pub name: Option<String>,
    pub nickname: Option<Nickname>,
    pub category: Option<Category>,
    pub role: Option<Role>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            password_hash: None,
            name: None,
            nickname: None,
            category: None,
            role: None,
        }
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_nickname(mut self, nickname: Nickname) -> Self {
        self.nickname = Some(nickname);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.password_hash.is_none()
            && self.name.is_none()
            && self.nickname.is_none()
            && self.category.is_none()
            && self.role.is_none()
    }
}
