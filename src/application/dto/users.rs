use crate::domain::category::Category;
use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Category,
    pub role: Role,
    pub point: i32,
    pub accumulated_point: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            nickname: user.nickname.into(),
            name: user.name,
            email: user.email.into(),
            phone: user.phone.into(),
            category: user.category,
            role: user.role,
            point: user.point,
            accumulated_point: user.accumulated_point,
            created_at: user.created_at,
        }
    }
}
