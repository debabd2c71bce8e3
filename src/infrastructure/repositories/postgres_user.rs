// src/infrastructure/repositories/postgres_user.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::error::map_sqlx;
use crate::domain::{
    errors::{DomainError, DomainResult},
    user::{
        Email, NewUser, Nickname, PasswordHash, Phone, Role, User, UserId, UserRepository,
        UserUpdate, Username,
    },
};

const USER_COLUMNS: &str = "id, username, password, nickname, name, email, phone, \
     category, role, point, accumulated_point, suspended, created_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    nickname: String,
    name: String,
    email: String,
    phone: String,
    category: String,
    role: String,
    point: i32,
    accumulated_point: i32,
    suspended: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password)?,
            nickname: Nickname::new(row.nickname)?,
            name: row.name,
            email: Email::new(row.email)?,
            phone: Phone::new(row.phone)?,
            category: row.category.parse()?,
            role: row.role.parse()?,
            point: row.point,
            accumulated_point: row.accumulated_point,
            suspended: row.suspended,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let sql = format!(
            "INSERT INTO users (username, password, nickname, name, email, phone, \
             category, role, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(new_user.username.as_str())
            .bind(new_user.password_hash.as_str())
            .bind(new_user.nickname.as_str())
            .bind(&new_user.name)
            .bind(new_user.email.as_str())
            .bind(new_user.phone.as_str())
            .bind(new_user.category.as_str())
            .bind(new_user.role.as_str())
            .bind(new_user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(TryInto::try_into).transpose()
    }

    async fn count_by_username(&self, username: &str) -> DomainResult<u64> {
        count_where(&self.pool, "username", username).await
    }

    async fn count_by_email(&self, email: &str) -> DomainResult<u64> {
        count_where(&self.pool, "email", email).await
    }

    async fn count_by_phone(&self, phone: &str) -> DomainResult<u64> {
        count_where(&self.pool, "phone", phone).await
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let sql = format!(
            "UPDATE users SET \
             password = COALESCE($2, password), \
             name = COALESCE($3, name), \
             nickname = COALESCE($4, nickname), \
             category = COALESCE($5, category), \
             role = COALESCE($6, role) \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(update.id))
            .bind(update.password_hash.map(String::from))
            .bind(update.name)
            .bind(update.nickname.map(String::from))
            .bind(update.category.map(|c| c.as_str()))
            .bind(update.role.map(|r| r.as_str()))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

async fn count_where(pool: &PgPool, column: &str, value: &str) -> DomainResult<u64> {
    // `column` is one of three fixed identifiers, never user input.
    let sql = format!("SELECT COUNT(*) FROM users WHERE {column} = $1");
    let count: i64 = sqlx::query_scalar(&sql)
        .bind(value)
        .fetch_one(pool)
        .await
        .map_err(map_sqlx)?;
    Ok(count as u64)
}
