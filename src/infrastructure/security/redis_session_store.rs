// src/infrastructure/security/redis_session_store.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{Connection, Pool};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::application::{
    dto::SessionClaims,
    error::{ApplicationError, ApplicationResult},
    ports::session::SessionStore,
};
use crate::domain::user::UserId;

/// Redis-backed sessions for multi-instance deployments. Claims are stored
/// as JSON under `session:{id}`; a per-user set `user_sessions:{id}` backs
/// whole-account invalidation. Expiry rides on Redis key TTLs.
pub struct RedisSessionStore {
    pool: Pool,
    ttl_seconds: u64,
}

#[derive(Serialize, Deserialize)]
struct StoredClaims {
    user_id: i64,
    username: String,
    nickname: String,
    role: String,
    issued_at: DateTime<Utc>,
}

impl From<&SessionClaims> for StoredClaims {
    fn from(claims: &SessionClaims) -> Self {
        Self {
            user_id: claims.user_id.into(),
            username: claims.username.clone(),
            nickname: claims.nickname.clone(),
            role: claims.role.as_str().to_string(),
            issued_at: claims.issued_at,
        }
    }
}

impl TryFrom<StoredClaims> for SessionClaims {
    type Error = ApplicationError;

    fn try_from(stored: StoredClaims) -> Result<Self, Self::Error> {
        Ok(SessionClaims {
            user_id: UserId::new(stored.user_id)?,
            username: stored.username,
            nickname: stored.nickname,
            role: stored.role.parse()?,
            issued_at: stored.issued_at,
        })
    }
}

fn session_key(session_id: &str) -> String {
    format!("session:{session_id}")
}

fn user_key(user_id: UserId) -> String {
    format!("user_sessions:{}", i64::from(user_id))
}

fn map_redis(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("redis error: {err}"))
}

impl RedisSessionStore {
    pub fn new(pool: Pool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool.get().await.map_err(map_redis)
    }

    async fn write_claims(
        &self,
        conn: &mut Connection,
        session_id: &str,
        claims: &SessionClaims,
    ) -> ApplicationResult<()> {
        let payload = serde_json::to_string(&StoredClaims::from(claims))
            .map_err(|e| ApplicationError::infrastructure(format!("claims encoding: {e}")))?;
        let _: () = conn
            .set_ex(session_key(session_id), payload, self.ttl_seconds)
            .await
            .map_err(map_redis)?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, session_id: &str, claims: SessionClaims) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        self.write_claims(&mut conn, session_id, &claims).await?;

        let user_key = user_key(claims.user_id);
        let _: () = conn
            .sadd(&user_key, session_id)
            .await
            .map_err(map_redis)?;
        let _: () = conn
            .expire(&user_key, self.ttl_seconds as i64)
            .await
            .map_err(map_redis)?;
        Ok(())
    }

    async fn find(&self, session_id: &str) -> ApplicationResult<Option<SessionClaims>> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn
            .get(session_key(session_id))
            .await
            .map_err(map_redis)?;
        let Some(payload) = payload else {
            return Ok(None);
        };
        let stored: StoredClaims = serde_json::from_str(&payload)
            .map_err(|e| ApplicationError::infrastructure(format!("claims decoding: {e}")))?;

        // Rolling expiry, matching the in-memory store.
        let _: () = conn
            .expire(session_key(session_id), self.ttl_seconds as i64)
            .await
            .map_err(map_redis)?;
        stored.try_into().map(Some)
    }

    async fn replace(&self, session_id: &str, claims: SessionClaims) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        let exists: bool = conn
            .exists(session_key(session_id))
            .await
            .map_err(map_redis)?;
        if !exists {
            return Err(ApplicationError::unauthorized("session expired or unknown"));
        }
        self.write_claims(&mut conn, session_id, &claims).await
    }

    async fn invalidate(&self, session_id: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        if let Some(claims) = self.find(session_id).await? {
            let _: () = conn
                .srem(user_key(claims.user_id), session_id)
                .await
                .map_err(map_redis)?;
        }
        let _: () = conn
            .del(session_key(session_id))
            .await
            .map_err(map_redis)?;
        Ok(())
    }

    async fn invalidate_user(&self, user_id: UserId) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        let user_key = user_key(user_id);
        let session_ids: Vec<String> = conn.smembers(&user_key).await.map_err(map_redis)?;
        for session_id in session_ids {
            let _: () = conn
                .del(session_key(&session_id))
                .await
                .map_err(map_redis)?;
        }
        let _: () = conn.del(&user_key).await.map_err(map_redis)?;
        Ok(())
    }
}
