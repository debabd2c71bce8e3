mod password;
mod redis_session_store;
mod session_store;

pub use password::Argon2PasswordHasher;
pub use redis_session_store::RedisSessionStore;
pub use session_store::InMemorySessionStore;
