// src/config.rs
use std::env;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {message}")]
    InvalidVar { name: &'static str, message: String },
}

/// Process configuration, read once at startup from the environment
/// (optionally seeded from a `.env` file).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// Idle lifetime of a session, in seconds.
    pub session_ttl_seconds: u64,
    /// When set, sessions live in Redis instead of process memory.
    pub redis_url: Option<String>,
    /// Origins allowed by CORS; empty means same-origin only.
    pub allowed_origins: Vec<String>,
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SESSION_TTL_SECONDS: u64 = 1800;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let listen_addr = env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidVar {
                name: "LISTEN_ADDR",
                message: format!("{e}"),
            })?;

        let session_ttl_seconds = match env::var("SESSION_TTL_SECONDS") {
            Ok(raw) => raw.parse().map_err(|e| ConfigError::InvalidVar {
                name: "SESSION_TTL_SECONDS",
                message: format!("{e}"),
            })?,
            Err(_) => DEFAULT_SESSION_TTL_SECONDS,
        };

        let redis_url = env::var("REDIS_URL").ok().filter(|v| !v.is_empty());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            listen_addr,
            session_ttl_seconds,
            redis_url,
            allowed_origins,
        })
    }
}
