use agora_core::application::{
    ports::{security::PasswordHasher, session::SessionStore, time::Clock},
    services::{ApplicationDependencies, ApplicationServices},
};
use agora_core::config::AppConfig;
use agora_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository, CommentRepository, LikeRepository},
    question::QuestionRepository,
    user::UserRepository,
};
use agora_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleRepository, PostgresCommentRepository, PostgresLikeRepository,
        PostgresQuestionRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, InMemorySessionStore, RedisSessionStore},
    time::SystemClock,
};
use agora_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::connect(&config.database_url).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_repo = Arc::new(PostgresArticleRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> = article_repo.clone();
    let article_write_repo: Arc<dyn ArticleWriteRepository> = article_repo;
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let like_repo: Arc<dyn LikeRepository> = Arc::new(PostgresLikeRepository::new(pool.clone()));
    let question_repo: Arc<dyn QuestionRepository> =
        Arc::new(PostgresQuestionRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let session_store: Arc<dyn SessionStore> = match config.redis_url.as_deref() {
        Some(url) => {
            let redis_pool = deadpool_redis::Config::from_url(url)
                .create_pool(Some(deadpool_redis::Runtime::Tokio1))?;
            tracing::info!("sessions backed by redis");
            Arc::new(RedisSessionStore::new(
                redis_pool,
                config.session_ttl_seconds,
            ))
        }
        None => Arc::new(InMemorySessionStore::new(Duration::from_secs(
            config.session_ttl_seconds,
        ))),
    };

    let services = Arc::new(ApplicationServices::new(ApplicationDependencies {
        article_read_repo,
        article_write_repo,
        comment_repo,
        like_repo,
        user_repo,
        question_repo,
        password_hasher,
        session_store,
        clock,
    }));

    let state = HttpState { services };
    let app = build_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
