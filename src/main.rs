// src/main.rs
use anyhow::Result;
use eijafilm::application::{
    commands::users::PasswordResetSettings,
    services::{Adapters, ApplicationServices, Repositories},
};
use eijafilm::config::AppConfig;
use eijafilm::infrastructure::{
    database,
    mail::LogMailer,
    repositories::{
        PostgresCastingRepository, PostgresFilmRepository, PostgresGenreRepository,
        PostgresPasswordResetRepository, PostgresRelationRepository, PostgresReviewRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::JwtTokenManager},
    storage::LocalMediaStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use eijafilm::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use std::{net::SocketAddr, sync::Arc};
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        password_resets: Arc::new(PostgresPasswordResetRepository::new(pool.clone())),
        films: Arc::new(PostgresFilmRepository::new(pool.clone())),
        genres: Arc::new(PostgresGenreRepository::new(pool.clone())),
        castings: Arc::new(PostgresCastingRepository::new(pool.clone())),
        relations: Arc::new(PostgresRelationRepository::new(pool.clone())),
        reviews: Arc::new(PostgresReviewRepository::new(pool.clone())),
    };

    let adapters = Adapters {
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager: Arc::new(JwtTokenManager::new(config.jwt_secret(), config.token_ttl())?),
        mailer: Arc::new(LogMailer),
        media_storage: Arc::new(LocalMediaStorage::new(
            config.upload_dir().clone(),
            config.public_base_url(),
        )),
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
    };

    let reset_settings = PasswordResetSettings {
        ttl: config.reset_token_ttl(),
        link_base: config.frontend_url().to_string(),
    };

    let services = Arc::new(ApplicationServices::new(repos, adapters, reset_settings));

    let state = HttpState {
        services,
        db_pool: pool,
        settings: HttpSettings {
            allowed_origins: config.allowed_origins().to_vec(),
            upload_dir: config.upload_dir().clone(),
            secure_cookies: config.secure_cookies(),
        },
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
