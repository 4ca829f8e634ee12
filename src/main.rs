/// Event Manager Service - main entry point
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use event_manager::{
    config::Config,
    db,
    handlers::{create_event, list_events, login, register},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "event_manager=info,info".into()),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    info!(
        "Starting event manager on {}:{}",
        config.server_host, config.server_port
    );

    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .context("Failed to open database")?;
    db::init_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    info!("Database ready at {}", config.database_url);

    let state = AppState { db: pool };

    let app = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/events", post(create_event))
        .route("/events/:user_id", get(list_events))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
