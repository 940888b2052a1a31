//! Taskboard server binary
//!
//! Standalone server for the taskboard service, providing a REST API
//! for task management and AI analysis.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use taskboard::api::create_router;
use taskboard::config::ServerConfig;
use taskboard::db::DatabaseConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    // Load configuration (file optional, env overrides applied)
    let config = ServerConfig::load_or_default().context("failed to load configuration")?;
    tracing::info!("Database path: {}", config.database.path);
    tracing::info!("Gemini model: {}", config.gemini.model);

    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .context("invalid listener address")?;

    // Initialize database connection
    let database_url = config.database_url();
    tracing::info!("Connecting to database: {}", database_url);
    let db = DatabaseConnection::new(&database_url).await?;

    // Run migrations
    tracing::info!("Running database migrations");
    db.run_migrations().await?;

    // Health check the database
    db.health_check().await?;

    // Build the Gemini client from the configured environment variable
    let gemini_config = llm::GeminiConfig::from_env(&config.gemini.api_key_env)?
        .with_base_url(config.gemini.base_url.clone())
        .with_model(config.gemini.model.clone());
    let model = Arc::new(llm::GeminiClient::new(gemini_config)?);

    // Build the router
    tracing::info!("Building API router");
    let app = create_router(db, model);

    // Create server
    tracing::info!("Starting taskboard server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Taskboard server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL-C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
