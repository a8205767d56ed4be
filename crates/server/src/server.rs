//! Server initialization and routing.

use crate::config::ServerConfig;
use crate::middleware::track_request;
use crate::routes::{api_info, health, media, not_found};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use mediastore::ChangeMonitor;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware.
///
/// Probe routes (`/`, `/health`, `/ready`) sit next to the media API; the
/// upload route additionally carries the request-body cap.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let media_routes = Router::new()
        .route("/api/media/upload", post(media::upload_media))
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .route("/api/media/filelist", get(media::file_list));

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .merge(media_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(track_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the mediastore HTTP server.
///
/// Initializes logging, creates the shared state (which also creates the
/// upload directory), spawns the filesystem change monitor, and serves until
/// SIGTERM or Ctrl+C. Shutdown cancels the monitor token and waits for the
/// watch subscription to be released before returning.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    let state = Arc::new(ServerState::new(config.clone()).await?);

    let cancel = CancellationToken::new();
    let monitor = ChangeMonitor::spawn(state.store.upload_dir(), cancel.clone());

    let app = build_router(state.clone());
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "starting mediastore server on {} (upload dir {}, max file size {} MB)",
        addr,
        state.store.upload_dir().display(),
        config.store.max_file_size_mb
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let shutdown = {
        let cancel = cancel.clone();
        async move {
            shutdown_signal().await;
            cancel.cancel();
        }
    };
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    // Covers serve returning without the signal path having fired;
    // cancelling twice is a no-op.
    cancel.cancel();
    monitor.shutdown().await;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
