//! `numen serve` -- HTTP JSON API over the numerology engine.
//!
//! Security features:
//! - CORS headers on all responses (permissive)
//! - Per-IP rate limiting (default: 60 req/min, configurable)
//! - Optional API key authentication via `NUMEN_API_KEY` or `[serve] api_key`
//!
//! Endpoints:
//! - GET  /health                 - Server status (exempt from auth)
//! - GET  /types                  - Supported types and their required fields
//! - GET  /meanings               - Active meanings resource with ETag
//! - POST /numerology/{type}      - Run one calculation from an input bag
//! - POST /evaluate               - Evaluate a typed request (or an array)
//! - POST /profile                - Full profile for one person
//!
//! POST endpoints accept `?locale=xx`; otherwise the configured locale is used.
//! All responses use Content-Type: application/json.

mod handlers;
mod meanings;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use self::handlers::{
    handle_evaluate, handle_health, handle_not_found, handle_numerology, handle_profile,
    handle_types,
};
use self::meanings::handle_meanings;
use self::middleware::{auth_middleware, rate_limit_middleware};
use self::state::AppState;
use crate::config::Settings;

/// Maximum request body size: 64 KB.
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Rate limit window duration in seconds (1 minute).
const RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the router with all routes and middleware layers.
fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/types", get(handle_types))
        .route("/meanings", get(handle_meanings))
        .route("/numerology/{numerology_type}", post(handle_numerology))
        .route("/evaluate", post(handle_evaluate))
        .route("/profile", post(handle_profile))
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state)
}

/// Start the HTTP server with resolved settings.
///
/// When TLS cert/key paths are provided, the server listens over HTTPS
/// using `axum-server` with rustls. Otherwise it uses plain HTTP.
pub async fn start_server(
    settings: Settings,
    _tls_cert: Option<PathBuf>,
    _tls_key: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let port = settings.serve.port;

    if settings.serve.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    }
    tracing::info!(
        rate_limit = settings.serve.rate_limit,
        locale = %settings.locale,
        "serving with per-minute rate limit"
    );

    let state = Arc::new(AppState::new(settings));
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // TLS support via axum-server + rustls (requires `tls` feature)
    #[cfg(feature = "tls")]
    if let (Some(cert_path), Some(key_path)) = (&_tls_cert, &_tls_key) {
        let config =
            axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path).await?;
        tracing::info!("numen listening on https://{}", addr);
        axum_server::bind_rustls(addr, config)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await?;
        return Ok(());
    }

    #[cfg(not(feature = "tls"))]
    if _tls_cert.is_some() {
        return Err("TLS requires building with the `tls` feature".into());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("numen listening on http://{}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received shutdown signal"),
        Err(e) => {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
