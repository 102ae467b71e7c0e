//! Bucketwise Web Server
//!
//! Axum-based REST API for budget bucket insights.
//!
//! - `GET /` - liveness message
//! - `POST /transactions/categorize` - fill in missing transaction categories
//! - `POST /insights` - bucket totals and one insight per bucket
//!
//! Every request is answered from the request body alone; the only shared
//! state is read-only configuration.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use bucketwise_core::InsightEngine;

mod handlers;

/// Origins allowed to call the API by default
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "https://ai-budgeting-frontend.onrender.com",
];

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Parse a comma-separated list of origins
///
/// Blank entries and trailing slashes are dropped so that
/// "http://localhost:3000/" matches the browser's Origin header.
pub fn parse_allowed_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Shared application state
pub struct AppState {
    pub engine: InsightEngine,
}

/// Create the application router
pub fn create_router(engine: InsightEngine, config: ServerConfig) -> Router {
    let cors = cors_layer(&config.allowed_origins);

    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/transactions/categorize",
            post(handlers::categorize_transactions),
        )
        .route("/insights", post(handlers::generate_insights))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Build the CORS layer for the configured origin allow-list
///
/// Allowed origins may use any method and header. Both are mirrored from the
/// preflight request; `*` is not valid alongside credentials.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        return layer;
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins).allow_credentials(true)
}

/// Start the server with default configuration
pub async fn serve(engine: InsightEngine, host: &str, port: u16) -> anyhow::Result<()> {
    serve_with_config(engine, host, port, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    engine: InsightEngine,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.allowed_origins.is_empty() {
        info!("CORS: same-origin only");
    } else {
        info!(origins = ?config.allowed_origins, "CORS allow-list configured");
    }

    let app = create_router(engine, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

/// Malformed request bodies keep axum's status (400, 415 or 422)
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Rejected request body"
        );
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
