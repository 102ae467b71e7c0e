//! Liveness handler

use axum::Json;
use serde::Serialize;

/// Constant identity payload
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / - Report that the API is up
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AI Budgeting API is running!",
    })
}
