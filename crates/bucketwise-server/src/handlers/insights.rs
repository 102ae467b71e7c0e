//! Insight handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::debug;

use crate::{AppError, AppState};
use bucketwise_core::{InsightRequest, InsightResponse};

/// POST /insights - Budget summary plus one insight per bucket
///
/// Omitted percentages fall back to the configured split (50/30/20 unless
/// overridden in the budget config).
pub async fn generate_insights(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsightRequest>, JsonRejection>,
) -> Result<Json<InsightResponse>, AppError> {
    let Json(request) = payload?;

    debug!(
        income = request.income,
        transactions = request.transactions.len(),
        "Insights request"
    );

    Ok(Json(state.engine.generate(request)))
}
