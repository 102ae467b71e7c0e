//! Transaction handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::debug;

use crate::{AppError, AppState};
use bucketwise_core::Transaction;

/// POST /transactions/categorize - Fill in missing categories
///
/// Transactions that already carry a category are returned unchanged, in the
/// order they were sent.
pub async fn categorize_transactions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<Transaction>>, JsonRejection>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let Json(transactions) = payload?;
    let count = transactions.len();

    let categorized = state.engine.categorize_all(transactions);

    debug!(count, "Categorize request");
    Ok(Json(categorized))
}
