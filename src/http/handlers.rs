//! HTTP handlers for the REST API.
//!
//! Each handler re-reads the artifact through the store; file I/O happens
//! inside `spawn_blocking` so the reactor is never parked on disk reads.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::state::AppState;
use crate::models::{CleanedRecord, StatsSummary};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Whether the artifact is currently present on disk
    pub artifact: String,
}

/// GET /health
///
/// Liveness check; also reports whether the artifact is present.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let artifact = if state.store.available() {
        "present"
    } else {
        "missing"
    };
    Json(HealthResponse {
        status: "ok".to_string(),
        artifact: artifact.to_string(),
    })
}

/// GET /api/data
///
/// Full sequence of cleaned records, in stored order.
pub async fn get_data(State(state): State<AppState>) -> HandlerResult<Vec<CleanedRecord>> {
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || store.load())
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {e}")))??;

    Ok(Json(records))
}

/// GET /api/stats
///
/// Stats summary, recomputed from the artifact on every call.
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<StatsSummary> {
    let store = state.store.clone();
    let stats = tokio::task::spawn_blocking(move || store.stats())
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {e}")))??;

    Ok(Json(stats))
}
