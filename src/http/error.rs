//! HTTP error handling and response types.
//!
//! Typed failures are translated to the wire error-body shape here and
//! nowhere else. Clients always receive a JSON body of the form
//! `{"error": "<message>"}`, never a bare status or a stack trace.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::ArtifactError;

/// Wire shape for every error the API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Application error type for HTTP handlers.
///
/// Status policy: a missing artifact (the data has not been produced yet)
/// maps to 404; an unexpected I/O or parse failure maps to 500.
#[derive(Debug)]
pub enum AppError {
    /// Artifact absent at all checked paths
    NotFound(String),
    /// Unexpected I/O or parse failure
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ArtifactError> for AppError {
    fn from(err: ArtifactError) -> Self {
        let message = format!("could not load data: {err}");
        match err {
            ArtifactError::Missing { .. } => AppError::NotFound(message),
            ArtifactError::Io { .. } | ArtifactError::Parse { .. } => {
                AppError::Internal(message)
            }
        }
    }
}
