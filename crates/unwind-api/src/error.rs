//! Batch-boundary error types and their HTTP responses.
//!
//! Per-event failures are handled inside the unwind handler (skipped with a
//! warning); only problems with the request envelope itself reach the
//! client, always as a 400 with a fixed JSON shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures that reject an entire batch request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was empty (code 10).
    #[error("No data received")]
    MissingBody,

    /// The request body was not a valid JSON array (code 11).
    #[error("Request body is not a valid JSON array: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the numeric error code for this failure.
    pub const fn code(&self) -> u16 {
        match self {
            Self::MissingBody => 10,
            Self::MalformedJson(_) => 11,
        }
    }
}

/// Error response body with code and message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details including code and message.
    pub error: ErrorDetail,
}

/// Detailed error information.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Numeric error code.
    pub code: u16,
    /// Human-readable error description.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail { code: self.code(), message: self.to_string() },
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
