//! API error envelope
//!
//! Every failure is answered as `{success: false, message}` with a 5xx
//! status. The underlying cause is logged, never sent to the client.
//! "No venue matched" is not an error and does not go through here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Handler failure surfaced to the client
#[derive(Debug)]
pub enum ApiError {
    /// No venue database was configured at startup
    Unconfigured,
    /// The store call failed
    DataUnavailable {
        message: &'static str,
        cause: foodpick_common::Error,
    },
}

impl ApiError {
    /// Wrap a store failure behind a generic user-facing message
    pub fn unavailable(message: &'static str) -> impl FnOnce(foodpick_common::Error) -> Self {
        move |cause| ApiError::DataUnavailable { message, cause }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Unconfigured => "Database configuration error",
            ApiError::DataUnavailable { message, .. } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Unconfigured => error!("Request rejected: venue database not configured"),
            ApiError::DataUnavailable { message, cause } => error!("{}: {}", message, cause),
        }

        let body = Json(json!({
            "success": false,
            "message": self.message(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
