//! Errors returned by request handlers.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use trip_model::ModelError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be decoded into a request.
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// The body decoded but a field value is unacceptable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The model call failed.
    #[error("Model call failed: {0}")]
    Model(#[from] ModelError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody { status: rejection.status(), message: rejection.body_text() }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody { status, .. } => *status,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Model(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "plan-trip failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "plan-trip rejected");
        }
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
