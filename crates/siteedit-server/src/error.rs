//! API error type and the error envelope.
//!
//! [`ApiError`] implements `axum::response::IntoResponse` and always renders
//! `{"status": "error", "message": ...}`. The HTTP status is 200 for every
//! variant; clients branch on `status`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::schema::command::CommandEnvelope;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request or provider settings were unusable.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The LLM provider failed or returned an unusable reply.
    #[error("provider error: {0}")]
    Provider(String),

    /// Anything else that went wrong while handling a command.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "command failed");
        let body = CommandEnvelope::error(self.to_string());
        (StatusCode::OK, axum::Json(body)).into_response()
    }
}
