use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Error bodies are a flat `{"error": "<message>"}` — the shape the frontend
/// consumes. Remote-call detail is logged server-side and never leaks to the
/// caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {detail}")]
    Llm {
        /// Generic message returned to the caller.
        public: String,
        /// Full error detail, logged only.
        detail: String,
    },
}

impl AppError {
    /// Wraps a remote-call failure with the generic message shown to callers.
    pub fn llm(public: &str, err: impl std::fmt::Display) -> Self {
        AppError::Llm {
            public: public.to_string(),
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Llm { public, detail } => {
                tracing::error!("LLM error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, public)
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
