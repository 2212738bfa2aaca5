use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Server-side kinds map to a generic client-facing message; the full detail
/// only goes to the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Model returned unusable output")]
    ModelOutputMalformed,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::EmptyContent => AppError::ModelOutputMalformed,
            other => AppError::ModelUnavailable(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Extraction(msg) => {
                tracing::error!("PDF extraction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract text from the uploaded PDF.".to_string(),
                )
            }
            AppError::ModelUnavailable(msg) => {
                tracing::error!("Model error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The resume parsing service is temporarily unavailable.".to_string(),
                )
            }
            AppError::ModelOutputMalformed => {
                tracing::error!("Model reply contained no usable text");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The model returned an unusable response.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}
