use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::analysis::analyzer::AnalysisError;
use crate::pdf::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingApiKey => AppError::Config(err.to_string()),
            AnalysisError::Request(_) | AnalysisError::Parse(_) => {
                AppError::Service(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Extraction(e) => {
                tracing::warn!("PDF extraction failed: {e}");
                (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR", e.to_string())
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", msg.clone())
            }
            AppError::Service(msg) => {
                tracing::error!("Upstream service error: {msg}");
                (StatusCode::BAD_GATEWAY, "SERVICE_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                return internal_error_response();
            }
        };

        (status, error_body(code, &message)).into_response()
    }
}

/// The generic 500 body. Also served for panics caught at the router boundary.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body("INTERNAL_ERROR", "Internal server error."),
    )
        .into_response()
}

fn error_body(code: &str, message: &str) -> Json<Value> {
    Json(json!({
        "error": {
            "code": code,
            "message": message
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extract::ParseError;

    #[test]
    fn test_missing_key_maps_to_config_error() {
        let err: AppError = AnalysisError::MissingApiKey.into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_failure_maps_to_bad_gateway() {
        let err: AppError = AnalysisError::Parse(ParseError::EmptyContent).into();
        match &err {
            AppError::Service(msg) => assert!(msg.contains("Failed to parse LLM response")),
            other => panic!("expected service error, got {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_extraction_error_is_bad_request() {
        let err: AppError = ExtractionError::Empty.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_payload_too_large_status() {
        let err = AppError::PayloadTooLarge("resume_file exceeds the upload limit".to_string());
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::Internal(anyhow::anyhow!("secret connection string"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "Internal server error.");
        assert!(!String::from_utf8_lossy(&bytes).contains("secret"));
    }
}
