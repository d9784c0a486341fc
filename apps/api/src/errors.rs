use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assembly::EngineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ResourceNotFound { kind, key, .. } => {
                AppError::NotFound(format!("{kind} not found for '{key}'"))
            }
            e @ EngineError::InvalidLevel { .. } => AppError::Validation(e.to_string()),
            e => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::assembly::ResourceKind;

    #[test]
    fn test_resource_not_found_maps_to_404_without_path() {
        let err = AppError::from(EngineError::ResourceNotFound {
            kind: ResourceKind::CultureMatrix,
            key: "nonexistent".to_string(),
            path: PathBuf::from("/srv/secret/data/culture_expectations_nonexistent.csv"),
        });
        match &err {
            AppError::NotFound(msg) => {
                assert!(msg.contains("nonexistent"));
                assert!(!msg.contains("/srv/secret"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_level_maps_to_400() {
        let err = AppError::from(EngineError::InvalidLevel {
            scale: "technical".to_string(),
            level: "L999".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_resource_maps_to_500() {
        let err = AppError::from(EngineError::MalformedResource {
            path: PathBuf::from("x.csv"),
            reason: "no header row".to_string(),
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_llm_error_maps_to_502() {
        let err = AppError::Llm("boom".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
