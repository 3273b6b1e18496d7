//! HTTP error mapping shared by every router.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::handlers::{AnalysisError, DecisionCommandError, SuggestProsConsError};

/// Message returned when scoring fails on stored data.
pub const ANALYSIS_FAILURE_MESSAGE: &str = "Server error during analysis";

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation { message: String, field: String },
    NotFound { resource: &'static str, id: String },
    /// Logged in full; only the public message reaches the client.
    Internal { public: String, detail: String },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal {
            public: "Internal server error".to_string(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::Validation { message, field } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(message, &field),
            ),
            ApiError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(resource, &id))
            }
            ApiError::Internal { public, detail } => {
                tracing::error!(error = %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(public))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DecisionCommandError> for ApiError {
    fn from(error: DecisionCommandError) -> Self {
        match error {
            DecisionCommandError::DecisionNotFound(id) => ApiError::NotFound {
                resource: "Decision",
                id: id.to_string(),
            },
            DecisionCommandError::StatementNotFound(id) => ApiError::NotFound {
                resource: "Statement",
                id: id.to_string(),
            },
            DecisionCommandError::MindsetNotFound(id) => ApiError::NotFound {
                resource: "Mindset for decision",
                id: id.to_string(),
            },
            DecisionCommandError::Validation(err) => ApiError::Validation {
                field: err.field().to_string(),
                message: err.to_string(),
            },
            DecisionCommandError::Storage(msg) => ApiError::internal(msg),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::DecisionNotFound(id) => ApiError::NotFound {
                resource: "Decision",
                id: id.to_string(),
            },
            AnalysisError::InvalidRecord(err) => ApiError::Internal {
                public: ANALYSIS_FAILURE_MESSAGE.to_string(),
                detail: err.to_string(),
            },
            AnalysisError::Storage(msg) => ApiError::Internal {
                public: ANALYSIS_FAILURE_MESSAGE.to_string(),
                detail: msg,
            },
        }
    }
}

impl From<SuggestProsConsError> for ApiError {
    fn from(error: SuggestProsConsError) -> Self {
        match error {
            SuggestProsConsError::DecisionNotFound(id) => ApiError::NotFound {
                resource: "Decision",
                id: id.to_string(),
            },
            SuggestProsConsError::Validation(err) => ApiError::internal(err.to_string()),
            SuggestProsConsError::Storage(msg) => ApiError::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DecisionId, ValidationError};

    #[test]
    fn invalid_record_maps_to_analysis_failure() {
        let err: ApiError =
            AnalysisError::InvalidRecord(ValidationError::invalid_format("option", "bad")).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err: ApiError = DecisionCommandError::DecisionNotFound(DecisionId::new()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400_with_field() {
        let err: ApiError =
            DecisionCommandError::Validation(ValidationError::empty_field("text")).into();
        assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "text"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_body_hides_detail() {
        let body = serde_json::to_value(ErrorResponse::internal(ANALYSIS_FAILURE_MESSAGE)).unwrap();
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "Server error during analysis");
        assert!(body.get("details").is_none());
    }
}
