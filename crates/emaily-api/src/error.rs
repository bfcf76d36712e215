use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use emaily_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest {
        error: String,
        details: Option<String>,
    },
    Internal {
        error: &'static str,
        details: String,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    pub fn template_not_found() -> Self {
        ApiError::NotFound("Template not found".to_string())
    }

    /// Map a store failure, labelling unexpected errors with `context`.
    pub fn store(context: &'static str) -> impl FnOnce(StorageError) -> ApiError {
        move |e| match e {
            StorageError::NotFound { .. } => ApiError::template_not_found(),
            StorageError::Validation(e) => ApiError::BadRequest {
                error: "All fields are required".to_string(),
                details: Some(e.to_string()),
            },
            other => ApiError::Internal {
                error: context,
                details: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::BadRequest { error, details } => {
                (StatusCode::BAD_REQUEST, ErrorBody { error, details })
            }
            ApiError::Internal { error, details } => {
                tracing::error!(details = %details, "{error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: error.to_string(),
                        details: Some(details),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            error: "Invalid request body".to_string(),
            details: Some(e.body_text()),
        }
    }
}
