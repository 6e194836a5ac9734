//! REST API error types
//!
//! Every error renders as `{"error": {"code", "message", "field"?}}` with a
//! matching HTTP status. Locations and library messages are logged, never
//! returned.

use sa_auth::{AuthError, AuthErrorKind};
use sa_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "not_found", "invalid_token")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Duplicate resource (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Authentication, token or rate limit failure (401/429/500 by kind)
    #[error("Auth failure ({}): {detail} {location}", .kind.code())]
    Auth {
        kind: AuthErrorKind,
        detail: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Auth { kind, .. } => match kind {
                AuthErrorKind::InvalidCredentials
                | AuthErrorKind::MissingToken
                | AuthErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                AuthErrorKind::IssuanceFailure | AuthErrorKind::Internal => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "not_found".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "validation_error".into(),
                message,
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "conflict".into(),
                message,
                field: None,
            },
            ApiError::Auth { kind, .. } => ApiErrorBody {
                code: kind.code().into(),
                message: kind.public_message().into(),
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "internal_error".into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "bad_request".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Collapse auth failures into their client-visible kind
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Auth {
            kind: e.kind(),
            detail: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field: Some(field.to_string()),
                location,
            },
            CoreError::InvalidUserId { value, .. } => ApiError::BadRequest {
                message: format!("Invalid user id: {}", value),
                location,
            },
            CoreError::UserNotFound { .. } => ApiError::NotFound {
                message: "User not found".to_string(),
                location,
            },
            CoreError::DuplicateUsername { username, .. } => ApiError::Conflict {
                message: format!("Username '{}' is already taken", username),
                location,
            },
            CoreError::StoreUnavailable { message, .. } => {
                // Don't expose store internals to clients
                log::error!("Identity store error: {}", message);
                ApiError::Internal {
                    message: "Identity store unavailable".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        log::debug!("Rejected request body: {}", e.body_text());
        ApiError::BadRequest {
            message: "Invalid request body".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
