//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{MSG_CRM_ALREADY_EXISTS, MSG_EMAIL_ALREADY_EXISTS};

/// Uniquely-keyed doctor field that collided with an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    Crm,
}

impl DuplicateField {
    /// Human-readable collision message returned to clients
    pub fn message(&self) -> &'static str {
        match self {
            DuplicateField::Email => MSG_EMAIL_ALREADY_EXISTS,
            DuplicateField::Crm => MSG_CRM_ALREADY_EXISTS,
        }
    }

    /// Column name, used in logs
    pub fn column(&self) -> &'static str {
        match self {
            DuplicateField::Email => "email",
            DuplicateField::Crm => "crm",
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Domain
    #[error("{}", .0.message())]
    AlreadyExists(DuplicateField),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AlreadyExists(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::AlreadyExists(field) => field.message().to_string(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Collisions answer with the bare message as the body
        if let AppError::AlreadyExists(field) = &self {
            return (status, field.message()).into_response();
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn already_exists(field: DuplicateField) -> Self {
        AppError::AlreadyExists(field)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display_uses_collision_message() {
        let email = AppError::already_exists(DuplicateField::Email);
        let crm = AppError::already_exists(DuplicateField::Crm);

        assert_eq!(email.to_string(), "O email já está cadastrado");
        assert_eq!(crm.to_string(), "O CRM já está cadastrado");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::already_exists(DuplicateField::Crm).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(sea_orm::DbErr::Custom("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("connection string leaked");
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
