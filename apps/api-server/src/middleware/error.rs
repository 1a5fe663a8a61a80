//! Error mapping at the HTTP boundary.
//!
//! Every handler failure converts to one of these variants; nothing
//! propagates to the client as a raw fault.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use blog_core::error::{FieldError, RepoError};
use blog_shared::{ErrorBody, ValidationErrorBody};

/// Application-level error type with a fixed status/body mapping.
#[derive(Debug)]
pub enum AppError {
    /// The requested blog post does not exist.
    NotFound,
    /// Malformed input, e.g. a path/body id mismatch.
    BadRequest(String),
    /// Field validation failures, reported per offending field.
    Validation(Vec<FieldError>),
    /// Unexpected failure; detail is logged server-side and never leaked.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Blog post not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => {
                HttpResponse::NotFound().json(ErrorBody::new("Blog post not found"))
            }
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorBody::new(msg)),
            AppError::Validation(errors) => {
                HttpResponse::BadRequest().json(ValidationErrorBody::from_fields(errors))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError()
                    .json(ErrorBody::new("An unexpected error occurred."))
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Connection(msg) => AppError::Internal(format!("connection: {msg}")),
            RepoError::Query(msg) => AppError::Internal(format!("query: {msg}")),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
