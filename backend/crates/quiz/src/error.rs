//! Quiz Error Types
//!
//! Quiz-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Account failures arrive wrapped as
//! [`QuizError::Auth`] and keep their own status and message.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    /// Rejected submission input; nothing was stored
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuizError {
    pub fn validation(message: impl Into<String>) -> Self {
        QuizError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::Validation(_) => ErrorKind::BadRequest,
            QuizError::Auth(e) => e.kind(),
            QuizError::Database(_) | QuizError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuizError::Database(e) => {
                tracing::error!(error = %e, "Quiz database error");
            }
            QuizError::Internal(msg) => {
                tracing::error!(message = %msg, "Quiz internal error");
            }
            QuizError::Auth(AuthError::Database(e)) => {
                tracing::error!(error = %e, "Auth database error");
            }
            QuizError::Auth(AuthError::Internal(msg)) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            QuizError::Auth(AuthError::InvalidCredentials) => {
                tracing::warn!("Invalid login attempt");
            }
            QuizError::Auth(AuthError::SessionInvalid) => {
                tracing::warn!("Rejected invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Quiz error");
            }
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Auth(e) => AppError::from(e),
            QuizError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for QuizError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        QuizError::Validation(rejection.body_text())
    }
}

impl From<axum::extract::rejection::QueryRejection> for QuizError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        QuizError::Validation(rejection.body_text())
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
