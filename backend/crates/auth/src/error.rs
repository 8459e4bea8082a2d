//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password missing at registration
    #[error("Username and password are required")]
    MissingCredentials,

    /// Register with a username that is already in use
    #[error("Username already exists")]
    UserNameTaken,

    /// Field-level validation failure (user name, email, password policy)
    #[error("{0}")]
    InvalidInput(String),

    /// Unknown user, wrong password or inactive account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Operation requires a caller identity and none was presented
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Token malformed, forged, revoked or expired
    #[error("Invalid token")]
    SessionInvalid,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            // A taken username is reported as a plain 400, not 409
            AuthError::MissingCredentials
            | AuthError::UserNameTaken
            | AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::SessionInvalid => {
                tracing::warn!("Rejected invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            // Keeps the pool-exhaustion -> 503 classification
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
