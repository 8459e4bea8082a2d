//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//!
//! ## Features
//! - Account registration with user name + password (email optional)
//! - Password login
//! - Server-side sessions behind signed opaque tokens
//!   (`Authorization: Token <session_id>.<hmac>`)
//! - Logout revokes every token of the account
//!
//! The HTTP surface lives in the `quiz` crate, which combines these use cases
//! with player profiles.
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Tokens are HMAC-SHA256 signed; a token whose session row is gone is dead

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::account::Account;
pub use domain::value_object::AccountId;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Every repository trait the auth use cases need, implemented by one store
pub trait AuthStore:
    domain::repository::AccountRepository
    + domain::repository::CredentialRepository
    + domain::repository::AuthSessionRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> AuthStore for T where
    T: domain::repository::AccountRepository
        + domain::repository::CredentialRepository
        + domain::repository::AuthSessionRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
