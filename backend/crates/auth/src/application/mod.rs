//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod check_session;
pub mod config;
pub mod issue_token;
pub mod register;
pub mod sign_out;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use issue_token::{IssueTokenUseCase, IssuedToken};
pub use register::{RegisterInput, RegisterUseCase};
pub use sign_out::SignOutUseCase;
