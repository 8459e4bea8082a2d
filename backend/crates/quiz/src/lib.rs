//! Quiz Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, statistics, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, caller resolution, router
//!
//! ## Features
//! - Public leaderboard (top 10, optional difficulty filter)
//! - Score submission, anonymous or attached to the caller's account
//! - Player profiles with running totals, derived average score and accuracy
//! - Register / login / logout / profile endpoints on top of the `auth` crate
//!
//! ## Consistency Model
//! - A submission and its profile update commit together
//! - The profile row is locked for the read-modify-write, so concurrent
//!   submissions for one account never lose an increment

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{QuizError, QuizResult};
pub use infra::postgres::PgQuizRepository;
pub use presentation::router::{quiz_router, quiz_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Every repository trait the quiz use cases need, implemented by one store
pub trait QuizStore:
    domain::repository::ScoreRepository
    + domain::repository::ProfileRepository
    + domain::repository::SubmissionRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> QuizStore for T where
    T: domain::repository::ScoreRepository
        + domain::repository::ProfileRepository
        + domain::repository::SubmissionRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
