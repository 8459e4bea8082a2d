//! Domain Layer
//!
//! Contains entities, value objects, services and repository traits.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::{NewScore, PlayerProfile, ScoreRecord};
pub use repository::{ProfileRepository, ScoreRepository, SubmissionRepository};
pub use services::ProfileStats;
