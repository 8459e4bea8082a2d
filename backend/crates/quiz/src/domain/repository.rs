//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use auth::AccountId;

use crate::domain::entities::{NewScore, PlayerProfile, ScoreRecord};
use crate::error::QuizResult;

/// Read access to stored score records
#[trait_variant::make(ScoreRepository: Send)]
pub trait LocalScoreRepository {
    /// Highest scores first, ties in insertion order
    async fn top_scores(&self, limit: i64, difficulty: Option<&str>)
    -> QuizResult<Vec<ScoreRecord>>;

    /// Sum of `score` over every record owned by the account
    async fn sum_scores_by_owner(&self, owner: &AccountId) -> QuizResult<i64>;
}

/// Player profile storage
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Create the profile if missing, then return it. Idempotent.
    async fn ensure(&self, owner: &AccountId) -> QuizResult<PlayerProfile>;

    async fn find(&self, owner: &AccountId) -> QuizResult<Option<PlayerProfile>>;
}

/// Atomic write of a submission
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Insert the record and, when it has an owner, fold it into the owner's
    /// profile, in one transaction with the profile row locked.
    ///
    /// Returns the stored record and the updated profile (if any).
    async fn record_submission(
        &self,
        submission: &NewScore,
    ) -> QuizResult<(ScoreRecord, Option<PlayerProfile>)>;
}
