//! Player Stats Use Case
//!
//! Loads (or lazily creates) a profile and derives its statistics.

use std::sync::Arc;

use auth::AccountId;

use crate::application::ensure_profile::EnsureProfileUseCase;
use crate::domain::entities::PlayerProfile;
use crate::domain::repository::{ProfileRepository, ScoreRepository};
use crate::domain::services::ProfileStats;
use crate::error::QuizResult;

#[derive(Debug, Clone)]
pub struct PlayerStats {
    pub profile: PlayerProfile,
    pub stats: ProfileStats,
}

pub struct PlayerStatsUseCase<R>
where
    R: ProfileRepository + ScoreRepository,
{
    repo: Arc<R>,
}

impl<R> PlayerStatsUseCase<R>
where
    R: ProfileRepository + ScoreRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: &AccountId) -> QuizResult<PlayerStats> {
        let profile = EnsureProfileUseCase::new(self.repo.clone())
            .execute(owner)
            .await?;

        let score_sum = if profile.total_games == 0 {
            0
        } else {
            self.repo.sum_scores_by_owner(owner).await?
        };

        let stats = ProfileStats::compute(&profile, score_sum);

        Ok(PlayerStats { profile, stats })
    }
}
