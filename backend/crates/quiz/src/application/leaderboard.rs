//! Leaderboard Use Case

use std::sync::Arc;

use crate::domain::entities::ScoreRecord;
use crate::domain::repository::ScoreRepository;
use crate::domain::value_objects::Difficulty;
use crate::error::QuizResult;

/// Number of entries on the leaderboard
pub const LEADERBOARD_SIZE: i64 = 10;

pub struct LeaderboardUseCase<R>
where
    R: ScoreRepository,
{
    repo: Arc<R>,
}

impl<R> LeaderboardUseCase<R>
where
    R: ScoreRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Top scores, optionally restricted to one difficulty
    pub async fn execute(&self, difficulty: Option<&str>) -> QuizResult<Vec<ScoreRecord>> {
        let filter = Difficulty::filter(difficulty);
        self.repo
            .top_scores(LEADERBOARD_SIZE, filter.as_deref())
            .await
    }
}
