//! Submit Score Use Case
//!
//! Validates a finished quiz run, stores it, and updates the caller's profile
//! when the caller is logged in.

use std::sync::Arc;

use auth::AccountId;

use crate::domain::entities::{NewScore, PlayerProfile, ScoreRecord};
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_objects::{Difficulty, PlayerName, Tally};
use crate::error::QuizResult;

/// Raw fields as received; validation happens in `execute`
#[derive(Debug, Default)]
pub struct SubmitScoreInput {
    pub player_name: Option<String>,
    pub score: Option<i64>,
    pub wrong: Option<i64>,
    pub difficulty: Option<String>,
}

#[derive(Debug)]
pub struct SubmitScoreOutput {
    pub record: ScoreRecord,
    pub profile: Option<PlayerProfile>,
}

pub struct SubmitScoreUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitScoreUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: SubmitScoreInput,
        caller: Option<AccountId>,
    ) -> QuizResult<SubmitScoreOutput> {
        let submission = NewScore {
            player_name: PlayerName::new(input.player_name.as_deref().unwrap_or_default())?,
            tally: Tally::new(input.score, input.wrong)?,
            difficulty: Difficulty::new(input.difficulty.as_deref())?,
            owner: caller,
        };

        let (record, profile) = self.repo.record_submission(&submission).await?;

        tracing::info!(
            score_id = %record.id,
            score = record.score,
            wrong = record.wrong,
            difficulty = %record.difficulty.as_str(),
            owner = ?record.owner,
            "Score recorded"
        );

        Ok(SubmitScoreOutput { record, profile })
    }
}
