//! In-Memory Repository
//!
//! Test double for the quiz repository traits.

use std::collections::HashMap;
use std::sync::Arc;

use auth::AccountId;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewScore, PlayerProfile, ScoreRecord};
use crate::domain::repository::{ProfileRepository, ScoreRepository, SubmissionRepository};
use crate::domain::value_objects::ScoreId;
use crate::error::QuizResult;

#[derive(Default)]
struct State {
    scores: Vec<ScoreRecord>,
    next_id: i64,
    profiles: HashMap<AccountId, PlayerProfile>,
}

#[derive(Clone, Default)]
pub struct MemoryQuizRepository {
    state: Arc<Mutex<State>>,
}

impl MemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn score_count(&self) -> usize {
        self.state.lock().await.scores.len()
    }

    pub async fn profile_count(&self) -> usize {
        self.state.lock().await.profiles.len()
    }

    pub async fn profile(&self, owner: &AccountId) -> Option<PlayerProfile> {
        self.state.lock().await.profiles.get(owner).cloned()
    }

    /// Drop the owner link of a record, as `ON DELETE SET NULL` would
    pub async fn detach_owner(&self, id: ScoreId) {
        if let Some(record) = self
            .state
            .lock()
            .await
            .scores
            .iter_mut()
            .find(|r| r.id == id)
        {
            record.owner = None;
        }
    }
}

impl ScoreRepository for MemoryQuizRepository {
    async fn top_scores(
        &self,
        limit: i64,
        difficulty: Option<&str>,
    ) -> QuizResult<Vec<ScoreRecord>> {
        let state = self.state.lock().await;

        let mut records: Vec<ScoreRecord> = state
            .scores
            .iter()
            .filter(|r| difficulty.is_none_or(|d| r.difficulty.as_str() == d))
            .cloned()
            .collect();

        records.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.id.value().cmp(&b.id.value()))
        });
        records.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(records)
    }

    async fn sum_scores_by_owner(&self, owner: &AccountId) -> QuizResult<i64> {
        Ok(self
            .state
            .lock()
            .await
            .scores
            .iter()
            .filter(|r| r.owner.as_ref() == Some(owner))
            .map(|r| i64::from(r.score))
            .sum())
    }
}

impl ProfileRepository for MemoryQuizRepository {
    async fn ensure(&self, owner: &AccountId) -> QuizResult<PlayerProfile> {
        let mut state = self.state.lock().await;
        let profile = state
            .profiles
            .entry(*owner)
            .or_insert_with(|| PlayerProfile::new(*owner));
        Ok(profile.clone())
    }

    async fn find(&self, owner: &AccountId) -> QuizResult<Option<PlayerProfile>> {
        Ok(self.state.lock().await.profiles.get(owner).cloned())
    }
}

impl SubmissionRepository for MemoryQuizRepository {
    async fn record_submission(
        &self,
        submission: &NewScore,
    ) -> QuizResult<(ScoreRecord, Option<PlayerProfile>)> {
        let mut state = self.state.lock().await;

        state.next_id += 1;
        let record = ScoreRecord {
            id: ScoreId::new(state.next_id),
            player_name: submission.player_name.clone(),
            score: submission.tally.score,
            wrong: submission.tally.wrong,
            difficulty: submission.difficulty.clone(),
            created_at: Utc::now(),
            owner: submission.owner,
        };
        state.scores.push(record.clone());

        let profile = submission.owner.map(|owner| {
            let profile = state
                .profiles
                .entry(owner)
                .or_insert_with(|| PlayerProfile::new(owner));
            profile.apply_result(submission.tally);
            profile.clone()
        });

        Ok((record, profile))
    }
}
