//! Domain Entities
//!
//! Core business entities for the quiz domain.

use auth::AccountId;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::{Difficulty, PlayerName, ScoreId, Tally};

/// One finished quiz run. Immutable once stored.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub id: ScoreId,
    pub player_name: PlayerName,
    pub score: i32,
    pub wrong: i32,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    /// `None` for anonymous play, or after the owning account was deleted
    pub owner: Option<AccountId>,
}

/// Validated submission, not yet stored
#[derive(Debug, Clone)]
pub struct NewScore {
    pub player_name: PlayerName,
    pub tally: Tally,
    pub difficulty: Difficulty,
    pub owner: Option<AccountId>,
}

/// Running totals of one account
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub owner: AccountId,
    pub total_games: i64,
    pub best_score: i32,
    pub total_correct: i64,
    pub total_wrong: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerProfile {
    pub fn new(owner: AccountId) -> Self {
        let now = Utc::now();
        Self {
            owner,
            total_games: 0,
            best_score: 0,
            total_correct: 0,
            total_wrong: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fold one finished run into the totals
    pub fn apply_result(&mut self, tally: Tally) {
        self.total_games += 1;
        self.total_correct += i64::from(tally.score);
        self.total_wrong += i64::from(tally.wrong);
        self.best_score = self.best_score.max(tally.score);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_empty() {
        let profile = PlayerProfile::new(AccountId::new());
        assert_eq!(profile.total_games, 0);
        assert_eq!(profile.best_score, 0);
        assert_eq!(profile.total_correct, 0);
        assert_eq!(profile.total_wrong, 0);
    }

    #[test]
    fn test_apply_result() {
        let mut profile = PlayerProfile::new(AccountId::new());

        profile.apply_result(Tally { score: 8, wrong: 2 });
        assert_eq!(
            (profile.total_games, profile.best_score, profile.total_correct, profile.total_wrong),
            (1, 8, 8, 2)
        );

        profile.apply_result(Tally { score: 5, wrong: 5 });
        assert_eq!(
            (profile.total_games, profile.best_score, profile.total_correct, profile.total_wrong),
            (2, 8, 13, 7)
        );

        profile.apply_result(Tally { score: 9, wrong: 0 });
        assert_eq!(profile.best_score, 9);
    }
}
