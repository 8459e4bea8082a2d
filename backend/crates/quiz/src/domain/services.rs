//! Domain Services
//!
//! Derived profile statistics, computed on every read and never stored.

use serde::Serialize;

use crate::domain::entities::PlayerProfile;

/// Round to two decimals, ties to the even digit (`0.125` becomes `0.12`)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileStats {
    pub average_score: f64,
    pub accuracy: f64,
}

impl ProfileStats {
    /// `score_sum` is the sum of `score` over the score records the account
    /// still owns. It can drift from `total_correct` when a record loses its
    /// owner link, and the average follows the records.
    pub fn compute(profile: &PlayerProfile, score_sum: i64) -> Self {
        Self {
            average_score: average_score(score_sum, profile.total_games),
            accuracy: accuracy(profile.total_correct, profile.total_wrong),
        }
    }
}

pub fn average_score(score_sum: i64, total_games: i64) -> f64 {
    if total_games == 0 {
        return 0.0;
    }
    round2(score_sum as f64 / total_games as f64)
}

/// Percentage of correct answers
pub fn accuracy(total_correct: i64, total_wrong: i64) -> f64 {
    let answered = total_correct + total_wrong;
    if answered == 0 {
        return 0.0;
    }
    round2(total_correct as f64 / answered as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::AccountId;

    #[test]
    fn test_zero_denominators() {
        assert_eq!(average_score(0, 0), 0.0);
        assert_eq!(average_score(17, 0), 0.0);
        assert_eq!(accuracy(0, 0), 0.0);
    }

    #[test]
    fn test_average_score() {
        assert_eq!(average_score(8, 1), 8.0);
        assert_eq!(average_score(13, 2), 6.5);
        assert_eq!(average_score(10, 3), 3.33);
        assert_eq!(average_score(20, 3), 6.67);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(8, 2), 80.0);
        assert_eq!(accuracy(13, 7), 65.0);
        assert_eq!(accuracy(1, 2), 33.33);
        assert_eq!(accuracy(2, 1), 66.67);
        assert_eq!(accuracy(5, 0), 100.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_stats_round_ties_to_even() {
        assert_eq!(average_score(1, 8), 0.12);
        assert_eq!(average_score(3, 8), 0.38);
        assert_eq!(accuracy(1, 799), 0.12);
    }

    #[test]
    fn test_compute_uses_score_sum_for_average() {
        let mut profile = PlayerProfile::new(AccountId::new());
        profile.total_games = 2;
        profile.total_correct = 13;
        profile.total_wrong = 7;

        let stats = ProfileStats::compute(&profile, 13);
        assert_eq!(stats, ProfileStats { average_score: 6.5, accuracy: 65.0 });

        // One record lost its owner link: counters stay, the average drops
        let stats = ProfileStats::compute(&profile, 5);
        assert_eq!(stats.average_score, 2.5);
        assert_eq!(stats.accuracy, 65.0);
    }
}
