//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire.

use auth::{Account, AccountId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::PlayerStats;
use crate::domain::entities::ScoreRecord;
use crate::domain::value_objects::ScoreId;

/// Query for GET /api/scores/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub id: ScoreId,
    pub player_name: String,
    pub score: i32,
    pub wrong: i32,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl From<ScoreRecord> for ScoreResponse {
    fn from(record: ScoreRecord) -> Self {
        Self {
            id: record.id,
            player_name: record.player_name.as_str().to_string(),
            score: record.score,
            wrong: record.wrong,
            difficulty: record.difficulty.as_str().to_string(),
            created_at: record.created_at,
        }
    }
}

/// Request for POST /api/scores/
///
/// Every field is optional here so that a missing one is reported with the
/// field name instead of a generic deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitScoreRequest {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub wrong: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitScoreResponse {
    pub message: &'static str,
    pub id: ScoreId,
}

/// Request for POST /api/register/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Request for POST /api/login/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: AccountId,
    pub username: String,
    pub email: String,
}

impl From<&Account> for UserSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id,
            username: account.user_name.as_str().to_string(),
            email: account.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserSummary,
}

/// `user` object of the login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    #[serde(flatten)]
    pub summary: UserSummary,
    pub total_games: i64,
    pub best_score: i32,
    pub average_score: f64,
    pub accuracy: f64,
}

impl LoginUser {
    pub fn new(account: &Account, player: &PlayerStats) -> Self {
        Self {
            summary: UserSummary::from(account),
            total_games: player.profile.total_games,
            best_score: player.profile.best_score,
            average_score: player.stats.average_score,
            accuracy: player.stats.accuracy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: LoginUser,
}

/// Response for GET /api/profile/
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub summary: UserSummary,
    pub total_games: i64,
    pub best_score: i32,
    pub average_score: f64,
    pub accuracy: f64,
    pub total_correct: i64,
    pub total_wrong: i64,
}

impl ProfileResponse {
    pub fn new(account: &Account, player: &PlayerStats) -> Self {
        Self {
            summary: UserSummary::from(account),
            total_games: player.profile.total_games,
            best_score: player.profile.best_score,
            average_score: player.stats.average_score,
            accuracy: player.stats.accuracy,
            total_correct: player.profile.total_correct,
            total_wrong: player.profile.total_wrong,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PlayerProfile;
    use crate::domain::services::ProfileStats;
    use auth::domain::value_object::{email::Email, user_name::UserName};

    fn account() -> Account {
        Account::new(
            UserName::new("alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
        )
    }

    #[test]
    fn test_submit_request_accepts_missing_fields() {
        let req: SubmitScoreRequest = serde_json::from_str(r#"{"score": 3}"#).unwrap();
        assert_eq!(req.score, Some(3));
        assert!(req.player_name.is_none());
        assert!(req.wrong.is_none());
    }

    #[test]
    fn test_profile_response_is_flat() {
        let account = account();
        let mut profile = PlayerProfile::new(account.account_id);
        profile.total_games = 2;
        profile.best_score = 8;
        profile.total_correct = 13;
        profile.total_wrong = 7;
        let player = PlayerStats {
            stats: ProfileStats::compute(&profile, 13),
            profile,
        };

        let json = serde_json::to_value(ProfileResponse::new(&account, &player)).unwrap();

        assert_eq!(json["id"], account.account_id.to_string());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["total_games"], 2);
        assert_eq!(json["best_score"], 8);
        assert_eq!(json["average_score"], 6.5);
        assert_eq!(json["accuracy"], 65.0);
        assert_eq!(json["total_correct"], 13);
        assert_eq!(json["total_wrong"], 7);
    }
}
