//! Domain Value Objects

use serde::Serialize;
use std::fmt;

use crate::error::{QuizError, QuizResult};

pub const PLAYER_NAME_MAX_LENGTH: usize = 100;
pub const DIFFICULTY_MAX_LENGTH: usize = 20;
pub const DEFAULT_DIFFICULTY: &str = "easy";

/// Score record identifier (BIGSERIAL, increases with insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ScoreId(i64);

impl ScoreId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name typed in for a quiz run. Not unique, not tied to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(raw: &str) -> QuizResult<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(QuizError::validation("player_name is required"));
        }
        if name.chars().count() > PLAYER_NAME_MAX_LENGTH {
            return Err(QuizError::validation(format!(
                "player_name must be at most {} characters",
                PLAYER_NAME_MAX_LENGTH
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form difficulty label ("easy", "medium", "hard", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Difficulty(String);

impl Difficulty {
    /// Absent or blank input becomes [`DEFAULT_DIFFICULTY`]
    pub fn new(raw: Option<&str>) -> QuizResult<Self> {
        let label = raw.map(str::trim).unwrap_or_default();
        if label.is_empty() {
            return Ok(Self::default());
        }
        if label.chars().count() > DIFFICULTY_MAX_LENGTH {
            return Err(QuizError::validation(format!(
                "difficulty must be at most {} characters",
                DIFFICULTY_MAX_LENGTH
            )));
        }
        Ok(Self(label.to_string()))
    }

    /// Leaderboard filter: blank means no filter
    pub fn filter(raw: Option<&str>) -> Option<String> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(DEFAULT_DIFFICULTY.to_string())
    }
}

/// Correct / wrong answer counts of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub score: i32,
    pub wrong: i32,
}

impl Tally {
    pub fn new(score: Option<i64>, wrong: Option<i64>) -> QuizResult<Self> {
        Ok(Self {
            score: Self::count("score", score)?,
            wrong: Self::count("wrong", wrong)?,
        })
    }

    fn count(field: &str, value: Option<i64>) -> QuizResult<i32> {
        let value = value.ok_or_else(|| QuizError::validation(format!("{field} is required")))?;
        if value < 0 {
            return Err(QuizError::validation(format!("{field} must not be negative")));
        }
        i32::try_from(value).map_err(|_| QuizError::validation(format!("{field} is too large")))
    }
}
