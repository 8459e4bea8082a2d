//! Application Layer
//!
//! Use cases. Account operations are delegated to the `auth` crate.

pub mod ensure_profile;
pub mod leaderboard;
pub mod login_player;
pub mod player_stats;
pub mod register_player;
pub mod submit_score;

// Re-exports
pub use ensure_profile::EnsureProfileUseCase;
pub use leaderboard::{LEADERBOARD_SIZE, LeaderboardUseCase};
pub use login_player::{LoginPlayerOutput, LoginPlayerUseCase};
pub use player_stats::{PlayerStats, PlayerStatsUseCase};
pub use register_player::{RegisterPlayerOutput, RegisterPlayerUseCase};
pub use submit_score::{SubmitScoreInput, SubmitScoreOutput, SubmitScoreUseCase};
