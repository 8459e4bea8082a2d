//! Login Player Use Case
//!
//! Checks credentials, hands out the account's token and loads its stats.

use std::sync::Arc;

use auth::application::{AuthenticateInput, AuthenticateUseCase, IssueTokenUseCase};
use auth::{Account, AuthConfig, AuthStore};

use crate::application::player_stats::{PlayerStats, PlayerStatsUseCase};
use crate::domain::repository::{ProfileRepository, ScoreRepository};
use crate::error::QuizResult;

#[derive(Debug)]
pub struct LoginPlayerOutput {
    pub account: Account,
    pub token: String,
    pub stats: PlayerStats,
}

pub struct LoginPlayerUseCase<A, Q>
where
    A: AuthStore,
    Q: ProfileRepository + ScoreRepository,
{
    auth_repo: Arc<A>,
    quiz_repo: Arc<Q>,
    auth_config: Arc<AuthConfig>,
}

impl<A, Q> LoginPlayerUseCase<A, Q>
where
    A: AuthStore,
    Q: ProfileRepository + ScoreRepository,
{
    pub fn new(auth_repo: Arc<A>, quiz_repo: Arc<Q>, auth_config: Arc<AuthConfig>) -> Self {
        Self {
            auth_repo,
            quiz_repo,
            auth_config,
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> QuizResult<LoginPlayerOutput> {
        let account = AuthenticateUseCase::new(
            self.auth_repo.clone(),
            self.auth_repo.clone(),
            self.auth_config.clone(),
        )
        .execute(input)
        .await?;

        let issued = IssueTokenUseCase::new(self.auth_repo.clone(), self.auth_config.clone())
            .execute(&account.account_id)
            .await?;

        let stats = PlayerStatsUseCase::new(self.quiz_repo.clone())
            .execute(&account.account_id)
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            token_reused = issued.reused,
            "Player logged in"
        );

        Ok(LoginPlayerOutput {
            account,
            token: issued.token,
            stats,
        })
    }
}
