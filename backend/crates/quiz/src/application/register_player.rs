//! Register Player Use Case
//!
//! Account registration plus the player's empty profile and first token.

use std::sync::Arc;

use auth::application::{IssueTokenUseCase, RegisterInput, RegisterUseCase};
use auth::{Account, AuthConfig, AuthStore};

use crate::application::ensure_profile::EnsureProfileUseCase;
use crate::domain::repository::ProfileRepository;
use crate::error::QuizResult;

#[derive(Debug)]
pub struct RegisterPlayerOutput {
    pub account: Account,
    pub token: String,
}

pub struct RegisterPlayerUseCase<A, Q>
where
    A: AuthStore,
    Q: ProfileRepository,
{
    auth_repo: Arc<A>,
    quiz_repo: Arc<Q>,
    auth_config: Arc<AuthConfig>,
}

impl<A, Q> RegisterPlayerUseCase<A, Q>
where
    A: AuthStore,
    Q: ProfileRepository,
{
    pub fn new(auth_repo: Arc<A>, quiz_repo: Arc<Q>, auth_config: Arc<AuthConfig>) -> Self {
        Self {
            auth_repo,
            quiz_repo,
            auth_config,
        }
    }

    /// A taken user name fails before anything is created
    pub async fn execute(&self, input: RegisterInput) -> QuizResult<RegisterPlayerOutput> {
        let account = RegisterUseCase::new(self.auth_repo.clone(), self.auth_config.clone())
            .execute(input)
            .await?;

        EnsureProfileUseCase::new(self.quiz_repo.clone())
            .execute(&account.account_id)
            .await?;

        let issued = IssueTokenUseCase::new(self.auth_repo.clone(), self.auth_config.clone())
            .execute(&account.account_id)
            .await?;

        Ok(RegisterPlayerOutput {
            account,
            token: issued.token,
        })
    }
}
