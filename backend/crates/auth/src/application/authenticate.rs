//! Authenticate Use Case
//!
//! Checks a user name / password pair and records the login.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct AuthenticateInput {
    pub user_name: String,
    pub password: String,
}

pub struct AuthenticateUseCase<A, C>
where
    A: AccountRepository,
    C: CredentialRepository,
{
    account_repo: Arc<A>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<A, C> AuthenticateUseCase<A, C>
where
    A: AccountRepository,
    C: CredentialRepository,
{
    pub fn new(account_repo: Arc<A>, credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            credential_repo,
            config,
        }
    }

    /// Every failure is reported as `InvalidCredentials` so callers cannot
    /// tell which part was wrong.
    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<Account> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let mut account = self
            .account_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.can_login() {
            tracing::warn!(account_id = %account.account_id, "Login attempt on inactive account");
            return Err(AuthError::InvalidCredentials);
        }

        let credential = self
            .credential_repo
            .find_by_account_id(&account.account_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Credential not found".to_string()))?;

        if !credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        account.record_login();
        self.account_repo.update_last_login(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account authenticated");

        Ok(account)
    }
}
