//! Register Use Case
//!
//! Creates a new account with its password credential.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{account::Account, credential::Credential};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub user_name: String,
    pub email: Option<String>,
    pub password: String,
}

pub struct RegisterUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> RegisterUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<Account> {
        if input.user_name.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::InvalidInput(e.to_string()))?;
        let email = Email::new(input.email.unwrap_or_default())
            .map_err(|e| AuthError::InvalidInput(e.to_string()))?;

        if self.account_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let account = Account::new(user_name, email);
        let credential = Credential::new(account.account_id, password_hash);

        // Unique index decides concurrent registrations
        self.account_repo.create(&account, &credential).await?;

        tracing::info!(
            account_id = %account.account_id,
            user_name = %account.user_name,
            "Account registered"
        );

        Ok(account)
    }
}
