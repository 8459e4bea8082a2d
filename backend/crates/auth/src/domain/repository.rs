//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::{account::Account, auth_session::AuthSession, credential::Credential};
use crate::domain::value_object::{AccountId, SessionId, user_name::UserName};
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist an account together with its credential, atomically.
    ///
    /// Fails with `AuthError::UserNameTaken` if the user name is already in use,
    /// including when a concurrent registration wins the race.
    async fn create(&self, account: &Account, credential: &Credential) -> AuthResult<()>;

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Exact, case-sensitive lookup
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Account>>;

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Store `account.last_login_at`
    async fn update_last_login(&self, account: &Account) -> AuthResult<()>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    async fn find_by_account_id(&self, account_id: &AccountId) -> AuthResult<Option<Credential>>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find a session by ID, expired or not
    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>>;

    /// Most recently created unexpired session of an account
    async fn find_latest_for_account(
        &self,
        account_id: &AccountId,
    ) -> AuthResult<Option<AuthSession>>;

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()>;

    /// Delete every session of an account, returning how many were removed
    async fn delete_all_for_account(&self, account_id: &AccountId) -> AuthResult<u64>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
