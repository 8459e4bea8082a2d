//! In-Memory Repository
//!
//! Implements every auth repository trait over plain maps. Used by unit tests
//! here and, through the `test-util` feature, by the quiz crate's tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entity::{account::Account, auth_session::AuthSession, credential::Credential};
use crate::domain::repository::{AccountRepository, AuthSessionRepository, CredentialRepository};
use crate::domain::value_object::{AccountId, SessionId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    accounts: HashMap<AccountId, Account>,
    credentials: HashMap<AccountId, Credential>,
    sessions: HashMap<SessionId, AuthSession>,
}

#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    state: Arc<Mutex<State>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_active(&self, account_id: &AccountId, is_active: bool) {
        if let Some(account) = self.state.lock().await.accounts.get_mut(account_id) {
            account.is_active = is_active;
        }
    }

    pub async fn account_count(&self) -> usize {
        self.state.lock().await.accounts.len()
    }

    pub async fn session_count(&self, account_id: &AccountId) -> usize {
        self.state
            .lock()
            .await
            .sessions
            .values()
            .filter(|s| &s.account_id == account_id)
            .count()
    }
}

impl AccountRepository for MemoryAuthRepository {
    async fn create(&self, account: &Account, credential: &Credential) -> AuthResult<()> {
        let mut state = self.state.lock().await;

        if state
            .accounts
            .values()
            .any(|a| a.user_name == account.user_name)
        {
            return Err(AuthError::UserNameTaken);
        }

        state.accounts.insert(account.account_id, account.clone());
        state
            .credentials
            .insert(credential.account_id, credential.clone());

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        Ok(self.state.lock().await.accounts.get(account_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Account>> {
        Ok(self
            .state
            .lock()
            .await
            .accounts
            .values()
            .find(|a| &a.user_name == user_name)
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self
            .state
            .lock()
            .await
            .accounts
            .values()
            .any(|a| &a.user_name == user_name))
    }

    async fn update_last_login(&self, account: &Account) -> AuthResult<()> {
        if let Some(stored) = self
            .state
            .lock()
            .await
            .accounts
            .get_mut(&account.account_id)
        {
            stored.last_login_at = account.last_login_at;
        }
        Ok(())
    }
}

impl CredentialRepository for MemoryAuthRepository {
    async fn find_by_account_id(&self, account_id: &AccountId) -> AuthResult<Option<Credential>> {
        Ok(self.state.lock().await.credentials.get(account_id).cloned())
    }
}

impl AuthSessionRepository for MemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.state
            .lock()
            .await
            .sessions
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>> {
        Ok(self.state.lock().await.sessions.get(session_id).cloned())
    }

    async fn find_latest_for_account(
        &self,
        account_id: &AccountId,
    ) -> AuthResult<Option<AuthSession>> {
        let now = Utc::now();
        Ok(self
            .state
            .lock()
            .await
            .sessions
            .values()
            .filter(|s| &s.account_id == account_id && !s.is_expired_at(now))
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()> {
        self.state.lock().await.sessions.remove(session_id);
        Ok(())
    }

    async fn delete_all_for_account(&self, account_id: &AccountId) -> AuthResult<u64> {
        let mut state = self.state.lock().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| &s.account_id != account_id);
        Ok((before - state.sessions.len()) as u64)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut state = self.state.lock().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| !s.is_expired_at(now));
        Ok((before - state.sessions.len()) as u64)
    }
}
