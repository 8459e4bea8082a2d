//! Check Session Use Case
//!
//! Resolves a presented token to the account it belongs to.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountRepository, AuthSessionRepository};
use crate::domain::value_object::SessionId;
use crate::error::{AuthError, AuthResult};

pub struct CheckSessionUseCase<S, A>
where
    S: AuthSessionRepository,
    A: AccountRepository,
{
    session_repo: Arc<S>,
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<S, A> CheckSessionUseCase<S, A>
where
    S: AuthSessionRepository,
    A: AccountRepository,
{
    pub fn new(session_repo: Arc<S>, account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            account_repo,
            config,
        }
    }

    /// Fails with `SessionInvalid` for a forged, unknown or expired token, or
    /// when the owning account is gone or inactive.
    pub async fn execute(&self, token: &str) -> AuthResult<Account> {
        let session_id = self.parse_session_token(token)?;

        let session = self
            .session_repo
            .find_by_id(&session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(&session_id).await?;
            tracing::debug!(session_id = %session_id, "Expired session removed");
            return Err(AuthError::SessionInvalid);
        }

        let account = self
            .account_repo
            .find_by_id(&session.account_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if !account.can_login() {
            return Err(AuthError::SessionInvalid);
        }

        Ok(account)
    }

    /// Verify the signature, then parse the session UUID
    fn parse_session_token(&self, token: &str) -> AuthResult<SessionId> {
        let payload = self
            .config
            .signer()
            .verify(token)
            .map_err(|_| AuthError::SessionInvalid)?;

        payload.parse().map_err(|_| AuthError::SessionInvalid)
    }
}
