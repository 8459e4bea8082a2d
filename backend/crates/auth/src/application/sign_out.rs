//! Sign Out Use Case
//!
//! Revokes every session token of an account.

use std::sync::Arc;

use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::AccountId;
use crate::error::AuthResult;

pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, account_id: &AccountId) -> AuthResult<u64> {
        let deleted = self.session_repo.delete_all_for_account(account_id).await?;

        tracing::info!(
            account_id = %account_id,
            deleted = deleted,
            "Account signed out from all sessions"
        );

        Ok(deleted)
    }
}
