//! Issue Token Use Case
//!
//! Hands out the session token for an account. An existing live session is
//! reused, so repeated logins return the same token until logout.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::AccountId;
use crate::error::AuthResult;

pub struct IssuedToken {
    pub token: String,
    pub session: AuthSession,
    /// Whether an existing session was reused
    pub reused: bool,
}

pub struct IssueTokenUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> IssueTokenUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, account_id: &AccountId) -> AuthResult<IssuedToken> {
        let signer = self.config.signer();

        if let Some(session) = self.session_repo.find_latest_for_account(account_id).await? {
            return Ok(IssuedToken {
                token: signer.sign(&session.session_id.to_string()),
                session,
                reused: true,
            });
        }

        let session = AuthSession::new(*account_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        tracing::info!(
            account_id = %account_id,
            session_id = %session.session_id,
            "Session created"
        );

        Ok(IssuedToken {
            token: signer.sign(&session.session_id.to_string()),
            session,
            reused: false,
        })
    }
}
