//! Caller Identity Middleware
//!
//! Resolves the `Authorization` header to an account once per request and
//! hands it to the handlers as a [`Caller`] extension.

use auth::application::CheckSessionUseCase;
use auth::{Account, AccountId, AuthError, AuthStore};
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::authorization::{Credentials, extract_credentials};

use crate::QuizStore;
use crate::error::QuizResult;
use crate::presentation::handlers::QuizAppState;

/// Identity of the request's sender; `None` for anonymous callers
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<Account>);

impl Caller {
    pub fn account_id(&self) -> Option<AccountId> {
        self.0.as_ref().map(|account| account.account_id)
    }

    /// For endpoints that need a logged-in caller
    pub fn require(self) -> QuizResult<Account> {
        self.0.ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}

/// Attach the caller to the request.
///
/// No header means anonymous. A header that does not resolve to a live
/// session is rejected on every route, anonymous-friendly ones included.
pub async fn resolve_caller<A, Q>(
    State(state): State<QuizAppState<A, Q>>,
    mut req: Request<Body>,
    next: Next,
) -> QuizResult<Response>
where
    A: AuthStore,
    Q: QuizStore,
{
    let caller = match extract_credentials(req.headers()) {
        Credentials::Absent => Caller(None),
        Credentials::Invalid => {
            tracing::debug!("Unusable Authorization header");
            return Err(AuthError::SessionInvalid.into());
        }
        Credentials::Token(token) => {
            let account = CheckSessionUseCase::new(
                state.auth_repo.clone(),
                state.auth_repo.clone(),
                state.auth_config.clone(),
            )
            .execute(&token)
            .await?;

            Caller(Some(account))
        }
    };

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}
