//! Quiz Router
//!
//! Every route is registered with and without a trailing slash.

use std::sync::Arc;

use auth::{AuthConfig, AuthStore, PgAuthRepository};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::QuizStore;
use crate::infra::postgres::PgQuizRepository;
use crate::presentation::handlers::{self, QuizAppState};
use crate::presentation::middleware::resolve_caller;

/// Create the quiz router with PostgreSQL repositories
pub fn quiz_router(
    auth_repo: PgAuthRepository,
    quiz_repo: PgQuizRepository,
    config: AuthConfig,
) -> Router {
    quiz_router_generic(auth_repo, quiz_repo, config)
}

/// Create a generic quiz router for any repository implementation
pub fn quiz_router_generic<A, Q>(auth_repo: A, quiz_repo: Q, config: AuthConfig) -> Router
where
    A: AuthStore,
    Q: QuizStore,
{
    let state = QuizAppState {
        auth_repo: Arc::new(auth_repo),
        quiz_repo: Arc::new(quiz_repo),
        auth_config: Arc::new(config),
    };

    let scores = get(handlers::list_scores::<A, Q>).post(handlers::submit_score::<A, Q>);
    let register = post(handlers::register::<A, Q>);
    let login = post(handlers::login::<A, Q>);
    let logout = post(handlers::logout::<A, Q>);
    let profile = get(handlers::profile::<A, Q>);

    Router::new()
        .route("/scores", scores.clone())
        .route("/scores/", scores)
        .route("/register", register.clone())
        .route("/register/", register)
        .route("/login", login.clone())
        .route("/login/", login)
        .route("/logout", logout.clone())
        .route("/logout/", logout)
        .route("/profile", profile.clone())
        .route("/profile/", profile)
        .layer(from_fn_with_state(state.clone(), resolve_caller::<A, Q>))
        .with_state(state)
}
