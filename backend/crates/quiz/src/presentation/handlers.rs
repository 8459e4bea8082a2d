//! HTTP Handlers

use std::sync::Arc;

use auth::application::{AuthenticateInput, RegisterInput, SignOutUseCase};
use auth::{AuthConfig, AuthStore};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::QuizStore;
use crate::application::{
    LeaderboardUseCase, LoginPlayerUseCase, PlayerStatsUseCase, RegisterPlayerUseCase,
    SubmitScoreInput, SubmitScoreUseCase,
};
use crate::error::QuizResult;
use crate::presentation::dto::{
    LeaderboardQuery, LoginRequest, LoginResponse, LoginUser, MessageResponse, ProfileResponse,
    RegisterRequest, RegisterResponse, ScoreResponse, SubmitScoreRequest, SubmitScoreResponse,
    UserSummary,
};
use crate::presentation::middleware::Caller;

/// Shared state for quiz handlers
#[derive(Clone)]
pub struct QuizAppState<A, Q>
where
    A: AuthStore,
    Q: QuizStore,
{
    pub auth_repo: Arc<A>,
    pub quiz_repo: Arc<Q>,
    pub auth_config: Arc<AuthConfig>,
}

/// GET /api/scores/
pub async fn list_scores<A, Q>(
    State(state): State<QuizAppState<A, Q>>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> QuizResult<Json<Vec<ScoreResponse>>>
where
    A: AuthStore,
    Q: QuizStore,
{
    let Query(query) = query?;

    let records = LeaderboardUseCase::new(state.quiz_repo.clone())
        .execute(query.difficulty.as_deref())
        .await?;

    Ok(Json(records.into_iter().map(ScoreResponse::from).collect()))
}

/// POST /api/scores/
pub async fn submit_score<A, Q>(
    State(state): State<QuizAppState<A, Q>>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> QuizResult<Json<SubmitScoreResponse>>
where
    A: AuthStore,
    Q: QuizStore,
{
    let Json(req) = payload?;

    let input = SubmitScoreInput {
        player_name: req.player_name,
        score: req.score,
        wrong: req.wrong,
        difficulty: req.difficulty,
    };

    let output = SubmitScoreUseCase::new(state.quiz_repo.clone())
        .execute(input, caller.account_id())
        .await?;

    Ok(Json(SubmitScoreResponse {
        message: "Score saved!",
        id: output.record.id,
    }))
}

/// POST /api/register/
pub async fn register<A, Q>(
    State(state): State<QuizAppState<A, Q>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> QuizResult<impl IntoResponse>
where
    A: AuthStore,
    Q: QuizStore,
{
    let Json(req) = payload?;

    let input = RegisterInput {
        user_name: req.username.unwrap_or_default(),
        email: req.email,
        password: req.password.unwrap_or_default(),
    };

    let output = RegisterPlayerUseCase::new(
        state.auth_repo.clone(),
        state.quiz_repo.clone(),
        state.auth_config.clone(),
    )
    .execute(input)
    .await?;

    let body = RegisterResponse {
        message: "User created successfully!",
        token: output.token,
        user: UserSummary::from(&output.account),
    };

    Ok((StatusCode::CREATED, Json(body)))
}

/// POST /api/login/
pub async fn login<A, Q>(
    State(state): State<QuizAppState<A, Q>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> QuizResult<Json<LoginResponse>>
where
    A: AuthStore,
    Q: QuizStore,
{
    let Json(req) = payload?;

    let input = AuthenticateInput {
        user_name: req.username.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = LoginPlayerUseCase::new(
        state.auth_repo.clone(),
        state.quiz_repo.clone(),
        state.auth_config.clone(),
    )
    .execute(input)
    .await?;

    Ok(Json(LoginResponse {
        message: "Login successful!",
        token: output.token,
        user: LoginUser::new(&output.account, &output.stats),
    }))
}

/// POST /api/logout/
pub async fn logout<A, Q>(
    State(state): State<QuizAppState<A, Q>>,
    Extension(caller): Extension<Caller>,
) -> QuizResult<Json<MessageResponse>>
where
    A: AuthStore,
    Q: QuizStore,
{
    let account = caller.require()?;

    SignOutUseCase::new(state.auth_repo.clone())
        .execute(&account.account_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully!",
    }))
}

/// GET /api/profile/
pub async fn profile<A, Q>(
    State(state): State<QuizAppState<A, Q>>,
    Extension(caller): Extension<Caller>,
) -> QuizResult<Json<ProfileResponse>>
where
    A: AuthStore,
    Q: QuizStore,
{
    let account = caller.require()?;

    let player = PlayerStatsUseCase::new(state.quiz_repo.clone())
        .execute(&account.account_id)
        .await?;

    Ok(Json(ProfileResponse::new(&account, &player)))
}
