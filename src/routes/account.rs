use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::account::{
        CredentialsRequest, LoginResponse, MessageResponse, ScoreRequest, ScoreResponse,
    },
    error::AppError,
    services::account_service,
    state::SharedState,
};

/// Routes handling accounts and score submission.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/api/score", post(submit_score))
}

/// Create a new account.
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "account",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Signup outcome; `success` is false for missing fields or a taken username", body = MessageResponse),
        (status = 500, description = "User file could not be written", body = MessageResponse)
    )
)]
pub async fn signup(
    State(state): State<SharedState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = account_service::signup(&state, payload).await?;
    Ok(Json(response))
}

/// Check credentials and return the stored profile.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "account",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Logged in; invalid credentials are reported as `{success: false, message}`", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = account_service::login(&state, payload).await?;
    Ok(Json(response))
}

/// Submit the score of a finished game.
#[utoipa::path(
    post,
    path = "/api/score",
    tag = "account",
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Whether the best score changed", body = ScoreResponse),
        (status = 500, description = "User file could not be written", body = MessageResponse)
    )
)]
pub async fn submit_score(
    State(state): State<SharedState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let response = account_service::submit_score(&state, payload).await?;
    Ok(Json(response))
}
