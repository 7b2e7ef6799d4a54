use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::dto::scores::{SubmitScoreRequest, SubmitScoreResponse, VerifyScoreRequest};
use scoring::{Score, ScoreRequest, ScoredPerformance};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/scores/calculate",
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Score calculated without storing anything", body = ScoredPerformance),
        (status = 400, description = "Validation error or unknown scoring system")
    ),
    tag = "scores"
)]
pub async fn calculate_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let performance = state.engine.score(&req)?;

    Ok(Json(performance).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score calculated and stored", body = SubmitScoreResponse),
        (status = 400, description = "Validation error, unknown scoring system or unknown event")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(state): State<AppState>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let response = services::submit_score(&state, &req).await?;

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores/verify",
    request_body = VerifyScoreRequest,
    responses(
        (status = 200, description = "Stored score recomputed with the checked bodyweight and marked verified", body = Score),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No stored score for this athlete and activity")
    ),
    tag = "scores"
)]
pub async fn verify_score(
    State(state): State<AppState>,
    Json(req): Json<VerifyScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let score = services::verify_score(&state, &req).await?;

    Ok(Json(score).into_response())
}
