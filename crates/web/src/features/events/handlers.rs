use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use scoring::dto::leaderboards::{
    ActivityBoardResponse, BoardQuery, OverallBoardResponse, TeamBoardResponse,
    TeamOverallBoardResponse,
};
use uuid::Uuid;

use crate::catalog::EventDefinition;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List configured events", body = Vec<EventDefinition>)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = services::list_events(&state);

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/activities/{activity_id}/leaderboard",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        ("activity_id" = Uuid, Path, description = "Activity id")
    ),
    responses(
        (status = 200, description = "Ranked individual board for one activity", body = ActivityBoardResponse),
        (status = 404, description = "Event or activity not found")
    ),
    tag = "leaderboards"
)]
pub async fn activity_leaderboard(
    State(state): State<AppState>,
    Path((event_id, activity_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let board = services::activity_board(&state, event_id, activity_id).await?;

    Ok(Json(board).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/leaderboard",
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Ranked individual board across the whole event", body = OverallBoardResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "leaderboards"
)]
pub async fn overall_leaderboard(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let board = services::overall_board(&state, event_id).await?;

    Ok(Json(board).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/activities/{activity_id}/teams/leaderboard",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        ("activity_id" = Uuid, Path, description = "Activity id"),
        BoardQuery
    ),
    responses(
        (status = 200, description = "Ranked team board for one activity", body = TeamBoardResponse),
        (status = 404, description = "Event or activity not found")
    ),
    tag = "leaderboards"
)]
pub async fn team_leaderboard(
    State(state): State<AppState>,
    Path((event_id, activity_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<BoardQuery>,
) -> Result<Response, WebError> {
    let board = services::team_board(&state, event_id, activity_id, query.method).await?;

    Ok(Json(board).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/teams/leaderboard",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        BoardQuery
    ),
    responses(
        (status = 200, description = "Ranked team board across the whole event", body = TeamOverallBoardResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "leaderboards"
)]
pub async fn team_overall_leaderboard(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Query(query): Query<BoardQuery>,
) -> Result<Response, WebError> {
    let board = services::team_overall(&state, event_id, query.method).await?;

    Ok(Json(board).into_response())
}
