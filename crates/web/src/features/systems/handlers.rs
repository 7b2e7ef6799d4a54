use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use scoring::dto::systems::SystemFilter;
use scoring::{ScoringSystem, SystemSummary};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/systems",
    params(SystemFilter),
    responses(
        (status = 200, description = "List registered scoring systems", body = Vec<SystemSummary>)
    ),
    tag = "systems"
)]
pub async fn list_systems(
    State(state): State<AppState>,
    Query(filter): Query<SystemFilter>,
) -> Result<Response, WebError> {
    let systems = services::list_systems(&state, &filter);

    Ok(Json(systems).into_response())
}

#[utoipa::path(
    get,
    path = "/api/systems/{id}",
    params(
        ("id" = String, Path, description = "Scoring system id")
    ),
    responses(
        (status = 200, description = "Scoring system found", body = ScoringSystem),
        (status = 404, description = "Scoring system not found")
    ),
    tag = "systems"
)]
pub async fn get_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let system = services::get_system(&state, &id).ok_or(WebError::NotFound)?;

    Ok(Json(system).into_response())
}
