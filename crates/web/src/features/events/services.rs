//! Board assembly against the stored scores of an event.

use scoring::TeamScoringMethod;
use scoring::dto::leaderboards::{
    ActivityBoardResponse, OverallBoardResponse, TeamBoardResponse, TeamOverallBoardResponse,
};
use scoring::services::leaderboard::{
    individual_activity_board, individual_overall_board, team_activity_board, team_overall_board,
};
use uuid::Uuid;

use crate::catalog::EventDefinition;
use crate::error::{WebError, WebResult};
use crate::state::AppState;

pub fn list_events(state: &AppState) -> Vec<EventDefinition> {
    state.catalog.events().to_vec()
}

pub async fn activity_board(
    state: &AppState,
    event_id: Uuid,
    activity_id: Uuid,
) -> WebResult<ActivityBoardResponse> {
    let event = find_event(state, event_id)?;
    event.activity(activity_id).ok_or(WebError::NotFound)?;

    let scores = state.scores.for_event(Some(event_id)).await;
    Ok(ActivityBoardResponse {
        event_id,
        activity_id,
        entries: individual_activity_board(&scores, Some(event_id), activity_id),
    })
}

pub async fn overall_board(state: &AppState, event_id: Uuid) -> WebResult<OverallBoardResponse> {
    let event = find_event(state, event_id)?;

    let scores = state.scores.for_event(Some(event_id)).await;
    Ok(OverallBoardResponse {
        event_id,
        entries: individual_overall_board(&scores, Some(event_id), &event.activities),
    })
}

pub async fn team_board(
    state: &AppState,
    event_id: Uuid,
    activity_id: Uuid,
    method: Option<TeamScoringMethod>,
) -> WebResult<TeamBoardResponse> {
    let event = find_event(state, event_id)?;
    event.activity(activity_id).ok_or(WebError::NotFound)?;
    let method = method.unwrap_or(event.scoring_method);

    let scores = state.scores.for_event(Some(event_id)).await;
    Ok(TeamBoardResponse {
        event_id,
        activity_id,
        method,
        entries: team_activity_board(&scores, &event.board_teams(), activity_id, method),
    })
}

pub async fn team_overall(
    state: &AppState,
    event_id: Uuid,
    method: Option<TeamScoringMethod>,
) -> WebResult<TeamOverallBoardResponse> {
    let event = find_event(state, event_id)?;
    let method = method.unwrap_or(event.scoring_method);

    let scores = state.scores.for_event(Some(event_id)).await;
    Ok(TeamOverallBoardResponse {
        event_id,
        method,
        entries: team_overall_board(&scores, &event.board_teams(), &event.activities, method),
    })
}

fn find_event(state: &AppState, event_id: Uuid) -> WebResult<&EventDefinition> {
    state.catalog.find(event_id).ok_or(WebError::NotFound)
}
