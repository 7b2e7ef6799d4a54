use axum::{Router, routing::get};

use super::handlers::{
    activity_leaderboard, list_events, overall_leaderboard, team_leaderboard,
    team_overall_leaderboard,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/:event_id/leaderboard", get(overall_leaderboard))
        .route("/:event_id/teams/leaderboard", get(team_overall_leaderboard))
        .route(
            "/:event_id/activities/:activity_id/leaderboard",
            get(activity_leaderboard),
        )
        .route(
            "/:event_id/activities/:activity_id/teams/leaderboard",
            get(team_leaderboard),
        )
}
