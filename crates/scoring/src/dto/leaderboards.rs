use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::leaderboard::{IndividualStanding, OverallStanding};
use crate::models::team::{TeamOverallScore, TeamScore, TeamScoringMethod};

/// Optional override of the event's configured team reduction method.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BoardQuery {
    pub method: Option<TeamScoringMethod>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityBoardResponse {
    pub event_id: Uuid,
    pub activity_id: Uuid,
    pub entries: Vec<IndividualStanding>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OverallBoardResponse {
    pub event_id: Uuid,
    pub entries: Vec<OverallStanding>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamBoardResponse {
    pub event_id: Uuid,
    pub activity_id: Uuid,
    pub method: TeamScoringMethod,
    pub entries: Vec<TeamScore>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamOverallBoardResponse {
    pub event_id: Uuid,
    pub method: TeamScoringMethod,
    pub entries: Vec<TeamOverallScore>,
}
