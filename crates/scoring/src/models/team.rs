use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// How member scores are reduced to one team score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamScoringMethod {
    #[default]
    Sum,
    Average,
    Best,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
}

/// A team's result for one activity. `member_scores` is sorted best-first.
/// `rank` is filled in when the score is placed on a board.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamScore {
    pub team_id: Uuid,
    pub activity_id: Uuid,
    pub total_score: f64,
    pub member_scores: Vec<f64>,
    pub rank: Option<u32>,
}

/// Per-activity entry inside an overall standing. Raw value and reps are
/// present for individual standings and absent for team standings, where the
/// score is already a reduction over several members.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutScore {
    pub score: f64,
    pub raw_value: Option<f64>,
    pub reps: Option<u32>,
    pub rank: Option<u32>,
}

/// A team's standing across every activity it has scores for. Activities the
/// team never submitted to are left out of `workout_scores` and contribute
/// nothing to `total_score`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamOverallScore {
    pub team_id: Uuid,
    pub total_score: f64,
    pub workout_scores: BTreeMap<Uuid, WorkoutScore>,
    pub rank: Option<u32>,
}
