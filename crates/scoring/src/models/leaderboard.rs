use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::team::WorkoutScore;

/// One athlete's row on a single-activity board.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndividualStanding {
    pub user_id: Uuid,
    pub score: f64,
    pub raw_value: f64,
    pub reps: Option<u32>,
    pub verified: bool,
    pub rank: Option<u32>,
}

/// One athlete's row on an event-wide board. `total_score` is the sum of the
/// athlete's activity scores; activities without a submission are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OverallStanding {
    pub user_id: Uuid,
    pub total_score: f64,
    pub workout_scores: BTreeMap<Uuid, WorkoutScore>,
    pub rank: Option<u32>,
}
