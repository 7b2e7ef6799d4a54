use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::athlete::Sex;
use super::scoring_system::SystemSummary;

/// Raw performance value as submitted. Time events accept either seconds or a
/// time string such as "7:42.5"; everything else must be numeric.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// One performance to score, together with the athlete data the scoring
/// system may require.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoreRequest {
    pub scoring_system_id: String,
    pub value: RawValue,
    #[validate(range(min = 1, max = 10, message = "reps must be between 1 and 10"))]
    pub reps: Option<u32>,
    #[validate(range(min = 30.0, max = 250.0, message = "bodyweight must be between 30 and 250 kg"))]
    pub bodyweight: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(range(min = 10, max = 100, message = "age must be between 10 and 100"))]
    pub age: Option<u32>,
    pub sex: Option<Sex>,
}

/// Outcome of scoring a single performance. `percentile` is absent when no
/// demographic bucket covers the athlete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoredPerformance {
    pub score: f64,
    pub percentile: Option<f64>,
    pub scoring_system: SystemSummary,
}

/// A stored score row. One row exists per (user, activity, event); a
/// resubmission overwrites the row and clears `verified`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub user_id: Uuid,
    pub activity_id: Uuid,
    pub event_id: Option<Uuid>,
    pub raw_value: f64,
    pub calculated_score: f64,
    pub reps: Option<u32>,
    pub team_id: Option<Uuid>,
    pub verified: bool,
    pub submitted_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
