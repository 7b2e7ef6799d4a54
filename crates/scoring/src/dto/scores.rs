use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::athlete::Sex;
use crate::models::score::{RawValue, Score, ScoreRequest, ScoredPerformance};

/// Submission of one result into an activity, with optional event and team
/// attribution. Without an event id the score is a personal record.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub user_id: Uuid,
    pub activity_id: Uuid,
    pub event_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
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

impl SubmitScoreRequest {
    /// The engine-facing part of the submission.
    pub fn to_score_request(&self) -> ScoreRequest {
        ScoreRequest {
            scoring_system_id: self.scoring_system_id.clone(),
            value: self.value.clone(),
            reps: self.reps,
            bodyweight: self.bodyweight,
            date_of_birth: self.date_of_birth,
            age: self.age,
            sex: self.sex,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitScoreResponse {
    pub score: Score,
    pub performance: ScoredPerformance,
}

/// Verification by an event official. The bodyweight measured at the check
/// replaces the submitted one and the score is recomputed from the stored
/// raw value before the row is marked verified.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VerifyScoreRequest {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub activity_id: Uuid,
    #[validate(range(min = 30.0, max = 250.0, message = "bodyweight must be between 30 and 250 kg"))]
    pub bodyweight: f64,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(range(min = 10, max = 100, message = "age must be between 10 and 100"))]
    pub age: Option<u32>,
    pub sex: Option<Sex>,
}
