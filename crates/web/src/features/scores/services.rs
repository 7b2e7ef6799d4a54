//! Submission orchestration: score, attribute, store.

use scoring::dto::scores::{SubmitScoreRequest, SubmitScoreResponse, VerifyScoreRequest};
use scoring::{RawValue, Score, ScoreRequest};

use crate::error::{WebError, WebResult};
use crate::state::AppState;
use crate::store::NewScore;

/// Scores a submission and stores the result. A submission without an
/// explicit team falls back to the event roster.
pub async fn submit_score(
    state: &AppState,
    req: &SubmitScoreRequest,
) -> WebResult<SubmitScoreResponse> {
    if let Some(event_id) = req.event_id {
        let event = state
            .catalog
            .find(event_id)
            .ok_or_else(|| WebError::BadRequest(format!("Unknown event: {event_id}")))?;
        let activity = event.activity(req.activity_id).ok_or_else(|| {
            WebError::BadRequest(format!(
                "Activity {} is not part of {}",
                req.activity_id, event.name
            ))
        })?;
        if activity.scoring_system_id != req.scoring_system_id {
            return Err(WebError::BadRequest(format!(
                "{} is scored with {}, not {}",
                activity.name, activity.scoring_system_id, req.scoring_system_id
            )));
        }
    }

    let performance = state.engine.score(&req.to_score_request())?;
    let raw_value = state
        .engine
        .canonical_value(&req.scoring_system_id, &req.value)?;

    let team_id = req.team_id.or_else(|| {
        req.event_id
            .and_then(|event_id| state.catalog.find(event_id))
            .and_then(|event| event.roster_team_for(req.user_id))
    });

    let score = state
        .scores
        .upsert(NewScore {
            user_id: req.user_id,
            activity_id: req.activity_id,
            event_id: req.event_id,
            raw_value,
            calculated_score: performance.score,
            reps: req.reps,
            team_id,
        })
        .await;

    Ok(SubmitScoreResponse { score, performance })
}

/// Recomputes a stored score with the bodyweight measured at the
/// verification check and marks the row verified.
pub async fn verify_score(state: &AppState, req: &VerifyScoreRequest) -> WebResult<Score> {
    let event = state.catalog.find(req.event_id).ok_or(WebError::NotFound)?;
    let activity = event.activity(req.activity_id).ok_or(WebError::NotFound)?;

    let key = (req.user_id, req.activity_id, Some(req.event_id));
    let stored = state.scores.get(&key).await.ok_or(WebError::NotFound)?;

    let request = ScoreRequest {
        scoring_system_id: activity.scoring_system_id.clone(),
        value: RawValue::Number(stored.raw_value),
        reps: stored.reps,
        bodyweight: Some(req.bodyweight),
        date_of_birth: req.date_of_birth,
        age: req.age,
        sex: req.sex,
    };
    let performance = state.engine.score(&request)?;

    state
        .scores
        .verify(&key, performance.score)
        .await
        .ok_or(WebError::NotFound)
}
