//! Team score reduction.
//!
//! Attribution goes by the team id stored on each score at submission time.
//! The roster is never consulted, so a member who left the team after
//! submitting still counts, and joining a team does not pull in earlier
//! personal scores.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::activity::Activity;
use crate::models::score::Score;
use crate::models::team::{Team, TeamOverallScore, TeamScore, TeamScoringMethod, WorkoutScore};

/// Reduces one team's submissions for one activity. Returns `None` when the
/// team has no submissions there; absence is not a zero.
pub fn team_score_for_activity(
    scores: &[Score],
    team: &Team,
    activity_id: Uuid,
    method: TeamScoringMethod,
) -> Option<TeamScore> {
    let mut member_scores: Vec<f64> = scores
        .iter()
        .filter(|score| score.team_id == Some(team.team_id) && score.activity_id == activity_id)
        .map(|score| score.calculated_score)
        .collect();
    if member_scores.is_empty() {
        return None;
    }
    member_scores.sort_by(|a, b| b.total_cmp(a));
    let total_score = reduce(&member_scores, method);
    Some(TeamScore {
        team_id: team.team_id,
        activity_id,
        total_score,
        member_scores,
        rank: None,
    })
}

/// Rolls per-activity team scores up into one overall standing using the same
/// reduction method at both levels. Activities without submissions contribute
/// nothing; a team with no submissions at all has no standing.
pub fn team_overall_score(
    scores: &[Score],
    team: &Team,
    activities: &[Activity],
    method: TeamScoringMethod,
) -> Option<TeamOverallScore> {
    let mut workout_scores = BTreeMap::new();
    let mut activity_totals = Vec::new();
    for activity in activities {
        if let Some(team_score) = team_score_for_activity(scores, team, activity.activity_id, method)
        {
            workout_scores.insert(
                activity.activity_id,
                WorkoutScore {
                    score: team_score.total_score,
                    raw_value: None,
                    reps: None,
                    rank: None,
                },
            );
            activity_totals.push(team_score.total_score);
        }
    }
    if activity_totals.is_empty() {
        return None;
    }
    let total_score = reduce(&activity_totals, method);
    Some(TeamOverallScore {
        team_id: team.team_id,
        total_score,
        workout_scores,
        rank: None,
    })
}

/// `values` must be non-empty; both callers guarantee it.
fn reduce(values: &[f64], method: TeamScoringMethod) -> f64 {
    match method {
        TeamScoringMethod::Sum => values.iter().sum(),
        TeamScoringMethod::Average => values.iter().sum::<f64>() / values.len() as f64,
        TeamScoringMethod::Best => values.iter().copied().fold(f64::MIN, f64::max),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn score_row(team_id: Option<Uuid>, activity_id: Uuid, calculated_score: f64) -> Score {
        let now = Utc::now().naive_utc();
        Score {
            user_id: Uuid::new_v4(),
            activity_id,
            event_id: None,
            raw_value: calculated_score,
            calculated_score,
            reps: None,
            team_id,
            verified: false,
            submitted_at: now,
            updated_at: now,
        }
    }

    fn team(team_id: Uuid) -> Team {
        Team {
            team_id,
            event_id: Uuid::new_v4(),
            name: "Crew".to_string(),
        }
    }

    #[test]
    fn test_reduction_methods() {
        let team_id = Uuid::new_v4();
        let activity = Uuid::new_v4();
        let scores = vec![
            score_row(Some(team_id), activity, 80.0),
            score_row(Some(team_id), activity, 100.0),
            score_row(Some(team_id), activity, 60.0),
        ];
        let team = team(team_id);

        let sum = team_score_for_activity(&scores, &team, activity, TeamScoringMethod::Sum).unwrap();
        assert!(approx_eq(sum.total_score, 240.0));
        assert_eq!(sum.member_scores, vec![100.0, 80.0, 60.0]);

        let average =
            team_score_for_activity(&scores, &team, activity, TeamScoringMethod::Average).unwrap();
        assert!(approx_eq(average.total_score, 80.0));

        let best =
            team_score_for_activity(&scores, &team, activity, TeamScoringMethod::Best).unwrap();
        assert!(approx_eq(best.total_score, 100.0));
    }

    #[test]
    fn test_no_submissions_means_no_score() {
        let team = team(Uuid::new_v4());
        let activity = Uuid::new_v4();
        let other_team_scores = vec![score_row(Some(Uuid::new_v4()), activity, 90.0)];
        assert!(
            team_score_for_activity(&other_team_scores, &team, activity, TeamScoringMethod::Sum)
                .is_none()
        );
        assert!(team_score_for_activity(&[], &team, activity, TeamScoringMethod::Sum).is_none());
    }

    #[test]
    fn test_stored_team_id_beats_the_roster() {
        // the member left the team, their submission keeps its attribution
        let team_id = Uuid::new_v4();
        let activity = Uuid::new_v4();
        let scores = vec![score_row(Some(team_id), activity, 70.0)];
        let result =
            team_score_for_activity(&scores, &team(team_id), activity, TeamScoringMethod::Sum)
                .unwrap();
        assert!(approx_eq(result.total_score, 70.0));

        // unattributed personal score never counts for any team
        let personal = vec![score_row(None, activity, 95.0)];
        assert!(
            team_score_for_activity(&personal, &team(team_id), activity, TeamScoringMethod::Sum)
                .is_none()
        );
    }

    #[test]
    fn test_overall_skips_activities_without_submissions() {
        let team_id = Uuid::new_v4();
        let done = Uuid::new_v4();
        let skipped = Uuid::new_v4();
        let activities = vec![
            Activity {
                activity_id: done,
                name: "Bench".to_string(),
                scoring_system_id: "bench".to_string(),
            },
            Activity {
                activity_id: skipped,
                name: "Row".to_string(),
                scoring_system_id: "row_2km".to_string(),
            },
        ];
        let scores = vec![score_row(Some(team_id), done, 50.0)];
        let team = team(team_id);

        let sum = team_overall_score(&scores, &team, &activities, TeamScoringMethod::Sum).unwrap();
        assert!(approx_eq(sum.total_score, 50.0));
        assert_eq!(sum.workout_scores.len(), 1);
        assert!(sum.workout_scores.contains_key(&done));

        // the missing activity must not drag an average toward zero
        let average =
            team_overall_score(&scores, &team, &activities, TeamScoringMethod::Average).unwrap();
        assert!(approx_eq(average.total_score, 50.0));
    }

    #[test]
    fn test_overall_best_takes_best_activity() {
        let team_id = Uuid::new_v4();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let activities = vec![
            Activity {
                activity_id: first,
                name: "Squat".to_string(),
                scoring_system_id: "squat".to_string(),
            },
            Activity {
                activity_id: second,
                name: "Ski".to_string(),
                scoring_system_id: "ski_500m".to_string(),
            },
        ];
        let scores = vec![
            score_row(Some(team_id), first, 64.0),
            score_row(Some(team_id), first, 58.0),
            score_row(Some(team_id), second, 71.0),
        ];
        let result =
            team_overall_score(&scores, &team(team_id), &activities, TeamScoringMethod::Best)
                .unwrap();
        assert!(approx_eq(result.total_score, 71.0));
    }

    #[test]
    fn test_team_with_no_submissions_has_no_overall() {
        let activities = vec![Activity {
            activity_id: Uuid::new_v4(),
            name: "Bench".to_string(),
            scoring_system_id: "bench".to_string(),
        }];
        assert!(
            team_overall_score(&[], &team(Uuid::new_v4()), &activities, TeamScoringMethod::Sum)
                .is_none()
        );
    }
}
