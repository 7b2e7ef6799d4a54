//! Board assembly: collect the relevant scores, reduce, rank.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::activity::Activity;
use crate::models::leaderboard::{IndividualStanding, OverallStanding};
use crate::models::score::Score;
use crate::models::team::{Team, TeamOverallScore, TeamScore, TeamScoringMethod, WorkoutScore};

use super::ranking::assign_ranks;
use super::team_scoring::{team_overall_score, team_score_for_activity};

/// Individual board for one activity. `event_id` of `None` selects personal
/// scores outside any event.
pub fn individual_activity_board(
    scores: &[Score],
    event_id: Option<Uuid>,
    activity_id: Uuid,
) -> Vec<IndividualStanding> {
    let mut entries: Vec<IndividualStanding> = scores
        .iter()
        .filter(|score| score.event_id == event_id && score.activity_id == activity_id)
        .map(|score| IndividualStanding {
            user_id: score.user_id,
            score: score.calculated_score,
            raw_value: score.raw_value,
            reps: score.reps,
            verified: score.verified,
            rank: None,
        })
        .collect();
    assign_ranks(&mut entries);
    entries
}

/// Individual board across an event. Totals are sums of activity scores;
/// each carried workout score keeps its rank from the per-activity board.
pub fn individual_overall_board(
    scores: &[Score],
    event_id: Option<Uuid>,
    activities: &[Activity],
) -> Vec<OverallStanding> {
    let mut standings: BTreeMap<Uuid, OverallStanding> = BTreeMap::new();
    for activity in activities {
        for entry in individual_activity_board(scores, event_id, activity.activity_id) {
            let standing = standings
                .entry(entry.user_id)
                .or_insert_with(|| OverallStanding {
                    user_id: entry.user_id,
                    total_score: 0.0,
                    workout_scores: BTreeMap::new(),
                    rank: None,
                });
            standing.total_score += entry.score;
            standing.workout_scores.insert(
                activity.activity_id,
                WorkoutScore {
                    score: entry.score,
                    raw_value: Some(entry.raw_value),
                    reps: entry.reps,
                    rank: entry.rank,
                },
            );
        }
    }
    let mut entries: Vec<OverallStanding> = standings.into_values().collect();
    assign_ranks(&mut entries);
    entries
}

/// Team board for one activity. Teams without submissions are absent, not
/// ranked last.
pub fn team_activity_board(
    scores: &[Score],
    teams: &[Team],
    activity_id: Uuid,
    method: TeamScoringMethod,
) -> Vec<TeamScore> {
    let mut entries: Vec<TeamScore> = teams
        .iter()
        .filter_map(|team| team_score_for_activity(scores, team, activity_id, method))
        .collect();
    assign_ranks(&mut entries);
    entries
}

/// Team board across an event, with each carried workout score annotated with
/// the team's rank on that activity's board.
pub fn team_overall_board(
    scores: &[Score],
    teams: &[Team],
    activities: &[Activity],
    method: TeamScoringMethod,
) -> Vec<TeamOverallScore> {
    let mut entries: Vec<TeamOverallScore> = teams
        .iter()
        .filter_map(|team| team_overall_score(scores, team, activities, method))
        .collect();
    for activity in activities {
        for ranked in team_activity_board(scores, teams, activity.activity_id, method) {
            if let Some(entry) = entries.iter_mut().find(|entry| entry.team_id == ranked.team_id)
                && let Some(workout) = entry.workout_scores.get_mut(&ranked.activity_id)
            {
                workout.rank = ranked.rank;
            }
        }
    }
    assign_ranks(&mut entries);
    entries
}
