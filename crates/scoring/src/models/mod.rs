pub mod activity;
pub mod athlete;
pub mod leaderboard;
pub mod score;
pub mod scoring_system;
pub mod team;

pub use activity::Activity;
pub use athlete::{AgeGroup, DEFAULT_AGE, Sex, age_on};
pub use leaderboard::{IndividualStanding, OverallStanding};
pub use score::{RawValue, Score, ScoreRequest, ScoredPerformance};
pub use scoring_system::{Calculation, InputType, ScoringCategory, ScoringSystem, SystemSummary};
pub use team::{Team, TeamOverallScore, TeamScore, TeamScoringMethod, WorkoutScore};
