//! Normalized scoring for mixed-modality fitness competitions.
//!
//! Raw results (a lifted weight, a rowed time, a distance) are converted to
//! comparable scores so a masters lifter and a junior rower can stand on the
//! same board. The [`ScoreEngine`] resolves each submission against a
//! scoring system, prepares the comparable quantity and defers normalization
//! to a pluggable [`ScoringModel`]. Services on top reduce team scores and
//! assemble ranked boards.

pub mod dto;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod model;
pub mod models;
pub mod registry;
pub mod services;
pub mod standards;
pub mod time;

pub use engine::ScoreEngine;
pub use error::{Result, ScoringError};
pub use model::{ErgMachine, Normalized, ScoringModel, StandardsModel};
pub use registry::ScoringSystemRegistry;
pub use standards::{BucketRow, HistoricalPerformance, Lift, LiftStats, PercentileTable};

pub use models::{
    Activity, AgeGroup, Calculation, DEFAULT_AGE, IndividualStanding, InputType, OverallStanding,
    RawValue, Score, ScoreRequest, ScoredPerformance, ScoringCategory, ScoringSystem, Sex,
    SystemSummary, Team, TeamOverallScore, TeamScore, TeamScoringMethod, WorkoutScore,
};
