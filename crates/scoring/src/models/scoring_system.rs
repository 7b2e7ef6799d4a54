use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoringCategory {
    Strength,
    Endurance,
    Mixed,
}

/// Shape of the raw value an athlete submits for a scoring system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputType {
    Weight,
    Time,
    Distance,
    Reps,
    Custom,
}

/// Calculation strategy attached to a scoring system. Closed set: every
/// variant has a dispatch arm in the engine, so an unknown strategy cannot
/// exist past deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Calculation {
    Squat,
    Bench,
    Deadlift,
    Row500m,
    Row2km,
    RowDistance,
    Bike1km,
    Ski500m,
    CustomWeight,
    CustomTime,
    CustomReps,
    CustomDistance,
}

/// A scoreable event type. The `requires_*` flags tell clients which athlete
/// fields a submission should carry: bodyweight and sex are enforced by the
/// engine, a missing age falls back to a default.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoringSystem {
    pub id: String,
    pub name: String,
    pub category: ScoringCategory,
    pub input_type: InputType,
    pub unit: String,
    pub requires_bodyweight: bool,
    pub requires_age: bool,
    pub requires_sex: bool,
    pub calculation: Calculation,
}

/// Compact reference to a scoring system, embedded in score results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemSummary {
    pub id: String,
    pub name: String,
    pub category: ScoringCategory,
}

impl From<&ScoringSystem> for SystemSummary {
    fn from(system: &ScoringSystem) -> Self {
        SystemSummary {
            id: system.id.clone(),
            name: system.name.clone(),
            category: system.category,
        }
    }
}
