//! The scoring engine: resolves a request against a scoring system, prepares
//! the comparable quantity (estimated 1RM or 500 m pace) and hands it to the
//! normalization model.
//!
//! The engine is pure: no clock access beyond the default `today`, no storage.
//! All persistence and transport live in the callers.

use chrono::{NaiveDate, Utc};

use crate::error::{Result, ScoringError};
use crate::formulas::{one_rep_max, round2, virtual_pace_from_distance};
use crate::model::{ErgMachine, Normalized, ScoringModel, StandardsModel};
use crate::models::athlete::{DEFAULT_AGE, Sex, age_on};
use crate::models::score::{RawValue, ScoreRequest, ScoredPerformance};
use crate::models::scoring_system::{Calculation, InputType, ScoringSystem, SystemSummary};
use crate::registry::ScoringSystemRegistry;
use crate::standards::Lift;
use crate::time;

/// Percentile reported for custom events, which have no reference population.
const CUSTOM_PERCENTILE: f64 = 50.0;

pub struct ScoreEngine {
    registry: ScoringSystemRegistry,
    model: Box<dyn ScoringModel>,
}

impl ScoreEngine {
    pub fn new(registry: ScoringSystemRegistry, model: Box<dyn ScoringModel>) -> Self {
        ScoreEngine { registry, model }
    }

    /// Engine over the builtin systems and the standards-backed model.
    pub fn with_defaults() -> Self {
        Self::new(
            ScoringSystemRegistry::builtin(),
            Box::new(StandardsModel::builtin()),
        )
    }

    pub fn registry(&self) -> &ScoringSystemRegistry {
        &self.registry
    }

    /// Scores one performance, deriving age from a date of birth against the
    /// current date.
    pub fn score(&self, request: &ScoreRequest) -> Result<ScoredPerformance> {
        self.score_on(request, Utc::now().date_naive())
    }

    /// Same as [`score`](Self::score) with an explicit reference date for age
    /// derivation.
    pub fn score_on(&self, request: &ScoreRequest, today: NaiveDate) -> Result<ScoredPerformance> {
        let system = self
            .registry
            .get(&request.scoring_system_id)
            .ok_or_else(|| ScoringError::UnknownScoringSystem(request.scoring_system_id.clone()))?;

        let value = resolve_value(system, &request.value)?;
        let reps = match request.reps {
            Some(reps) if !(1..=10).contains(&reps) => {
                return Err(ScoringError::InvalidInput(
                    "reps must be between 1 and 10".to_string(),
                ));
            }
            Some(reps) => reps,
            None => 1,
        };
        let age = resolve_age(request, today)?;

        let normalized = match system.calculation {
            Calculation::Squat => {
                self.strength_score(system, Lift::Squat, value, reps, age, request)?
            }
            Calculation::Bench => {
                self.strength_score(system, Lift::Bench, value, reps, age, request)?
            }
            Calculation::Deadlift => {
                self.strength_score(system, Lift::Deadlift, value, reps, age, request)?
            }
            Calculation::Row500m => {
                self.endurance_score(system, ErgMachine::Row, value, age, request)?
            }
            Calculation::Row2km => {
                // a 2 km row is four 500 m splits
                self.endurance_score(system, ErgMachine::Row, value / 4.0, age, request)?
            }
            Calculation::RowDistance => {
                let pace = virtual_pace_from_distance(value);
                self.endurance_score(system, ErgMachine::Row, pace, age, request)?
            }
            Calculation::Bike1km => {
                self.endurance_score(system, ErgMachine::Bike, value / 2.0, age, request)?
            }
            Calculation::Ski500m => {
                self.endurance_score(system, ErgMachine::Ski, value, age, request)?
            }
            Calculation::CustomWeight | Calculation::CustomReps | Calculation::CustomDistance => {
                Normalized {
                    score: value,
                    percentile: Some(CUSTOM_PERCENTILE),
                }
            }
            Calculation::CustomTime => Normalized {
                // faster is better, so invert
                score: round2(1000.0 / value),
                percentile: Some(CUSTOM_PERCENTILE),
            },
        };

        Ok(ScoredPerformance {
            score: normalized.score,
            percentile: normalized.percentile,
            scoring_system: SystemSummary::from(system),
        })
    }

    /// Canonical numeric value of a submission: time strings become seconds,
    /// numbers pass through. Rejects non-positive values.
    pub fn canonical_value(&self, scoring_system_id: &str, value: &RawValue) -> Result<f64> {
        let system = self
            .registry
            .get(scoring_system_id)
            .ok_or_else(|| ScoringError::UnknownScoringSystem(scoring_system_id.to_string()))?;
        resolve_value(system, value)
    }

    fn strength_score(
        &self,
        system: &ScoringSystem,
        lift: Lift,
        weight_kg: f64,
        reps: u32,
        age: u32,
        request: &ScoreRequest,
    ) -> Result<Normalized> {
        let bodyweight = required_bodyweight(system, request)?;
        let sex = required_sex(system, request)?;
        let one_rm = one_rep_max(weight_kg, reps);
        Ok(self.model.strength(lift, one_rm, bodyweight, age, sex))
    }

    fn endurance_score(
        &self,
        system: &ScoringSystem,
        machine: ErgMachine,
        pace_500m_secs: f64,
        age: u32,
        request: &ScoreRequest,
    ) -> Result<Normalized> {
        let sex = required_sex(system, request)?;
        Ok(self.model.endurance(machine, pace_500m_secs, age, sex))
    }
}

fn resolve_value(system: &ScoringSystem, value: &RawValue) -> Result<f64> {
    let resolved = match value {
        RawValue::Number(number) => *number,
        RawValue::Text(text) if system.input_type == InputType::Time => time::parse_seconds(text)?,
        RawValue::Text(_) => {
            return Err(ScoringError::InvalidInput(format!(
                "scoring system '{}' expects a numeric value in {}",
                system.id, system.unit
            )));
        }
    };
    if !resolved.is_finite() || resolved <= 0.0 {
        return Err(ScoringError::InvalidInput(
            "value must be a positive number".to_string(),
        ));
    }
    Ok(resolved)
}

fn resolve_age(request: &ScoreRequest, today: NaiveDate) -> Result<u32> {
    let age = match (request.age, request.date_of_birth) {
        (Some(age), _) => i64::from(age),
        (None, Some(date_of_birth)) => i64::from(age_on(date_of_birth, today)),
        (None, None) => return Ok(DEFAULT_AGE),
    };
    if !(10..=100).contains(&age) {
        return Err(ScoringError::InvalidInput(
            "age must be between 10 and 100".to_string(),
        ));
    }
    Ok(age as u32)
}

fn required_bodyweight(system: &ScoringSystem, request: &ScoreRequest) -> Result<f64> {
    let bodyweight = request.bodyweight.ok_or_else(|| {
        ScoringError::InvalidInput(format!("scoring system '{}' requires bodyweight", system.id))
    })?;
    if !(30.0..=250.0).contains(&bodyweight) {
        return Err(ScoringError::InvalidInput(
            "bodyweight must be between 30 and 250 kg".to_string(),
        ));
    }
    Ok(bodyweight)
}

fn required_sex(system: &ScoringSystem, request: &ScoreRequest) -> Result<Sex> {
    request.sex.ok_or_else(|| {
        ScoringError::InvalidInput(format!("scoring system '{}' requires sex", system.id))
    })
}
