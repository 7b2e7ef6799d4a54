//! Normalization models.
//!
//! A [`ScoringModel`] turns a prepared performance (estimated 1RM or a 500 m
//! pace) into a comparable score plus an optional percentile. The engine only
//! prepares inputs and dispatches; swapping the model changes how scores are
//! produced without touching conversion or dispatch.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::formulas::{round1, round2, watts_from_pace};
use crate::models::athlete::{AgeGroup, Sex};
use crate::standards::{Lift, PercentileTable};

/// Machine family an endurance pace was produced on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErgMachine {
    Row,
    Bike,
    Ski,
}

/// Model output: a comparable score and, when the athlete's demographic is
/// covered by reference data, a percentile standing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub score: f64,
    pub percentile: Option<f64>,
}

pub trait ScoringModel: Send + Sync {
    /// Scores an estimated one-rep max against demographic expectations.
    fn strength(
        &self,
        lift: Lift,
        one_rm_kg: f64,
        bodyweight_kg: f64,
        age: u32,
        sex: Sex,
    ) -> Normalized;

    /// Scores a 500 m pace in seconds against demographic expectations.
    fn endurance(
        &self,
        machine: ErgMachine,
        pace_500m_secs: f64,
        age: u32,
        sex: Sex,
    ) -> Normalized;
}

/// Curve constants for one sex and lift.
///
/// Expected elite lift: `A + (K - A) / (1 + Q · e^(-B · (BW - v)))`
#[derive(Debug, Clone, Copy)]
struct CurveConstants {
    a: f64,
    k: f64,
    b: f64,
    v: f64,
    q: f64,
}

/// Reference pace anchors for one machine and sex, seconds per 500 m.
/// `best` is the fastest pace on record; the rest are percentile anchors.
#[derive(Debug, Clone, Copy)]
struct PaceStandard {
    best: f64,
    p95: f64,
    p90: f64,
    p75: f64,
    p50: f64,
}

/// Default model backed by the lifting standards table and erg pace
/// standards.
///
/// Strength: score is the athlete's estimated 1RM as a percentage of the
/// expected elite lift at their bodyweight, scaled up for masters brackets.
/// Endurance: score is the athlete's implied watts as a percentage of the
/// watts at the best pace on record, same masters scaling.
pub struct StandardsModel {
    table: PercentileTable,
}

impl StandardsModel {
    pub fn new(table: PercentileTable) -> Self {
        StandardsModel { table }
    }

    pub fn builtin() -> Self {
        Self::new(PercentileTable::builtin())
    }
}

impl ScoringModel for StandardsModel {
    fn strength(
        &self,
        lift: Lift,
        one_rm_kg: f64,
        bodyweight_kg: f64,
        age: u32,
        sex: Sex,
    ) -> Normalized {
        let expected = expected_elite(curve_constants(sex, lift), bodyweight_kg);
        let score = one_rm_kg * 100.0 / expected * age_factor(age);
        let percentile = self
            .table
            .lookup(sex, bodyweight_kg, age, lift)
            .map(|stats| round1(stats.percentile_of(one_rm_kg)));
        Normalized {
            score: round2(score),
            percentile,
        }
    }

    fn endurance(
        &self,
        machine: ErgMachine,
        pace_500m_secs: f64,
        age: u32,
        sex: Sex,
    ) -> Normalized {
        let standard = pace_standard(machine, sex);
        let elite_watts = watts_from_pace(standard.best);
        let score = watts_from_pace(pace_500m_secs) / elite_watts * 100.0 * age_factor(age);
        Normalized {
            score: round2(score),
            percentile: Some(round1(pace_percentile(standard, pace_500m_secs))),
        }
    }
}

fn expected_elite(constants: CurveConstants, bodyweight_kg: f64) -> f64 {
    let exp_term = (-constants.b * (bodyweight_kg - constants.v)).exp();
    constants.a + (constants.k - constants.a) / (1.0 + constants.q * exp_term)
}

/// Masters brackets score against an age-adjusted expectation.
fn age_factor(age: u32) -> f64 {
    match AgeGroup::from_age(age) {
        AgeGroup::Junior | AgeGroup::Open => 1.0,
        AgeGroup::Masters1 => 1.05,
        AgeGroup::Masters2 => 1.12,
        AgeGroup::Masters3 => 1.20,
    }
}

#[rustfmt::skip]
fn curve_constants(sex: Sex, lift: Lift) -> CurveConstants {
    match (sex, lift) {
        (Sex::M, Lift::Squat) => CurveConstants { a: 86.9, k: 309.2, b: 0.044, v: 59.0, q: 1.0 },
        (Sex::M, Lift::Bench) => CurveConstants { a: 62.8, k: 224.0, b: 0.044, v: 59.0, q: 1.0 },
        (Sex::M, Lift::Deadlift) => CurveConstants { a: 99.2, k: 354.0, b: 0.044, v: 59.0, q: 1.0 },
        (Sex::F, Lift::Squat) => CurveConstants { a: 71.5, k: 190.9, b: 0.076, v: 51.0, q: 1.0 },
        (Sex::F, Lift::Bench) => CurveConstants { a: 58.4, k: 138.0, b: 0.080, v: 53.0, q: 1.0 },
        (Sex::F, Lift::Deadlift) => CurveConstants { a: 81.5, k: 219.3, b: 0.074, v: 51.0, q: 1.0 },
    }
}

#[rustfmt::skip]
fn pace_standard(machine: ErgMachine, sex: Sex) -> PaceStandard {
    match (machine, sex) {
        (ErgMachine::Row, Sex::M) => PaceStandard { best: 75.0, p95: 85.0, p90: 90.0, p75: 100.0, p50: 112.0 },
        (ErgMachine::Row, Sex::F) => PaceStandard { best: 85.0, p95: 96.0, p90: 102.0, p75: 113.0, p50: 126.0 },
        (ErgMachine::Bike, Sex::M) => PaceStandard { best: 35.0, p95: 40.0, p90: 43.0, p75: 48.0, p50: 54.0 },
        (ErgMachine::Bike, Sex::F) => PaceStandard { best: 40.0, p95: 46.0, p90: 49.0, p75: 55.0, p50: 62.0 },
        (ErgMachine::Ski, Sex::M) => PaceStandard { best: 82.0, p95: 93.0, p90: 99.0, p75: 110.0, p50: 124.0 },
        (ErgMachine::Ski, Sex::F) => PaceStandard { best: 94.0, p95: 106.0, p90: 113.0, p75: 126.0, p50: 141.0 },
    }
}

/// Percentile for a pace: 100 at or under the best pace, interpolated down
/// through the anchors, then tapering toward zero past the median.
fn pace_percentile(standard: PaceStandard, pace: f64) -> f64 {
    if pace <= standard.best {
        return 100.0;
    }
    let anchors = [
        (standard.best, 100.0),
        (standard.p95, 95.0),
        (standard.p90, 90.0),
        (standard.p75, 75.0),
        (standard.p50, 50.0),
    ];
    for window in anchors.windows(2) {
        let (lo_pace, lo_pct) = window[0];
        let (hi_pace, hi_pct) = window[1];
        if pace <= hi_pace {
            if hi_pace <= lo_pace {
                return hi_pct;
            }
            return lo_pct + (pace - lo_pace) / (hi_pace - lo_pace) * (hi_pct - lo_pct);
        }
    }
    50.0 * standard.p50 / pace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_strength_score_100_at_expected_elite() {
        // at bodyweight == v the curve is exactly (a + k) / 2
        let model = StandardsModel::builtin();
        let result = model.strength(Lift::Bench, 143.4, 59.0, 28, Sex::M);
        assert!(approx_eq(result.score, 100.0, 0.01));
    }

    #[test]
    fn test_strength_score_scales_linearly_with_one_rm() {
        let model = StandardsModel::builtin();
        let half = model.strength(Lift::Bench, 71.7, 59.0, 28, Sex::M);
        assert!(approx_eq(half.score, 50.0, 0.01));
    }

    #[test]
    fn test_heavier_athlete_needs_more_for_the_same_score() {
        let model = StandardsModel::builtin();
        let light = model.strength(Lift::Squat, 180.0, 66.0, 30, Sex::M);
        let heavy = model.strength(Lift::Squat, 180.0, 105.0, 30, Sex::M);
        assert!(light.score > heavy.score);
    }

    #[test]
    fn test_masters_brackets_score_against_adjusted_expectation() {
        let model = StandardsModel::builtin();
        let open = model.strength(Lift::Deadlift, 220.0, 90.0, 30, Sex::M);
        let masters1 = model.strength(Lift::Deadlift, 220.0, 90.0, 45, Sex::M);
        let masters3 = model.strength(Lift::Deadlift, 220.0, 90.0, 66, Sex::M);
        assert!(approx_eq(masters1.score, open.score * 1.05, 0.01));
        assert!(approx_eq(masters3.score, open.score * 1.20, 0.01));
    }

    #[test]
    fn test_strength_percentile_requires_a_covered_bucket() {
        let model = StandardsModel::builtin();
        let covered = model.strength(Lift::Bench, 140.0, 81.0, 28, Sex::M);
        assert!(covered.percentile.is_some());
        // no Masters3 bucket in the builtin table
        let uncovered = model.strength(Lift::Bench, 140.0, 81.0, 66, Sex::M);
        assert!(uncovered.percentile.is_none());
        assert!(uncovered.score > 0.0);
    }

    #[test]
    fn test_endurance_score_100_at_best_pace() {
        let model = StandardsModel::builtin();
        let result = model.endurance(ErgMachine::Row, 75.0, 28, Sex::M);
        assert!(approx_eq(result.score, 100.0, 0.01));
        assert_eq!(result.percentile, Some(100.0));
    }

    #[test]
    fn test_endurance_score_follows_the_cube_law() {
        let model = StandardsModel::builtin();
        // twice the pace means an eighth of the watts
        let result = model.endurance(ErgMachine::Row, 150.0, 28, Sex::M);
        assert!(approx_eq(result.score, 12.5, 0.01));
    }

    #[test]
    fn test_endurance_percentile_interpolates_anchors() {
        let model = StandardsModel::builtin();
        // halfway between p95 (85s) and p90 (90s) for male rowers
        let result = model.endurance(ErgMachine::Row, 87.5, 28, Sex::M);
        assert_eq!(result.percentile, Some(92.5));
    }

    #[test]
    fn test_endurance_percentile_tapers_past_median() {
        let model = StandardsModel::builtin();
        let slow = model.endurance(ErgMachine::Row, 224.0, 28, Sex::M);
        assert_eq!(slow.percentile, Some(25.0));
        let slower = model.endurance(ErgMachine::Row, 500.0, 28, Sex::M);
        assert!(slower.percentile.unwrap() < 12.0);
        assert!(slower.percentile.unwrap() > 0.0);
    }

    #[test]
    fn test_machines_have_distinct_standards() {
        let model = StandardsModel::builtin();
        let row = model.endurance(ErgMachine::Row, 90.0, 28, Sex::M);
        let ski = model.endurance(ErgMachine::Ski, 90.0, 28, Sex::M);
        // 90 s per 500 m is a better ski pace than row pace
        assert!(ski.score > row.score);
    }
}
