//! Lifting standards: percentile buckets keyed by sex, weight class, age
//! group and lift.
//!
//! Buckets exist only where the source data had enough samples. A lookup that
//! falls outside the covered demographics returns `None` and the caller
//! reports the score without a percentile.

mod table;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::athlete::{AgeGroup, Sex};

/// Buckets below this sample count are dropped when building a table.
pub const BUCKET_MIN_SAMPLES: u32 = 10;

const MALE_CLASS_CEILINGS: [f64; 7] = [59.0, 66.0, 74.0, 83.0, 93.0, 105.0, 120.0];
const FEMALE_CLASS_CEILINGS: [f64; 7] = [47.0, 52.0, 57.0, 63.0, 69.0, 76.0, 84.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

/// Weight-class label for a bodyweight: the lightest class whose ceiling
/// covers it, or the open-ended class above the heaviest ceiling.
pub fn weight_class_for(sex: Sex, bodyweight_kg: f64) -> String {
    let ceilings = match sex {
        Sex::M => &MALE_CLASS_CEILINGS,
        Sex::F => &FEMALE_CLASS_CEILINGS,
    };
    for ceiling in ceilings {
        if bodyweight_kg <= *ceiling {
            return format!("{ceiling}kg");
        }
    }
    format!("{}+kg", ceilings[ceilings.len() - 1])
}

/// Percentile anchors for one demographic bucket, in kilograms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct LiftStats {
    pub max: f64,
    pub p95: f64,
    pub p90: f64,
    pub p75: f64,
    pub p50: f64,
    pub count: u32,
}

impl LiftStats {
    /// Percentile standing of `value` in this bucket, in `0.0..=100.0`.
    /// Values between anchors are interpolated linearly; anything at or above
    /// the bucket max is the 100th percentile.
    pub fn percentile_of(&self, value: f64) -> f64 {
        if value >= self.max {
            return 100.0;
        }
        let anchors = [
            (0.0, 0.0),
            (self.p50, 50.0),
            (self.p75, 75.0),
            (self.p90, 90.0),
            (self.p95, 95.0),
            (self.max, 100.0),
        ];
        for window in anchors.windows(2) {
            let (lo_value, lo_pct) = window[0];
            let (hi_value, hi_pct) = window[1];
            if value <= hi_value {
                if hi_value <= lo_value {
                    return hi_pct;
                }
                return lo_pct + (value - lo_value) / (hi_value - lo_value) * (hi_pct - lo_pct);
            }
        }
        100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BucketKey {
    sex: Sex,
    weight_class: String,
    age_group: AgeGroup,
    lift: Lift,
}

/// Flat serialized form of one bucket, used for table files and dumps.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BucketRow {
    pub sex: Sex,
    pub weight_class: String,
    pub age_group: AgeGroup,
    pub lift: Lift,
    pub max: f64,
    pub p95: f64,
    pub p90: f64,
    pub p75: f64,
    pub p50: f64,
    pub count: u32,
}

/// One historical result used when building a table from raw data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPerformance {
    pub sex: Sex,
    pub bodyweight: f64,
    pub age: u32,
    pub lift: Lift,
    pub value: f64,
}

/// Immutable percentile table. Built once, shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct PercentileTable {
    buckets: HashMap<BucketKey, LiftStats>,
}

impl PercentileTable {
    /// The table shipped with the crate, a snapshot of historical
    /// competition results.
    pub fn builtin() -> Self {
        Self::from_rows(table::builtin_rows())
    }

    pub fn from_rows(rows: Vec<BucketRow>) -> Self {
        let buckets = rows
            .into_iter()
            .map(|row| {
                let key = BucketKey {
                    sex: row.sex,
                    weight_class: row.weight_class,
                    age_group: row.age_group,
                    lift: row.lift,
                };
                let stats = LiftStats {
                    max: row.max,
                    p95: row.p95,
                    p90: row.p90,
                    p75: row.p75,
                    p50: row.p50,
                    count: row.count,
                };
                (key, stats)
            })
            .collect();
        PercentileTable { buckets }
    }

    /// Builds a table from raw results. Groups below
    /// [`BUCKET_MIN_SAMPLES`] are omitted entirely, never zero-filled.
    pub fn from_performances(samples: &[HistoricalPerformance]) -> Self {
        let mut groups: HashMap<BucketKey, Vec<f64>> = HashMap::new();
        for sample in samples {
            let key = BucketKey {
                sex: sample.sex,
                weight_class: weight_class_for(sample.sex, sample.bodyweight),
                age_group: AgeGroup::from_age(sample.age),
                lift: sample.lift,
            };
            groups.entry(key).or_default().push(sample.value);
        }

        let buckets = groups
            .into_iter()
            .filter(|(_, values)| values.len() >= BUCKET_MIN_SAMPLES as usize)
            .map(|(key, mut values)| {
                values.sort_by(|a, b| b.total_cmp(a));
                let stats = LiftStats {
                    max: values[0],
                    p95: percentile_from_sorted_desc(&values, 95.0),
                    p90: percentile_from_sorted_desc(&values, 90.0),
                    p75: percentile_from_sorted_desc(&values, 75.0),
                    p50: percentile_from_sorted_desc(&values, 50.0),
                    count: values.len() as u32,
                };
                (key, stats)
            })
            .collect();
        PercentileTable { buckets }
    }

    /// Stats for the bucket covering this athlete, if the table has one.
    pub fn lookup(&self, sex: Sex, bodyweight_kg: f64, age: u32, lift: Lift) -> Option<&LiftStats> {
        let key = BucketKey {
            sex,
            weight_class: weight_class_for(sex, bodyweight_kg),
            age_group: AgeGroup::from_age(age),
            lift,
        };
        self.buckets.get(&key)
    }

    /// Dumps the table as rows in a stable order.
    pub fn to_rows(&self) -> Vec<BucketRow> {
        let mut rows: Vec<BucketRow> = self
            .buckets
            .iter()
            .map(|(key, stats)| BucketRow {
                sex: key.sex,
                weight_class: key.weight_class.clone(),
                age_group: key.age_group,
                lift: key.lift,
                max: stats.max,
                p95: stats.p95,
                p90: stats.p90,
                p75: stats.p75,
                p50: stats.p50,
                count: stats.count,
            })
            .collect();
        rows.sort_by(|a, b| {
            (a.sex, a.age_group, class_order(&a.weight_class), a.lift)
                .partial_cmp(&(b.sex, b.age_group, class_order(&b.weight_class), b.lift))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Descending-order percentile: position `(n-1) × (100-p) / 100` from the
/// top, linearly interpolated when it falls between two elements.
fn percentile_from_sorted_desc(sorted_desc: &[f64], percentile: f64) -> f64 {
    let position = (sorted_desc.len() - 1) as f64 * (100.0 - percentile) / 100.0;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted_desc[lower];
    }
    let weight = position - lower as f64;
    sorted_desc[lower] * (1.0 - weight) + sorted_desc[upper] * weight
}

fn class_order(weight_class: &str) -> f64 {
    let trimmed = weight_class.trim_end_matches("kg");
    match trimmed.strip_suffix('+') {
        Some(digits) => digits.parse().unwrap_or(f64::MAX) + 0.5,
        None => trimmed.parse().unwrap_or(f64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_weight_class_boundaries() {
        assert_eq!(weight_class_for(Sex::M, 58.2), "59kg");
        assert_eq!(weight_class_for(Sex::M, 83.0), "83kg");
        assert_eq!(weight_class_for(Sex::M, 83.1), "93kg");
        assert_eq!(weight_class_for(Sex::M, 120.0), "120kg");
        assert_eq!(weight_class_for(Sex::M, 121.0), "120+kg");
        assert_eq!(weight_class_for(Sex::F, 47.0), "47kg");
        assert_eq!(weight_class_for(Sex::F, 84.5), "84+kg");
    }

    #[test]
    fn test_builtin_table_invariants() {
        let rows = PercentileTable::builtin().to_rows();
        assert!(!rows.is_empty());
        for row in &rows {
            assert!(row.count >= BUCKET_MIN_SAMPLES, "undersampled bucket {row:?}");
            assert!(
                row.max >= row.p95 && row.p95 >= row.p90 && row.p90 >= row.p75 && row.p75 >= row.p50,
                "anchor ordering violated in {row:?}"
            );
            assert!(row.p50 > 0.0);
        }
    }

    #[test]
    fn test_builtin_table_leaves_sparse_demographics_out() {
        let table = PercentileTable::builtin();
        // well populated bucket
        assert!(table.lookup(Sex::M, 81.0, 28, Lift::Bench).is_some());
        // Masters3 never reached the sample threshold
        assert!(table.lookup(Sex::M, 81.0, 64, Lift::Bench).is_none());
    }

    #[test]
    fn test_percentile_of_hits_anchors_exactly() {
        let stats = LiftStats {
            max: 200.0,
            p95: 180.0,
            p90: 170.0,
            p75: 150.0,
            p50: 120.0,
            count: 40,
        };
        assert!(approx_eq(stats.percentile_of(120.0), 50.0));
        assert!(approx_eq(stats.percentile_of(150.0), 75.0));
        assert!(approx_eq(stats.percentile_of(170.0), 90.0));
        assert!(approx_eq(stats.percentile_of(180.0), 95.0));
        assert!(approx_eq(stats.percentile_of(200.0), 100.0));
    }

    #[test]
    fn test_percentile_of_interpolates_between_anchors() {
        let stats = LiftStats {
            max: 200.0,
            p95: 180.0,
            p90: 170.0,
            p75: 150.0,
            p50: 120.0,
            count: 40,
        };
        assert!(approx_eq(stats.percentile_of(135.0), 62.5));
        assert!(approx_eq(stats.percentile_of(160.0), 82.5));
        assert!(approx_eq(stats.percentile_of(60.0), 25.0));
    }

    #[test]
    fn test_percentile_of_caps_above_max() {
        let stats = LiftStats {
            max: 200.0,
            p95: 180.0,
            p90: 170.0,
            p75: 150.0,
            p50: 120.0,
            count: 40,
        };
        assert!(approx_eq(stats.percentile_of(250.0), 100.0));
    }

    #[test]
    fn test_from_performances_positions() {
        // 11 samples 200,190,...,100: position for p is (10 × (100-p))/100
        let samples: Vec<HistoricalPerformance> = (0..11)
            .map(|i| HistoricalPerformance {
                sex: Sex::M,
                bodyweight: 80.0,
                age: 30,
                lift: Lift::Squat,
                value: 200.0 - 10.0 * i as f64,
            })
            .collect();
        let table = PercentileTable::from_performances(&samples);
        let stats = table.lookup(Sex::M, 80.0, 30, Lift::Squat).unwrap();
        assert_eq!(stats.count, 11);
        assert!(approx_eq(stats.max, 200.0));
        // p95: position 0.5, halfway between 200 and 190
        assert!(approx_eq(stats.p95, 195.0));
        // p90: position 1.0, exactly the second element
        assert!(approx_eq(stats.p90, 190.0));
        // p75: position 2.5
        assert!(approx_eq(stats.p75, 175.0));
        // p50: position 5.0
        assert!(approx_eq(stats.p50, 150.0));
    }

    #[test]
    fn test_from_performances_drops_small_groups() {
        let samples: Vec<HistoricalPerformance> = (0..9)
            .map(|i| HistoricalPerformance {
                sex: Sex::F,
                bodyweight: 61.0,
                age: 30,
                lift: Lift::Deadlift,
                value: 100.0 + i as f64,
            })
            .collect();
        let table = PercentileTable::from_performances(&samples);
        assert!(table.is_empty());
        assert!(table.lookup(Sex::F, 61.0, 30, Lift::Deadlift).is_none());
    }

    #[test]
    fn test_to_rows_round_trips() {
        let table = PercentileTable::builtin();
        let rebuilt = PercentileTable::from_rows(table.to_rows());
        assert_eq!(table.len(), rebuilt.len());
        let original = table.lookup(Sex::M, 90.0, 30, Lift::Deadlift).unwrap();
        let copy = rebuilt.lookup(Sex::M, 90.0, 30, Lift::Deadlift).unwrap();
        assert!(approx_eq(original.p50, copy.p50));
    }
}
