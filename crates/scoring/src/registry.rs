//! Catalog of scoreable event types.

use crate::models::scoring_system::{Calculation, InputType, ScoringCategory, ScoringSystem};

/// Lookup over the known scoring systems. Ids are stable and referenced by
/// activities and stored scores.
#[derive(Debug, Clone)]
pub struct ScoringSystemRegistry {
    systems: Vec<ScoringSystem>,
}

impl ScoringSystemRegistry {
    /// Registry with every builtin system.
    pub fn builtin() -> Self {
        Self::with_systems(builtin_systems())
    }

    pub fn with_systems(systems: Vec<ScoringSystem>) -> Self {
        ScoringSystemRegistry { systems }
    }

    pub fn get(&self, id: &str) -> Option<&ScoringSystem> {
        self.systems.iter().find(|system| system.id == id)
    }

    pub fn all(&self) -> &[ScoringSystem] {
        &self.systems
    }

    pub fn by_category(&self, category: ScoringCategory) -> Vec<&ScoringSystem> {
        self.systems
            .iter()
            .filter(|system| system.category == category)
            .collect()
    }

    pub fn by_input_type(&self, input_type: InputType) -> Vec<&ScoringSystem> {
        self.systems
            .iter()
            .filter(|system| system.input_type == input_type)
            .collect()
    }
}

fn system(
    id: &str,
    name: &str,
    category: ScoringCategory,
    input_type: InputType,
    unit: &str,
    requires_bodyweight: bool,
    requires_age: bool,
    requires_sex: bool,
    calculation: Calculation,
) -> ScoringSystem {
    ScoringSystem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        input_type,
        unit: unit.to_string(),
        requires_bodyweight,
        requires_age,
        requires_sex,
        calculation,
    }
}

#[rustfmt::skip]
fn builtin_systems() -> Vec<ScoringSystem> {
    use Calculation as C;
    use InputType as I;
    use ScoringCategory as S;

    vec![
        system("squat", "Back Squat", S::Strength, I::Weight, "kg", true, true, true, C::Squat),
        system("bench", "Bench Press", S::Strength, I::Weight, "kg", true, true, true, C::Bench),
        system("deadlift", "Deadlift", S::Strength, I::Weight, "kg", true, true, true, C::Deadlift),
        system("row_500m", "500m Row", S::Endurance, I::Time, "seconds", false, true, true, C::Row500m),
        system("row_2km", "2km Row", S::Endurance, I::Time, "seconds", false, true, true, C::Row2km),
        system("row_distance", "Max Distance Row", S::Endurance, I::Distance, "meters", false, true, true, C::RowDistance),
        system("bike_1km", "1km Bike", S::Endurance, I::Time, "seconds", false, true, true, C::Bike1km),
        system("ski_500m", "500m Ski", S::Endurance, I::Time, "seconds", false, true, true, C::Ski500m),
        system("custom_weight", "Custom Weight", S::Mixed, I::Weight, "kg", false, false, false, C::CustomWeight),
        system("custom_time", "Custom Time", S::Mixed, I::Time, "seconds", false, false, false, C::CustomTime),
        system("custom_reps", "Custom Reps", S::Mixed, I::Reps, "reps", false, false, false, C::CustomReps),
        system("custom_distance", "Custom Distance", S::Mixed, I::Distance, "meters", false, false, false, C::CustomDistance),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let registry = ScoringSystemRegistry::builtin();
        let mut ids: Vec<&str> = registry.all().iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), registry.all().len());
    }

    #[test]
    fn test_get_known_and_unknown() {
        let registry = ScoringSystemRegistry::builtin();
        assert!(registry.get("row_2km").is_some());
        assert!(registry.get("marathon").is_none());
    }

    #[test]
    fn test_category_filter() {
        let registry = ScoringSystemRegistry::builtin();
        let strength = registry.by_category(ScoringCategory::Strength);
        assert_eq!(strength.len(), 3);
        assert!(strength.iter().all(|s| s.requires_bodyweight));
        let endurance = registry.by_category(ScoringCategory::Endurance);
        assert_eq!(endurance.len(), 5);
        assert!(endurance.iter().all(|s| !s.requires_bodyweight && s.requires_sex));
    }

    #[test]
    fn test_input_type_filter() {
        let registry = ScoringSystemRegistry::builtin();
        let timed = registry.by_input_type(InputType::Time);
        assert!(timed.iter().any(|s| s.id == "row_2km"));
        assert!(timed.iter().any(|s| s.id == "custom_time"));
        assert!(timed.iter().all(|s| s.input_type == InputType::Time));
    }
}
