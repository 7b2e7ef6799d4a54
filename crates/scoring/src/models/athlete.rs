use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Age assumed for athletes who gave neither an age nor a date of birth.
pub const DEFAULT_AGE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    M,
    F,
}

/// Competition age bracket derived from age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum AgeGroup {
    Junior,
    Open,
    Masters1,
    Masters2,
    Masters3,
}

impl AgeGroup {
    pub fn from_age(age: u32) -> Self {
        if age < 23 {
            AgeGroup::Junior
        } else if age < 40 {
            AgeGroup::Open
        } else if age < 50 {
            AgeGroup::Masters1
        } else if age < 60 {
            AgeGroup::Masters2
        } else {
            AgeGroup::Masters3
        }
    }
}

/// Whole years between `date_of_birth` and `on`, counting a year only once the
/// birthday has passed. Negative when the birth date lies in the future.
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_counts_birthday_once_passed() {
        let dob = date(1990, 6, 15);
        assert_eq!(age_on(dob, date(2024, 6, 14)), 33);
        assert_eq!(age_on(dob, date(2024, 6, 15)), 34);
        assert_eq!(age_on(dob, date(2024, 6, 16)), 34);
    }

    #[test]
    fn test_age_is_negative_for_future_birth_dates() {
        assert!(age_on(date(2030, 1, 1), date(2024, 1, 1)) < 0);
    }

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(22), AgeGroup::Junior);
        assert_eq!(AgeGroup::from_age(23), AgeGroup::Open);
        assert_eq!(AgeGroup::from_age(39), AgeGroup::Open);
        assert_eq!(AgeGroup::from_age(40), AgeGroup::Masters1);
        assert_eq!(AgeGroup::from_age(49), AgeGroup::Masters1);
        assert_eq!(AgeGroup::from_age(50), AgeGroup::Masters2);
        assert_eq!(AgeGroup::from_age(59), AgeGroup::Masters2);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Masters3);
        assert_eq!(AgeGroup::from_age(85), AgeGroup::Masters3);
    }
}
