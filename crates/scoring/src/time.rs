//! Time string parsing for endurance results.
//!
//! Three layouts are accepted, tried in order:
//! 1. Colon form `mm:ss` or `mm:ss.t`, the fractional part being tenths
//! 2. Dot form `m.ss.t`, exactly three dot-separated fields
//! 3. A bare number, taken as seconds

use crate::error::{Result, ScoringError};

/// Parses a result time into seconds.
///
/// The fractional part of the colon form is read as tenths, so "1:26.5" is 86.5
/// seconds. A two-field dot form like "1.26" never reaches the dot branch and
/// parses as the bare number 1.26 seconds; entrants who mean minutes must use
/// the colon form.
pub fn parse_seconds(input: &str) -> Result<f64> {
    let fail = || ScoringError::UnparseableTime(input.to_string());
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(fail());
    }

    if let Some((minutes_part, seconds_part)) = trimmed.split_once(':') {
        if seconds_part.contains(':') {
            return Err(fail());
        }
        let minutes: u32 = minutes_part.parse().map_err(|_| fail())?;
        let seconds = match seconds_part.split_once('.') {
            Some((whole, tenths)) => {
                let whole: u32 = whole.parse().map_err(|_| fail())?;
                let tenths: u32 = tenths.parse().map_err(|_| fail())?;
                whole as f64 + tenths as f64 / 10.0
            }
            None => seconds_part.parse::<u32>().map_err(|_| fail())? as f64,
        };
        return Ok(minutes as f64 * 60.0 + seconds);
    }

    let dotted: Vec<&str> = trimmed.split('.').collect();
    if dotted.len() == 3 {
        let minutes: u32 = dotted[0].parse().map_err(|_| fail())?;
        let seconds: u32 = dotted[1].parse().map_err(|_| fail())?;
        let tenths: u32 = dotted[2].parse().map_err(|_| fail())?;
        return Ok(minutes as f64 * 60.0 + seconds as f64 + tenths as f64 / 10.0);
    }

    let seconds: f64 = trimmed.parse().map_err(|_| fail())?;
    if !seconds.is_finite() {
        return Err(fail());
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_colon_form() {
        assert!(approx_eq(parse_seconds("7:42").unwrap(), 462.0));
        assert!(approx_eq(parse_seconds("0:45").unwrap(), 45.0));
        assert!(approx_eq(parse_seconds("12:03").unwrap(), 723.0));
    }

    #[test]
    fn test_colon_form_with_tenths() {
        assert!(approx_eq(parse_seconds("1:26.5").unwrap(), 86.5));
        assert!(approx_eq(parse_seconds("7:42.3").unwrap(), 462.3));
    }

    #[test]
    fn test_fraction_counts_tenths_not_hundredths() {
        // "1:26.55" is 55 tenths on top of 86 seconds, not 86.55 seconds
        assert!(approx_eq(parse_seconds("1:26.55").unwrap(), 91.5));
    }

    #[test]
    fn test_dot_form() {
        assert!(approx_eq(parse_seconds("7.42.5").unwrap(), 462.5));
        assert!(approx_eq(parse_seconds("1.26.0").unwrap(), 86.0));
    }

    #[test]
    fn test_bare_number() {
        assert!(approx_eq(parse_seconds("462").unwrap(), 462.0));
        assert!(approx_eq(parse_seconds("86.5").unwrap(), 86.5));
    }

    #[test]
    fn test_two_field_dot_form_is_a_bare_number() {
        // "1.26" stays 1.26 seconds, it does not mean 1 minute 26 seconds
        assert!(approx_eq(parse_seconds("1.26").unwrap(), 1.26));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(approx_eq(parse_seconds("  7:42  ").unwrap(), 462.0));
    }

    #[test]
    fn test_colon_and_dot_round_trip() {
        for minutes in 0..6u32 {
            for seconds in (0..60u32).step_by(7) {
                for tenths in 0..10u32 {
                    let expected =
                        minutes as f64 * 60.0 + seconds as f64 + tenths as f64 / 10.0;
                    let colon = format!("{minutes}:{seconds:02}.{tenths}");
                    let dot = format!("{minutes}.{seconds:02}.{tenths}");
                    assert!(approx_eq(parse_seconds(&colon).unwrap(), expected));
                    assert!(approx_eq(parse_seconds(&dot).unwrap(), expected));
                }
            }
        }
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["", "   ", "abc", "1:xx", ":30", "1:2:3", "1.2.3.4", "7:", "-1:30", "inf", "NaN"] {
            assert!(
                matches!(parse_seconds(input), Err(ScoringError::UnparseableTime(_))),
                "expected {input:?} to be rejected"
            );
        }
    }
}
