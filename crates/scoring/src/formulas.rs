//! Performance conversion formulas shared by the scoring engine and models.

/// Window in seconds a max-distance effort is mapped onto when deriving a
/// virtual 500 m pace.
pub const DISTANCE_REFERENCE_WINDOW_SECS: f64 = 120.0;

/// Estimated one-rep max via Epley: `w × (1 + r/30)`.
///
/// A single rep is the lift itself and gets no estimation.
pub fn one_rep_max(weight_kg: f64, reps: u32) -> f64 {
    if reps <= 1 {
        return weight_kg;
    }
    weight_kg * (1.0 + reps as f64 / 30.0)
}

/// Mechanical power implied by a 500 m pace, in watts.
pub fn watts_from_pace(pace_500m_secs: f64) -> f64 {
    (2.8 / (pace_500m_secs / 500.0)).powi(3)
}

/// Virtual 500 m pace for a max-distance effort, as if the distance had been
/// covered inside the reference window.
pub fn virtual_pace_from_distance(distance_m: f64) -> f64 {
    DISTANCE_REFERENCE_WINDOW_SECS / (distance_m / 500.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
