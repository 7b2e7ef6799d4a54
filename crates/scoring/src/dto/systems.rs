use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::scoring_system::{InputType, ScoringCategory};

/// Filters for listing scoring systems. Both are conjunctive when given.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SystemFilter {
    pub category: Option<ScoringCategory>,
    pub input_type: Option<InputType>,
}
