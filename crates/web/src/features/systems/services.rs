use scoring::dto::systems::SystemFilter;
use scoring::{ScoringSystem, SystemSummary};

use crate::state::AppState;

/// List registered scoring systems, narrowed by the optional filters.
pub fn list_systems(state: &AppState, filter: &SystemFilter) -> Vec<SystemSummary> {
    state
        .engine
        .registry()
        .all()
        .iter()
        .filter(|system| filter.category.is_none_or(|c| system.category == c))
        .filter(|system| filter.input_type.is_none_or(|t| system.input_type == t))
        .map(SystemSummary::from)
        .collect()
}

pub fn get_system(state: &AppState, id: &str) -> Option<ScoringSystem> {
    state.engine.registry().get(id).cloned()
}
