use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single workout within an event, scored by one scoring system.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    pub activity_id: Uuid,
    pub name: String,
    pub scoring_system_id: String,
}
