//! Event catalog: the competition layout the service runs with.
//!
//! Events, their activities and team rosters are configuration loaded from a
//! JSON file at startup. Submissions and boards reference them by id.

use scoring::{Activity, Team, TeamScoringMethod};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamEntry {
    pub team_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDefinition {
    pub event_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub scoring_method: TeamScoringMethod,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

impl EventDefinition {
    pub fn activity(&self, activity_id: Uuid) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|activity| activity.activity_id == activity_id)
    }

    /// Teams in the shape the board services take.
    pub fn board_teams(&self) -> Vec<Team> {
        self.teams
            .iter()
            .map(|team| Team {
                team_id: team.team_id,
                event_id: self.event_id,
                name: team.name.clone(),
            })
            .collect()
    }

    /// Roster lookup used to default a submission's team.
    pub fn roster_team_for(&self, user_id: Uuid) -> Option<Uuid> {
        self.teams
            .iter()
            .find(|team| team.members.contains(&user_id))
            .map(|team| team.team_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<EventDefinition>,
}

impl EventCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        let events = serde_json::from_str(raw)?;
        Ok(EventCatalog { events })
    }

    pub fn events(&self) -> &[EventDefinition] {
        &self.events
    }

    pub fn find(&self, event_id: Uuid) -> Option<&EventDefinition> {
        self.events.iter().find(|event| event.event_id == event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "event_id": "7ac97a7f-9e7f-4f2a-a64f-2c05fb4a2f2e",
            "name": "Winter Throwdown",
            "scoring_method": "AVERAGE",
            "activities": [
                {
                    "activity_id": "566a2ff8-0393-4f98-b05a-8161b9ebc40b",
                    "name": "Bench Press",
                    "scoring_system_id": "bench"
                }
            ],
            "teams": [
                {
                    "team_id": "9f2c8a3d-3e78-4a2e-bf0e-3d41c0de7a93",
                    "name": "Reds",
                    "members": ["e1f862a4-31c6-4f6c-9a2f-6c21f1b0f6d4"]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_catalog_parses_and_resolves() {
        let catalog = EventCatalog::from_json_str(CATALOG).unwrap();
        assert_eq!(catalog.events().len(), 1);

        let event_id = "7ac97a7f-9e7f-4f2a-a64f-2c05fb4a2f2e".parse().unwrap();
        let event = catalog.find(event_id).unwrap();
        assert_eq!(event.name, "Winter Throwdown");
        assert_eq!(event.scoring_method, TeamScoringMethod::Average);

        let activity_id = "566a2ff8-0393-4f98-b05a-8161b9ebc40b".parse().unwrap();
        assert_eq!(event.activity(activity_id).unwrap().scoring_system_id, "bench");
        assert!(event.activity(Uuid::new_v4()).is_none());

        let member = "e1f862a4-31c6-4f6c-9a2f-6c21f1b0f6d4".parse().unwrap();
        let team_id = "9f2c8a3d-3e78-4a2e-bf0e-3d41c0de7a93".parse().unwrap();
        assert_eq!(event.roster_team_for(member), Some(team_id));
        assert_eq!(event.roster_team_for(Uuid::new_v4()), None);

        assert!(catalog.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_defaults_apply_to_sparse_definitions() {
        let raw = r#"[{"event_id": "7ac97a7f-9e7f-4f2a-a64f-2c05fb4a2f2e", "name": "Open Gym"}]"#;
        let catalog = EventCatalog::from_json_str(raw).unwrap();
        let event = &catalog.events()[0];
        assert_eq!(event.scoring_method, TeamScoringMethod::Sum);
        assert!(event.activities.is_empty());
        assert!(event.teams.is_empty());
    }
}
