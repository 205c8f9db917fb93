use serde::{Deserialize, Serialize};

use crate::engine::{SelectionMode, SpawnConfig, SpawnSelection, SpawnSelector};
use crate::error::{Result, SpawnError};
use crate::models::{Combatant, LocationId, Position, SpawnLocation, Team};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Deserialize)]
pub struct SpawnRequest {
    pub schema_version: u8,
    pub team: Team,
    /// Omitted: built-in defaults (not the environment, so requests stay reproducible)
    #[serde(default)]
    pub config: Option<SpawnConfig>,
    pub locations: Vec<LocationData>,
    #[serde(default)]
    pub combatants: Vec<Combatant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationData {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub cooldown_remaining: f32,
}

impl From<LocationData> for SpawnLocation {
    fn from(data: LocationData) -> Self {
        let loc = SpawnLocation::new(data.id, data.position).with_cooldown(data.cooldown_remaining);
        match data.name {
            Some(name) => loc.named(name),
            None => loc,
        }
    }
}

/// A validated request, ready to run one or more selections.
#[derive(Debug, Clone)]
pub struct SpawnScenario {
    pub selector: SpawnSelector,
    pub team: Team,
    pub combatants: Vec<Combatant>,
}

impl SpawnRequest {
    pub fn from_json(request_json: &str) -> Result<Self> {
        let request: SpawnRequest = serde_json::from_str(request_json)?;
        if request.schema_version != SCHEMA_VERSION {
            return Err(SpawnError::UnsupportedSchema {
                found: request.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(request)
    }

    pub fn into_scenario(self) -> Result<SpawnScenario> {
        let SpawnRequest { team, config, locations, combatants, .. } = self;
        if let Some(c) = combatants.iter().find(|c| !c.has_finite_position()) {
            return Err(SpawnError::invalid(format!(
                "combatant {} has a non-finite position",
                c.id.0
            )));
        }
        let locations = locations.into_iter().map(SpawnLocation::from).collect();
        let selector = SpawnSelector::new(locations, config.unwrap_or_default())?;
        Ok(SpawnScenario { selector, team, combatants })
    }
}

impl SpawnScenario {
    pub fn select(&mut self) -> Result<SpawnResponse> {
        let selection = self.selector.select_spawn_location(self.team, &self.combatants)?;
        Ok(SpawnResponse::new(&self.selector, selection))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpawnResponse {
    pub schema_version: u8,
    pub location_id: LocationId,
    pub position: Position,
    pub mode: SelectionMode,
    pub distances: Vec<LocationDistances>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationDistances {
    pub location_id: LocationId,
    /// `null` when no active teammate exists
    pub to_friend: Option<f32>,
    /// `null` when no active opponent exists
    pub to_enemy: Option<f32>,
}

impl SpawnResponse {
    pub fn new(selector: &SpawnSelector, selection: SpawnSelection) -> Self {
        let distances = selector
            .last_distances()
            .into_iter()
            .map(|(location_id, report)| LocationDistances {
                location_id,
                to_friend: report.to_friend,
                to_enemy: report.to_enemy,
            })
            .collect();

        Self {
            schema_version: SCHEMA_VERSION,
            location_id: selection.location_id,
            position: selection.position,
            mode: selection.mode,
            distances,
        }
    }
}

/// One-shot selection over a JSON request; returns the JSON response.
pub fn select_spawn_json(request_json: &str) -> Result<String> {
    let mut scenario = SpawnRequest::from_json(request_json)?.into_scenario()?;
    let response = scenario.select()?;
    Ok(serde_json::to_string(&response)?)
}
