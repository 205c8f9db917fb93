//! Selection orchestrator
//!
//! Owns the match's spawn locations. Each call recomputes distances from a
//! fresh combatant snapshot, tries aggressive mode, falls back to squad mode,
//! then starts the winner's cooldown.
//!
//! Single-threaded by contract: `tick` and selection take `&mut self`, so a
//! caller sharing the selector across threads must wrap it in one lock.

use super::aggressive::select_aggressive;
use super::config::SpawnConfig;
use super::distance::{compute_distances, DistanceReport};
use super::snapshot::CombatantProvider;
use super::squad::select_squad;
use crate::error::{Result, SpawnError};
use crate::models::{Combatant, LocationId, Position, SpawnLocation, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Which rule produced the chosen location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Closest to the enemy among safe, ready locations
    Aggressive,
    /// Closest to a teammate among ready locations in squad range
    Squad,
    /// Nothing qualified; closest to a teammate regardless of cooldown
    LastResort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnSelection {
    pub location_id: LocationId,
    pub position: Position,
    pub mode: SelectionMode,
}

#[derive(Debug, Clone)]
pub struct SpawnSelector {
    locations: Vec<SpawnLocation>,
    config: SpawnConfig,
}

impl SpawnSelector {
    /// Validates the config and requires at least one location.
    pub fn new(locations: Vec<SpawnLocation>, config: SpawnConfig) -> Result<Self> {
        config.validate()?;
        if locations.is_empty() {
            return Err(SpawnError::invalid("no spawn locations registered"));
        }

        let mut seen = HashSet::with_capacity(locations.len());
        for loc in &locations {
            check_finite_position(loc)?;
            if !seen.insert(loc.id) {
                return Err(SpawnError::invalid(format!("duplicate spawn location id {}", loc.id)));
            }
        }

        Ok(Self { locations, config })
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    pub fn locations(&self) -> &[SpawnLocation] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Option<&SpawnLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn register_location(&mut self, location: SpawnLocation) -> Result<()> {
        check_finite_position(&location)?;
        if self.location(location.id).is_some() {
            return Err(SpawnError::invalid(format!(
                "duplicate spawn location id {}",
                location.id
            )));
        }
        self.locations.push(location);
        Ok(())
    }

    /// Pick a spawn location for a player on `team` and occupy it.
    pub fn select_spawn_location<P>(&mut self, team: Team, provider: &P) -> Result<SpawnSelection>
    where
        P: CombatantProvider + ?Sized,
    {
        let combatants = provider.snapshot();
        compute_distances(&mut self.locations, &combatants, team);

        let thresholds = &self.config.thresholds;
        let epsilon = self.config.ready_epsilon;

        let (index, mode) = match select_aggressive(&self.locations, thresholds, epsilon) {
            Some(index) => (index, SelectionMode::Aggressive),
            None => {
                let pick = select_squad(&self.locations, thresholds, epsilon)
                    .ok_or_else(|| SpawnError::invalid("no spawn locations registered"))?;
                let mode =
                    if pick.last_resort { SelectionMode::LastResort } else { SelectionMode::Squad };
                (pick.index, mode)
            }
        };

        let cooldown = self.config.cooldown_secs;
        let chosen = &mut self.locations[index];
        chosen.cooldown.start(cooldown);

        match mode {
            SelectionMode::LastResort => warn!(
                %team,
                location = %chosen,
                "no location met spawn conditions, using closest to a teammate"
            ),
            _ => debug!(
                %team,
                location = %chosen,
                ?mode,
                to_friend = chosen.distance_to_closest_friend,
                to_enemy = chosen.distance_to_closest_enemy,
                "spawn location chosen"
            ),
        }

        Ok(SpawnSelection { location_id: chosen.id, position: chosen.position, mode })
    }

    /// Select for the combatant's own team and move it onto the chosen location.
    pub fn spawn_combatant<P>(
        &mut self,
        combatant: &mut Combatant,
        provider: &P,
    ) -> Result<SpawnSelection>
    where
        P: CombatantProvider + ?Sized,
    {
        let selection = self.select_spawn_location(combatant.team, provider)?;
        combatant.respawn_at(selection.position);
        Ok(selection)
    }

    pub fn start_cooldown(&mut self, id: LocationId) -> Result<()> {
        let duration = self.config.cooldown_secs;
        let loc = self
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(SpawnError::UnknownLocation(id))?;
        loc.cooldown.start(duration);
        Ok(())
    }

    /// Clock entry point: advance every cooldown by `delta_secs`.
    pub fn tick(&mut self, delta_secs: f32) {
        for loc in &mut self.locations {
            loc.cooldown.tick(delta_secs);
        }
    }

    /// Match restart: every location becomes ready again.
    pub fn reset_cooldowns(&mut self) {
        for loc in &mut self.locations {
            loc.cooldown.reset();
        }
    }

    /// Distances cached by the most recent selection.
    pub fn last_distances(&self) -> Vec<(LocationId, DistanceReport)> {
        let known = |d: f32| d.is_finite().then_some(d);
        self.locations
            .iter()
            .map(|l| {
                let report = DistanceReport {
                    to_friend: known(l.distance_to_closest_friend),
                    to_enemy: known(l.distance_to_closest_enemy),
                };
                (l.id, report)
            })
            .collect()
    }
}

fn check_finite_position(location: &SpawnLocation) -> Result<()> {
    if location.position.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SpawnError::invalid(format!("spawn location {location} has a non-finite position")))
    }
}
