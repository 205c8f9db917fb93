//! Combatant snapshot
//!
//! Combatants are owned by the simulation. The selector only ever sees a
//! momentary copy handed over by a [`crate::engine::CombatantProvider`].

use super::team::Team;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// World-space position in meters.
pub type Position = Vector3<f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombatantId(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub team: Team,
    pub position: Position,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub dead: bool,
}

impl Combatant {
    pub fn new(id: u32, team: Team, position: Position) -> Self {
        Self { id: CombatantId(id), team, position, disabled: false, dead: false }
    }

    /// Counts for distance queries: enabled, alive, on a real team.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.disabled && !self.dead && !self.team.is_none()
    }

    #[inline]
    pub fn has_finite_position(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
    }

    /// Move to `position` and bring the combatant back to life.
    pub fn respawn_at(&mut self, position: Position) {
        self.position = position;
        self.dead = false;
    }
}
