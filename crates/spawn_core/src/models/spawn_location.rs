//! Spawn location
//!
//! `distance_to_closest_friend` / `distance_to_closest_enemy` are a per-call
//! cache: every selection pass overwrites them before reading. Never trust
//! them across calls. `f32::INFINITY` means no qualifying combatant.

use super::combatant::Position;
use crate::engine::cooldown::CooldownTimer;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnLocation {
    pub id: LocationId,
    pub name: String,
    pub position: Position,
    pub cooldown: CooldownTimer,
    pub distance_to_closest_friend: f32,
    pub distance_to_closest_enemy: f32,
}

impl SpawnLocation {
    pub fn new(id: u32, position: Position) -> Self {
        Self {
            id: LocationId(id),
            name: format!("spawn_{id}"),
            position,
            cooldown: CooldownTimer::default(),
            distance_to_closest_friend: f32::INFINITY,
            distance_to_closest_enemy: f32::INFINITY,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_cooldown(mut self, remaining: f32) -> Self {
        self.cooldown = CooldownTimer::with_remaining(remaining);
        self
    }

    /// Preset the cached distances; mostly useful for exercising selectors directly.
    pub fn with_distances(mut self, to_friend: f32, to_enemy: f32) -> Self {
        self.distance_to_closest_friend = to_friend;
        self.distance_to_closest_enemy = to_enemy;
        self
    }

    #[inline]
    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown.remaining()
    }

    #[inline]
    pub fn is_ready(&self, epsilon: f32) -> bool {
        self.cooldown.is_ready(epsilon)
    }
}

impl fmt::Display for SpawnLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
