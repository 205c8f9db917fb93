//! # spawn_core - Respawn Location Selection
//!
//! Picks where a player re-enters a team match, given the live positions of
//! every combatant and a set of spawn locations with cooldowns.
//!
//! ## Features
//! - Aggressive mode: closest safe location to the enemy front line
//! - Squad mode fallback: regroup near teammates within range
//! - Per-location cooldowns driven by an external clock
//! - Deterministic: same snapshot and thresholds = same location
//! - JSON API for engine integration


pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{select_spawn_json, SpawnRequest, SpawnResponse, SpawnScenario};
pub use engine::{
    CombatantProvider, SelectionMode, SelectionThresholds, SpawnConfig, SpawnSelection,
    SpawnSelector,
};
pub use error::{Result, SpawnError};
pub use models::{Combatant, CombatantId, LocationId, Position, SpawnLocation, Team};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
