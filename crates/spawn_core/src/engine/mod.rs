//! Spawn selection engine
//!
//! Leaf-first: `distance` feeds `aggressive` and `squad`, `cooldown` gates
//! both, `selector` composes them.

pub mod aggressive;
pub mod config;
pub mod cooldown;
pub mod distance;
pub mod selector;
pub mod snapshot;
pub mod squad;

pub use aggressive::select_aggressive;
pub use config::{SelectionThresholds, SpawnConfig};
pub use cooldown::CooldownTimer;
pub use distance::{closest_active_distance, compute_distances, evaluate_distances, DistanceReport};
pub use selector::{SelectionMode, SpawnSelection, SpawnSelector};
pub use snapshot::{CombatantProvider, SnapshotFn};
pub use squad::{select_squad, SquadPick};

#[cfg(test)]
mod proptests;
