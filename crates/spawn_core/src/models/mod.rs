pub mod combatant;
pub mod spawn_location;
pub mod team;

pub use combatant::{Combatant, CombatantId, Position};
pub use spawn_location::{LocationId, SpawnLocation};
pub use team::Team;
