pub mod json_api;

pub use json_api::{
    select_spawn_json, LocationData, LocationDistances, SpawnRequest, SpawnResponse,
    SpawnScenario,
};
