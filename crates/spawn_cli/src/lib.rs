//! Scenario runner behind the `spawn_cli` binary
//!
//! A scenario file is a `spawn_core` JSON request. Running it performs
//! `repeat` selections, advancing the clock by `tick_secs` after each one.

use anyhow::{Context, Result};
use spawn_core::{SpawnConfig, SpawnError, SpawnRequest, SpawnResponse, Team};
use std::path::Path;

pub fn load_scenario(path: &Path) -> Result<SpawnRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    SpawnRequest::from_json(&content)
        .with_context(|| format!("Invalid scenario {}", path.display()))
}

pub fn run_scenario(
    request: SpawnRequest,
    team: Option<Team>,
    repeat: usize,
    tick_secs: f32,
) -> Result<Vec<SpawnResponse>> {
    let mut scenario = request.into_scenario().context("Scenario setup failed")?;
    if let Some(team) = team {
        scenario.team = team;
    }

    let mut responses = Vec::with_capacity(repeat);
    for round in 0..repeat {
        let response = scenario.select().with_context(|| format!("Selection {round} failed"))?;
        tracing::info!(
            round,
            location = %response.location_id,
            mode = ?response.mode,
            "selected spawn location"
        );
        responses.push(response);
        scenario.selector.tick(tick_secs);
    }
    Ok(responses)
}

pub fn validate_config(path: &Path) -> Result<SpawnConfig> {
    SpawnConfig::from_path(path).with_context(|| format!("Config {} rejected", path.display()))
}

/// Process exit status: 2 when the setup itself is wrong, 1 for any other failure.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let config_error = err
        .chain()
        .filter_map(|e| e.downcast_ref::<SpawnError>())
        .any(SpawnError::is_configuration_error);
    if config_error {
        2
    } else {
        1
    }
}
