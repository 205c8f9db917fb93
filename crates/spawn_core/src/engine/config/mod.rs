//! # Spawn Selection Configuration
//!
//! Thresholds and cooldown are set once per match and validated at setup.
//! Runtime selection never re-validates.
//!
//! ## Usage
//! ```rust
//! use spawn_core::engine::config::SpawnConfig;
//!
//! let config = SpawnConfig::default();
//! let cautious = SpawnConfig::cautious();
//! let from_env = SpawnConfig::from_env_or_default();
//! # assert!(config.validate().is_ok() && cautious.validate().is_ok() && from_env.validate().is_ok());
//! ```
//!
//! ## Environment Variables
//!
//! - `SPAWN_PROFILE`: preset name (`aggressive`, `cautious`, anything else = default)
//! - `SPAWN_CONFIG_PATH`: JSON file with a full or partial `SpawnConfig`

mod config_env;
mod thresholds_config;

pub use config_env::{SPAWN_CONFIG_PATH_ENV, SPAWN_PROFILE_ENV};
pub use thresholds_config::SelectionThresholds;

use super::cooldown::DEFAULT_READY_EPSILON;
use crate::error::{Result, SpawnError};
use serde::{Deserialize, Serialize};
use std::env;

/// Seconds a location stays occupied after being chosen.
pub const DEFAULT_COOLDOWN_SECS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub thresholds: SelectionThresholds,
    /// Cooldown started on the chosen location (seconds)
    pub cooldown_secs: f32,
    /// Remaining cooldown at or below this counts as ready
    pub ready_epsilon: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            thresholds: SelectionThresholds::default(),
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            ready_epsilon: DEFAULT_READY_EPSILON,
        }
    }
}

impl SpawnConfig {
    /// Push hard toward the front line, recycle locations quickly
    pub fn aggressive() -> Self {
        Self {
            thresholds: SelectionThresholds {
                min_enemy_distance: 6.0,
                min_friend_cluster_distance: 1.5,
                max_friend_distance: 25.0,
                squad_min_enemy_distance: None,
            },
            cooldown_secs: 1.5,
            ..Self::default()
        }
    }

    /// Keep a wide berth from enemies, spread the team out
    pub fn cautious() -> Self {
        Self {
            thresholds: SelectionThresholds {
                min_enemy_distance: 18.0,
                min_friend_cluster_distance: 3.0,
                max_friend_distance: 40.0,
                squad_min_enemy_distance: Some(8.0),
            },
            cooldown_secs: 3.0,
            ..Self::default()
        }
    }

    pub fn from_profile(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "aggressive" => Self::aggressive(),
            "cautious" => Self::cautious(),
            _ => Self::default(),
        }
    }

    /// Load from environment variable SPAWN_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        Self::from_profile(&env::var(SPAWN_PROFILE_ENV).unwrap_or_default())
    }

    /// `SPAWN_CONFIG_PATH` file if set, otherwise the `SPAWN_PROFILE` preset.
    pub fn from_env() -> Result<Self> {
        config_env::load_from_env()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;

        if !self.cooldown_secs.is_finite() || self.cooldown_secs <= 0.0 {
            return Err(SpawnError::invalid(format!(
                "cooldown_secs must be > 0, got {}",
                self.cooldown_secs
            )));
        }
        if !self.ready_epsilon.is_finite() || self.ready_epsilon <= 0.0 {
            return Err(SpawnError::invalid(format!(
                "ready_epsilon must be > 0, got {}",
                self.ready_epsilon
            )));
        }
        if self.ready_epsilon >= self.cooldown_secs {
            return Err(SpawnError::invalid(format!(
                "ready_epsilon ({}) must be smaller than cooldown_secs ({})",
                self.ready_epsilon, self.cooldown_secs
            )));
        }

        Ok(())
    }
}
