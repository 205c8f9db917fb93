//! Selection thresholds
//!
//! | Field | Used by | Meaning |
//! |-------|---------|---------|
//! | `min_enemy_distance` | aggressive | enemy must be farther than this |
//! | `min_friend_cluster_distance` | both | no friend closer than this (squad: no enemy either) |
//! | `max_friend_distance` | squad | beyond this the squad is too far away |
//! | `squad_min_enemy_distance` | squad | optional dedicated enemy floor |

use crate::error::{Result, SpawnError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionThresholds {
    /// Aggressive mode: closest enemy must be farther than this (meters)
    pub min_enemy_distance: f32,
    /// Closest friend must be farther than this, so players don't spawn on top of each other (meters)
    pub min_friend_cluster_distance: f32,
    /// Squad mode ignores locations whose closest friend is farther than this (meters)
    pub max_friend_distance: f32,
    /// Squad mode enemy floor. `None` reuses `min_friend_cluster_distance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squad_min_enemy_distance: Option<f32>,
}

impl Default for SelectionThresholds {
    fn default() -> Self {
        Self {
            min_enemy_distance: 10.0,
            min_friend_cluster_distance: 2.0,
            max_friend_distance: 30.0,
            squad_min_enemy_distance: None,
        }
    }
}

impl SelectionThresholds {
    /// Enemy floor applied in squad mode.
    #[inline]
    pub fn squad_enemy_floor(&self) -> f32 {
        self.squad_min_enemy_distance.unwrap_or(self.min_friend_cluster_distance)
    }

    pub fn validate(&self) -> Result<()> {
        let mut fields = vec![
            ("min_enemy_distance", self.min_enemy_distance),
            ("min_friend_cluster_distance", self.min_friend_cluster_distance),
            ("max_friend_distance", self.max_friend_distance),
        ];
        if let Some(floor) = self.squad_min_enemy_distance {
            fields.push(("squad_min_enemy_distance", floor));
        }

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SpawnError::invalid(format!("{name} must be finite, got {value}")));
            }
            if value < 0.0 {
                return Err(SpawnError::invalid(format!("{name} must be >= 0, got {value}")));
            }
        }

        if self.min_friend_cluster_distance > self.max_friend_distance {
            return Err(SpawnError::invalid(format!(
                "min_friend_cluster_distance ({}) exceeds max_friend_distance ({})",
                self.min_friend_cluster_distance, self.max_friend_distance
            )));
        }

        Ok(())
    }
}
