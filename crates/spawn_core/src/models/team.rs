//! Team affiliation
//!
//! `Team::None` is a real value, not an absence: combatants carrying it are
//! never active, and it is its own opponent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Team
// ============================================================================

/// Team affiliation of a combatant or of the player asking for a spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    #[default]
    None,
    Blue,
    Red,
}

impl Team {
    /// Opposing team. `None` maps to itself, which disables enemy filtering.
    #[inline]
    pub const fn opponent(&self) -> Self {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
            Team::None => Team::None,
        }
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Team::None)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Team::None => "none",
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Team::None),
            "blue" | "a" => Ok(Team::Blue),
            "red" | "b" => Ok(Team::Red),
            other => Err(format!("Unknown team: {other} (expected blue, red or none)")),
        }
    }
}
