//! Distance evaluation
//!
//! For every spawn location: distance to the nearest active teammate and to
//! the nearest active opponent. No qualifying combatant yields `None`
//! (stored on the location as `f32::INFINITY`), never a stale value.

use crate::models::{Combatant, Position, SpawnLocation, Team};
use serde::Serialize;

/// Distances for one location, computed fresh for a single selection pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceReport {
    pub to_friend: Option<f32>,
    pub to_enemy: Option<f32>,
}

impl DistanceReport {
    /// Cache representation: missing data becomes `+inf`, which passes every `>` floor.
    #[inline]
    pub fn friend_or_inf(&self) -> f32 {
        self.to_friend.unwrap_or(f32::INFINITY)
    }

    #[inline]
    pub fn enemy_or_inf(&self) -> f32 {
        self.to_enemy.unwrap_or(f32::INFINITY)
    }
}

/// Distance from `point` to the nearest active combatant on `target_team`.
///
/// `Team::None` never matches, since no active combatant can carry it.
pub fn closest_active_distance(
    point: &Position,
    combatants: &[Combatant],
    target_team: Team,
) -> Option<f32> {
    combatants
        .iter()
        .filter(|c| c.is_active() && c.team == target_team)
        .map(|c| (c.position - point).norm())
        .min_by(|a, b| a.total_cmp(b))
}

/// Side-effect free evaluation; one report per location, same order.
pub fn evaluate_distances(
    locations: &[SpawnLocation],
    combatants: &[Combatant],
    team: Team,
) -> Vec<DistanceReport> {
    let enemy = team.opponent();
    locations
        .iter()
        .map(|loc| DistanceReport {
            to_friend: closest_active_distance(&loc.position, combatants, team),
            to_enemy: closest_active_distance(&loc.position, combatants, enemy),
        })
        .collect()
}

/// Recompute the cached distance fields of every location in place.
pub fn compute_distances(locations: &mut [SpawnLocation], combatants: &[Combatant], team: Team) {
    let reports = evaluate_distances(locations, combatants, team);
    for (loc, report) in locations.iter_mut().zip(reports) {
        loc.distance_to_closest_friend = report.friend_or_inf();
        loc.distance_to_closest_enemy = report.enemy_or_inf();
    }
}
