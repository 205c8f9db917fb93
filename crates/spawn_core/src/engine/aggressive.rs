//! Aggressive selection: push toward the enemy
//!
//! Among ready locations that keep a safe distance from both enemies and
//! teammates, pick the one closest to the enemy. Ties keep input order.

use super::config::SelectionThresholds;
use crate::models::SpawnLocation;

/// Aggressive-mode eligibility of a single location.
#[inline]
pub fn qualifies(loc: &SpawnLocation, thresholds: &SelectionThresholds, epsilon: f32) -> bool {
    loc.is_ready(epsilon)
        && loc.distance_to_closest_enemy > thresholds.min_enemy_distance
        && loc.distance_to_closest_friend > thresholds.min_friend_cluster_distance
}

/// Index of the chosen location, or `None` when nothing qualifies (squad fallback).
pub fn select_aggressive(
    locations: &[SpawnLocation],
    thresholds: &SelectionThresholds,
    epsilon: f32,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, loc) in locations.iter().enumerate() {
        if !qualifies(loc, thresholds, epsilon) {
            continue;
        }
        // Strict `<` keeps the first of equally close candidates.
        match best {
            Some(b) if loc.distance_to_closest_enemy >= locations[b].distance_to_closest_enemy => {}
            _ => best = Some(idx),
        }
    }
    best
}
