//! Squad selection: regroup with teammates (fallback)
//!
//! Locations are ranked by distance to the closest teammate. The first ready
//! location inside `(min_friend_cluster_distance, max_friend_distance]` that
//! also keeps the enemy floor wins. If none does, the globally closest-to-friend
//! location is returned regardless of cooldown, so selection never comes up empty.

use super::config::SelectionThresholds;
use crate::models::SpawnLocation;

/// Result of a squad pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquadPick {
    pub index: usize,
    /// `true` when no location qualified and the last-resort rule applied.
    pub last_resort: bool,
}

/// Location indices ordered by ascending friend distance (stable).
///
/// The slice itself is left untouched so later passes see registration order.
pub fn order_by_friend_distance(locations: &[SpawnLocation]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..locations.len()).collect();
    order.sort_by(|&a, &b| {
        locations[a].distance_to_closest_friend.total_cmp(&locations[b].distance_to_closest_friend)
    });
    order
}

/// Every qualifying location, closest to a teammate first.
pub fn squad_candidates(
    locations: &[SpawnLocation],
    thresholds: &SelectionThresholds,
    epsilon: f32,
) -> Vec<usize> {
    let enemy_floor = thresholds.squad_enemy_floor();
    order_by_friend_distance(locations)
        .into_iter()
        .take_while(|&i| locations[i].distance_to_closest_friend <= thresholds.max_friend_distance)
        .filter(|&i| {
            let loc = &locations[i];
            loc.distance_to_closest_friend > thresholds.min_friend_cluster_distance
                && loc.distance_to_closest_enemy > enemy_floor
                && loc.is_ready(epsilon)
        })
        .collect()
}

/// `None` only for an empty slice.
pub fn select_squad(
    locations: &[SpawnLocation],
    thresholds: &SelectionThresholds,
    epsilon: f32,
) -> Option<SquadPick> {
    if let Some(&index) = squad_candidates(locations, thresholds, epsilon).first() {
        return Some(SquadPick { index, last_resort: false });
    }

    order_by_friend_distance(locations)
        .first()
        .map(|&index| SquadPick { index, last_resort: true })
}
