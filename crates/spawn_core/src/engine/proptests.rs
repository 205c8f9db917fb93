use super::aggressive::{qualifies, select_aggressive};
use super::config::{SelectionThresholds, SpawnConfig};
use super::distance::compute_distances;
use super::selector::{SelectionMode, SpawnSelector};
use super::squad::select_squad;
use crate::models::{Combatant, Position, SpawnLocation, Team};
use proptest::prelude::*;

fn team_strategy() -> impl Strategy<Value = Team> {
    prop_oneof![Just(Team::None), Just(Team::Blue), Just(Team::Red)]
}

fn position_strategy() -> impl Strategy<Value = Position> {
    (-50.0f32..50.0, -5.0f32..5.0, -50.0f32..50.0).prop_map(|(x, y, z)| Position::new(x, y, z))
}

fn cooldown_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0f32), 0.1f32..3.0]
}

fn locations_strategy() -> impl Strategy<Value = Vec<SpawnLocation>> {
    prop::collection::vec((position_strategy(), cooldown_strategy()), 1..8).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (pos, cd))| SpawnLocation::new(i as u32, pos).with_cooldown(cd))
            .collect()
    })
}

fn combatants_strategy() -> impl Strategy<Value = Vec<Combatant>> {
    prop::collection::vec(
        (team_strategy(), position_strategy(), any::<bool>(), any::<bool>()),
        0..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (team, pos, disabled, dead))| {
                let mut c = Combatant::new(i as u32, team, pos);
                c.disabled = disabled;
                c.dead = dead;
                c
            })
            .collect()
    })
}

fn thresholds_strategy() -> impl Strategy<Value = SelectionThresholds> {
    (0.0f32..30.0, 0.0f32..5.0, 5.0f32..60.0).prop_map(|(min_enemy, min_friend, max_friend)| {
        SelectionThresholds {
            min_enemy_distance: min_enemy,
            min_friend_cluster_distance: min_friend,
            max_friend_distance: max_friend,
            squad_min_enemy_distance: None,
        }
    })
}

proptest! {
    /// Property: any non-empty location set yields exactly one of its own locations
    #[test]
    fn prop_selection_never_empty(
        locations in locations_strategy(),
        combatants in combatants_strategy(),
        thresholds in thresholds_strategy(),
        team in team_strategy(),
    ) {
        let ids: Vec<_> = locations.iter().map(|l| l.id).collect();
        let config = SpawnConfig { thresholds, ..SpawnConfig::default() };
        let mut selector = SpawnSelector::new(locations, config).unwrap();

        let pick = selector.select_spawn_location(team, &combatants).unwrap();
        prop_assert!(ids.contains(&pick.location_id));
    }

    /// Property: identical inputs choose the identical location
    #[test]
    fn prop_selection_deterministic(
        locations in locations_strategy(),
        combatants in combatants_strategy(),
        thresholds in thresholds_strategy(),
        team in team_strategy(),
    ) {
        let config = SpawnConfig { thresholds, ..SpawnConfig::default() };
        let mut a = SpawnSelector::new(locations.clone(), config).unwrap();
        let mut b = SpawnSelector::new(locations, config).unwrap();

        for _ in 0..3 {
            let pa = a.select_spawn_location(team, &combatants).unwrap();
            let pb = b.select_spawn_location(team, &combatants).unwrap();
            prop_assert_eq!(pa, pb);
        }
    }

    /// Property: raising the enemy floor never grows the aggressive qualifying set
    #[test]
    fn prop_enemy_floor_monotonic(
        mut locations in locations_strategy(),
        combatants in combatants_strategy(),
        thresholds in thresholds_strategy(),
        raise in 0.0f32..40.0,
        team in team_strategy(),
    ) {
        compute_distances(&mut locations, &combatants, team);
        let eps = SpawnConfig::default().ready_epsilon;
        let raised = SelectionThresholds {
            min_enemy_distance: thresholds.min_enemy_distance + raise,
            ..thresholds
        };

        for loc in &locations {
            if qualifies(loc, &raised, eps) {
                prop_assert!(qualifies(loc, &thresholds, eps));
            }
        }
    }

    /// Property: cooling locations only win through the last-resort rule
    #[test]
    fn prop_cooldown_excluded_outside_last_resort(
        mut locations in locations_strategy(),
        combatants in combatants_strategy(),
        thresholds in thresholds_strategy(),
        team in team_strategy(),
    ) {
        compute_distances(&mut locations, &combatants, team);
        let eps = SpawnConfig::default().ready_epsilon;

        if let Some(i) = select_aggressive(&locations, &thresholds, eps) {
            prop_assert!(locations[i].is_ready(eps));
        }

        let pick = select_squad(&locations, &thresholds, eps).unwrap();
        if !pick.last_resort {
            prop_assert!(locations[pick.index].is_ready(eps));
        } else {
            // Last resort is the closest-to-friend location overall.
            let min = locations
                .iter()
                .map(|l| l.distance_to_closest_friend)
                .fold(f32::INFINITY, f32::min);
            prop_assert!(locations[pick.index].distance_to_closest_friend <= min);
        }
    }

    /// Property: when aggressive mode finds nothing, the result is squad mode's pick
    #[test]
    fn prop_fallback_matches_squad(
        locations in locations_strategy(),
        combatants in combatants_strategy(),
        thresholds in thresholds_strategy(),
        team in team_strategy(),
    ) {
        let config = SpawnConfig { thresholds, ..SpawnConfig::default() };
        let mut evaluated = locations.clone();
        compute_distances(&mut evaluated, &combatants, team);

        let aggressive = select_aggressive(&evaluated, &thresholds, config.ready_epsilon);
        let squad = select_squad(&evaluated, &thresholds, config.ready_epsilon).unwrap();

        let mut selector = SpawnSelector::new(locations, config).unwrap();
        let pick = selector.select_spawn_location(team, &combatants).unwrap();

        match aggressive {
            Some(i) => {
                prop_assert_eq!(pick.mode, SelectionMode::Aggressive);
                prop_assert_eq!(pick.location_id, evaluated[i].id);
            }
            None => {
                prop_assert_ne!(pick.mode, SelectionMode::Aggressive);
                prop_assert_eq!(pick.location_id, evaluated[squad.index].id);
            }
        }
    }
}

#[test]
fn test_last_resort_may_return_cooling_location() {
    // The single exception to cooldown exclusion: unique closest-to-friend location.
    let mut locations = vec![
        SpawnLocation::new(1, Position::new(0.0, 0.0, 0.0)).with_cooldown(1.5),
        SpawnLocation::new(2, Position::new(45.0, 0.0, 0.0)).with_cooldown(1.5),
    ];
    let combatants = vec![Combatant::new(1, Team::Blue, Position::new(3.0, 0.0, 0.0))];
    compute_distances(&mut locations, &combatants, Team::Blue);

    let eps = SpawnConfig::default().ready_epsilon;
    let thresholds = SelectionThresholds::default();
    assert_eq!(select_aggressive(&locations, &thresholds, eps), None);

    let pick = select_squad(&locations, &thresholds, eps).unwrap();
    assert!(pick.last_resort);
    assert_eq!(pick.index, 0);
    assert!(!locations[0].is_ready(eps));
}

#[test]
fn test_scenarios_from_fixed_distances() {
    let eps = SpawnConfig::default().ready_epsilon;
    let locations = vec![
        SpawnLocation::new(1, Position::zeros()).with_distances(5.0, 15.0),
        SpawnLocation::new(2, Position::zeros()).with_distances(40.0, 3.0),
        SpawnLocation::new(3, Position::zeros()).with_distances(5.0, 15.0).with_cooldown(2.0),
    ];

    let base = SelectionThresholds {
        min_enemy_distance: 10.0,
        min_friend_cluster_distance: 2.0,
        max_friend_distance: 30.0,
        squad_min_enemy_distance: None,
    };
    assert_eq!(select_aggressive(&locations, &base, eps), Some(0));

    let strict = SelectionThresholds { min_enemy_distance: 20.0, ..base };
    assert_eq!(select_aggressive(&locations, &strict, eps), None);
    let pick = select_squad(&locations, &strict, eps).unwrap();
    assert_eq!(pick.index, 0);
    assert!(!pick.last_resort);
}
