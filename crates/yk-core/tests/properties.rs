//! Integration tests for yk-core (properties).

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use yk_core::health::{Health, MAX_PLAYER_HEALTH};
use yk_core::{Direction, Planet, Position, Scenario};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::South),
        Just(Direction::East),
        Just(Direction::West),
    ]
}

fn placed(scenario: Scenario, seed: u64) -> Vec<Planet> {
    let mut rng = StdRng::seed_from_u64(seed);
    scenario
        .build_planets()
        .into_iter()
        .map(|(_, mut planet)| {
            planet.place_areas(&mut rng).unwrap();
            planet
        })
        .collect()
}

proptest! {
    #[test]
    fn player_never_leaves_the_grid(
        width in 1i32..8,
        height in 1i32..8,
        moves in prop::collection::vec(direction(), 0..64),
    ) {
        let mut planet = Planet::new("Test", "", width, height);
        for direction in moves {
            let before = planet.player_pos();
            match planet.move_player(direction) {
                Some(pos) => {
                    prop_assert_eq!(pos, before.step(direction));
                    prop_assert_eq!(planet.player_prev_pos(), before);
                }
                None => prop_assert_eq!(planet.player_pos(), before),
            }
            prop_assert!(planet.contains(planet.player_pos()));
        }
    }

    #[test]
    fn visited_tiles_stay_visited(
        marks in prop::collection::vec((0i32..4, 0i32..3), 0..32),
    ) {
        let mut planet = Planet::new("Test", "", 4, 3);
        let mut seen: Vec<Position> = Vec::new();
        for (x, y) in marks {
            let pos = Position::new(x, y);
            let fresh = planet.mark_visited(pos);
            prop_assert_eq!(fresh, !seen.contains(&pos));
            if fresh {
                seen.push(pos);
            }
            for earlier in &seen {
                prop_assert!(planet.is_visited(*earlier));
            }
            prop_assert_eq!(planet.visited_count(), seen.len());
        }
    }

    #[test]
    fn health_stays_in_bounds(deltas in prop::collection::vec(-150i32..150, 0..32)) {
        let mut health = Health::new(MAX_PLAYER_HEALTH);
        for delta in deltas {
            health.adjust(delta);
            prop_assert!((0..=MAX_PLAYER_HEALTH).contains(&health.current()));
        }
    }

    #[test]
    fn placement_puts_every_area_on_its_own_tile(seed in any::<u64>()) {
        for scenario in Scenario::ALL {
            for planet in placed(scenario, seed) {
                let mut tiles: Vec<Position> = Vec::new();
                for area in &planet.areas {
                    let pos = planet.position_of(&area.name).unwrap();
                    prop_assert!(planet.contains(pos));
                    prop_assert!(!tiles.contains(&pos));
                    tiles.push(pos);
                    if let Some(fixed) = area.fixed_position {
                        prop_assert_eq!(pos, fixed);
                    }
                }
                prop_assert!(planet.area_at(Position::ORIGIN).is_some());
            }
        }
    }
}

fn layout(planets: &[Planet]) -> Vec<String> {
    planets
        .iter()
        .flat_map(|p| {
            p.areas
                .iter()
                .map(|a| format!("{}: {}@{:?}", p.name, a.name, p.position_of(&a.name)))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn same_seed_same_layout() {
    let a = placed(Scenario::StarVoyage, 42);
    let b = placed(Scenario::StarVoyage, 42);
    assert_eq!(layout(&a), layout(&b));
}
