//! Mutable state of one run: the player, the planets and the dice.

use log::info;
use rand::rngs::StdRng;
use yk_core::area::Area;
use yk_core::character::Player;
use yk_core::content::small_potion;
use yk_core::planet::Planet;
use yk_core::scenario::{PlanetId, Scenario};

use crate::error::FictionResult;

/// Everything that changes while a scenario is played.
#[derive(Debug)]
pub struct GameState {
    /// The scenario being played.
    pub scenario: Scenario,
    /// The player character.
    pub player: Player,
    /// Every planet of the scenario, placed and ready.
    pub planets: Vec<(PlanetId, Planet)>,
    /// Index into `planets` of the planet the player is on.
    pub current: usize,
    /// Random stream for placement and combat.
    pub rng: StdRng,
}

impl GameState {
    /// Build a fresh run: create the player with the starting kit, build
    /// the scenario's planets and place their areas.
    pub fn new(scenario: Scenario, player_name: &str, mut rng: StdRng) -> FictionResult<Self> {
        let mut player = Player::new(player_name);
        player.add_potion(small_potion());

        let mut planets = scenario.build_planets();
        for (_, planet) in &mut planets {
            planet.place_areas(&mut rng)?;
        }
        info!(
            "scenario {} set up for {player_name} with {} planet(s)",
            scenario.number(),
            planets.len()
        );

        Ok(Self {
            scenario,
            player,
            planets,
            current: 0,
            rng,
        })
    }

    /// Which planet the player is on.
    pub fn planet_id(&self) -> PlanetId {
        self.planets[self.current].0
    }

    /// The planet the player is on.
    pub fn planet(&self) -> &Planet {
        &self.planets[self.current].1
    }

    /// Mutable access to the planet the player is on.
    pub fn planet_mut(&mut self) -> &mut Planet {
        &mut self.planets[self.current].1
    }

    /// A planet of this scenario by id.
    pub fn planet_by_id(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|(pid, _)| *pid == id).map(|(_, p)| p)
    }

    /// The area under the player, if any.
    pub fn area_here(&self) -> Option<&Area> {
        let planet = self.planet();
        planet.area_at(planet.player_pos())
    }

    /// Move the player to another planet's landing tile. Returns false if
    /// the planet is not part of this scenario.
    pub fn land_on(&mut self, id: PlanetId) -> bool {
        let Some(index) = self.planets.iter().position(|(pid, _)| *pid == id) else {
            return false;
        };
        self.current = index;
        self.planet_mut().reset_player();
        true
    }
}
