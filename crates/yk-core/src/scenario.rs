//! Scenarios and the interplanetary travel graph.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content;
use crate::error::{CoreError, CoreResult};
use crate::planet::Planet;

/// Special item that opens the route from Mystara to Luminara.
pub const UNLOCK_ITEM: &str = "Holographic Cosmos Codex";

/// The planets of the Yolkaris system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetId {
    /// The home world.
    Yolkaris,
    /// The archive world.
    Mystara,
    /// The world of light. Locked until the Codex is found.
    Luminara,
}

impl PlanetId {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yolkaris => "Yolkaris",
            Self::Mystara => "Mystara",
            Self::Luminara => "Luminara",
        }
    }

    /// Planets reachable from this one. Luminara is only reachable from
    /// Mystara while the player carries the [`UNLOCK_ITEM`].
    pub fn destinations(&self, has_unlock_item: bool) -> Vec<PlanetId> {
        match self {
            Self::Yolkaris => vec![Self::Mystara],
            Self::Mystara if has_unlock_item => vec![Self::Yolkaris, Self::Luminara],
            Self::Mystara => vec![Self::Yolkaris],
            Self::Luminara => vec![Self::Yolkaris, Self::Mystara],
        }
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which planets exist in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Scenario 1: Yolkaris only.
    Homeworld,
    /// Scenario 2: Yolkaris, Mystara and Luminara.
    StarVoyage,
}

impl Scenario {
    /// Both scenarios in menu order.
    pub const ALL: [Scenario; 2] = [Scenario::Homeworld, Scenario::StarVoyage];

    /// Look up a scenario by its menu number.
    pub fn from_number(number: u32) -> CoreResult<Self> {
        match number {
            1 => Ok(Self::Homeworld),
            2 => Ok(Self::StarVoyage),
            other => Err(CoreError::UnknownScenario(other)),
        }
    }

    /// Menu number.
    pub fn number(&self) -> u32 {
        match self {
            Self::Homeworld => 1,
            Self::StarVoyage => 2,
        }
    }

    /// Menu title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Homeworld => "The Stolen Time Crystal (Yolkaris)",
            Self::StarVoyage => "Voyage Among the Stars (Yolkaris, Mystara, Luminara)",
        }
    }

    /// Planets in this scenario. The first one is where the player starts.
    pub fn planet_ids(&self) -> &'static [PlanetId] {
        match self {
            Self::Homeworld => &[PlanetId::Yolkaris],
            Self::StarVoyage => &[PlanetId::Yolkaris, PlanetId::Mystara, PlanetId::Luminara],
        }
    }

    /// Build fresh, unplaced planets for this scenario.
    pub fn build_planets(&self) -> Vec<(PlanetId, Planet)> {
        self.planet_ids()
            .iter()
            .map(|id| (*id, content::planet(*self, *id)))
            .collect()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_graph() {
        assert_eq!(PlanetId::Yolkaris.destinations(false), vec![PlanetId::Mystara]);
        assert_eq!(PlanetId::Yolkaris.destinations(true), vec![PlanetId::Mystara]);
        assert_eq!(PlanetId::Mystara.destinations(false), vec![PlanetId::Yolkaris]);
        assert_eq!(
            PlanetId::Mystara.destinations(true),
            vec![PlanetId::Yolkaris, PlanetId::Luminara]
        );
        assert_eq!(
            PlanetId::Luminara.destinations(false),
            vec![PlanetId::Yolkaris, PlanetId::Mystara]
        );
    }

    #[test]
    fn scenario_numbers() {
        assert_eq!(Scenario::from_number(1).unwrap(), Scenario::Homeworld);
        assert_eq!(Scenario::from_number(2).unwrap(), Scenario::StarVoyage);
        assert!(matches!(
            Scenario::from_number(3),
            Err(CoreError::UnknownScenario(3))
        ));
    }

    #[test]
    fn planet_names() {
        assert_eq!(PlanetId::Mystara.to_string(), "Mystara");
        assert_eq!(PlanetId::Luminara.name(), "Luminara");
    }

    #[test]
    fn scenario_planets() {
        let planets = Scenario::Homeworld.build_planets();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].1.name, "Yolkaris");

        let planets = Scenario::StarVoyage.build_planets();
        let names: Vec<_> = planets.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["Yolkaris", "Mystara", "Luminara"]);
    }
}
