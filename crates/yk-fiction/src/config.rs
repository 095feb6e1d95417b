//! Configuration for a game session.

use yk_core::scenario::Scenario;

/// Settings that shape a run. Every preset field skips the matching setup
/// prompt, on the first start and on every reset.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible placement and combat.
    pub seed: Option<u64>,
    /// Scenario to play without asking.
    pub scenario: Option<Scenario>,
    /// Player name to use without asking.
    pub player_name: Option<String>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preselect the scenario.
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Preselect the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert!(cfg.seed.is_none());
        assert!(cfg.scenario.is_none());
        assert!(cfg.player_name.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(123)
            .with_scenario(Scenario::StarVoyage)
            .with_player_name("Nova");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.scenario, Some(Scenario::StarVoyage));
        assert_eq!(cfg.player_name.as_deref(), Some("Nova"));
    }
}
