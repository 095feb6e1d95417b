use log::info;
use yk_fiction::{GameConfig, GameSession};

use crate::terminal::{PresenterConfig, TerminalPresenter};

pub fn run(
    seed: Option<u64>,
    scenario: Option<u32>,
    name: Option<&str>,
    presenter: PresenterConfig,
) -> Result<(), String> {
    let mut config = GameConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(number) = scenario {
        config = config.with_scenario(super::scenario(number)?);
    }
    if let Some(name) = name {
        config = config.with_player_name(name);
    }

    let mut out = TerminalPresenter::new(presenter);
    let mut session = GameSession::new(config);

    match session.run(&mut out) {
        Ok(()) => Ok(()),
        Err(e) if e.is_end_of_input() => {
            info!("input closed, leaving the game");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
