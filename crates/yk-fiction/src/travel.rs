//! Flying between planets.

use log::info;
use yk_core::scenario::{PlanetId, UNLOCK_ITEM};
use yk_core::story::{Color, TextStyle};

use crate::error::FictionResult;
use crate::interaction;
use crate::interpreter::Signal;
use crate::presenter::Presenter;
use crate::state::GameState;

const LOADING_STEPS: usize = 3;

/// Planets reachable from where the player is, limited to this scenario.
pub fn destinations(state: &GameState) -> Vec<PlanetId> {
    let unlocked = state.player.has_item_named(UNLOCK_ITEM);
    state
        .planet_id()
        .destinations(unlocked)
        .into_iter()
        .filter(|id| state.planet_by_id(*id).is_some())
        .collect()
}

/// Offer the destinations and fly to the chosen one.
pub fn launch(state: &mut GameState, out: &mut dyn Presenter) -> FictionResult<Signal> {
    let options = destinations(state);
    if options.is_empty() {
        out.paragraph("There is nowhere to fly to.", TextStyle::default())?;
        return Ok(Signal::Continue);
    }

    let tight = TextStyle::tight();
    out.text("Destinations:", tight.with_space(1))?;
    for (i, id) in options.iter().enumerate() {
        out.text(&format!("  {}. {id}", i + 1), tight)?;
    }
    let allowed: Vec<usize> = (0..=options.len()).collect();
    let choice = out.choose_number("Where to? (0 to stay)", &allowed)?;
    if choice == 0 {
        return Ok(Signal::Continue);
    }
    fly_to(state, options[choice - 1], out)
}

/// Leave the current planet and land on `destination`.
pub fn fly_to(
    state: &mut GameState,
    destination: PlanetId,
    out: &mut dyn Presenter,
) -> FictionResult<Signal> {
    let from = state.planet_id();
    let blue = TextStyle::colored(Color::Blue);
    for line in &state.planet().travel.from {
        out.paragraph(line, blue)?;
    }

    out.text("Launching", tight_pause())?;
    for _ in 0..LOADING_STEPS {
        out.text(".", tight_pause())?;
    }

    if !state.land_on(destination) {
        return Ok(Signal::Continue);
    }
    info!("travelled from {from} to {destination}");

    out.clear()?;
    for line in &state.planet().travel.to {
        out.paragraph(line, blue)?;
    }
    interaction::on_enter(state, out)
}

fn tight_pause() -> TextStyle {
    TextStyle {
        space: 0,
        delay: 0.5,
        color: Some(Color::Blue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::ScriptedPresenter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use yk_core::content::cosmos_codex;
    use yk_core::position::Position;
    use yk_core::scenario::Scenario;

    fn voyage() -> GameState {
        GameState::new(Scenario::StarVoyage, "Hero", StdRng::seed_from_u64(4)).unwrap()
    }

    #[test]
    fn codex_unlocks_luminara() {
        let mut state = voyage();
        assert_eq!(destinations(&state), vec![PlanetId::Mystara]);
        state.land_on(PlanetId::Mystara);
        assert_eq!(destinations(&state), vec![PlanetId::Yolkaris]);
        state.player.add_item(cosmos_codex().into());
        assert_eq!(destinations(&state), vec![PlanetId::Yolkaris, PlanetId::Luminara]);
    }

    #[test]
    fn homeworld_has_nowhere_to_go() {
        let state = GameState::new(Scenario::Homeworld, "Hero", StdRng::seed_from_u64(4)).unwrap();
        assert!(destinations(&state).is_empty());
    }

    #[test]
    fn flight_lands_at_origin_and_runs_arrival() {
        let mut state = voyage();
        let mut out = ScriptedPresenter::new(["1"]);
        assert_eq!(launch(&mut state, &mut out).unwrap(), Signal::Continue);
        assert_eq!(state.planet_id(), PlanetId::Mystara);
        assert_eq!(state.planet().player_pos(), Position::ORIGIN);
        assert!(state.planet().is_visited(Position::ORIGIN));
        assert!(out.contains("The Starhopper shudders"));
        assert!(out.contains("Launching"));
        assert!(out.contains("Violet mist swallows"));
        assert!(out.contains("Welcome to Mystara."));
    }

    #[test]
    fn staying_put() {
        let mut state = voyage();
        let mut out = ScriptedPresenter::new(["0"]);
        launch(&mut state, &mut out).unwrap();
        assert_eq!(state.planet_id(), PlanetId::Yolkaris);
    }
}
