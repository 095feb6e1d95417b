//! The interaction controller: what happens when the player steps onto a
//! tile.
//!
//! The tile's visited state is read once on entry and drives every branch
//! below it, even though the tile is marked visited right after the area
//! story plays.
//!
//! 1. Area story: initial on a first visit, revisit otherwise.
//! 2. Enemy, if any: initial, defeated, mid-fight or revisit story, then an
//!    offer to fight unless it is already beaten.
//! 3. Neutral, if any and not guarded by a living enemy: initial on a first
//!    visit, quest-complete when the player carries the quest item, revisit
//!    otherwise.

use log::{debug, warn};
use yk_core::character::Enemy;
use yk_core::story::{Color, Story, TextStyle};
use yk_mechanics::{Encounter, RoundOutcome};

use crate::error::FictionResult;
use crate::interpreter::{Signal, run_story};
use crate::presenter::Presenter;
use crate::state::GameState;

/// Whether play continues past the enemy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    /// No enemy in the way; go on to the neutral.
    Open,
    /// The player left the tile.
    Closed,
    /// The scenario ended.
    Over,
}

/// Run the interaction for the player's current tile.
pub fn on_enter(state: &mut GameState, out: &mut dyn Presenter) -> FictionResult<Signal> {
    let pos = state.planet().player_pos();
    let Some(index) = state.planet().area_index_at(pos) else {
        out.paragraph(
            "Nothing but open ground stretches around you.",
            TextStyle::colored(Color::Grey),
        )?;
        return Ok(Signal::Continue);
    };

    let first_visit = !state.planet().is_visited(pos);
    let area = &state.planet().areas[index];
    debug!("entering {} at {pos} (first visit: {first_visit})", area.name);
    let story = if first_visit {
        area.story_initial.clone()
    } else {
        area.story_revisit.clone()
    };
    if run_story(&story, &mut state.player, out)?.is_game_over() {
        return Ok(Signal::GameOver);
    }
    state.planet_mut().mark_visited(pos);

    match enemy_step(state, index, first_visit, out)? {
        Gate::Open => neutral_step(state, index, first_visit, out),
        Gate::Closed => Ok(Signal::Continue),
        Gate::Over => Ok(Signal::GameOver),
    }
}

fn enemy_step(
    state: &mut GameState,
    index: usize,
    first_visit: bool,
    out: &mut dyn Presenter,
) -> FictionResult<Gate> {
    let Some(enemy) = state.planet().areas[index].enemy.as_ref() else {
        return Ok(Gate::Open);
    };

    let (story, offer) = if first_visit {
        (enemy.stories.initial.clone(), true)
    } else if enemy.is_defeated() {
        (enemy.stories.defeated.clone(), false)
    } else if enemy.fought {
        (enemy.stories.mid_fight.clone(), true)
    } else {
        (enemy.stories.revisit.clone(), true)
    };
    let stats = enemy_stats(enemy);

    if run_story(&story, &mut state.player, out)?.is_game_over() {
        return Ok(Gate::Over);
    }
    if !offer {
        return Ok(Gate::Open);
    }

    out.text(&stats, TextStyle::colored(Color::Red))?;
    fight(state, index, out)
}

fn enemy_stats(enemy: &Enemy) -> String {
    format!(
        "{}: health {}, attack {}, defense {}",
        enemy.name,
        enemy.health.current(),
        enemy.attack,
        enemy.defense
    )
}

fn fight(state: &mut GameState, index: usize, out: &mut dyn Presenter) -> FictionResult<Gate> {
    if out.choose_option("Fight or retreat?", &["fight", "retreat"])? == 1 {
        retreat(state, out)?;
        return Ok(Gate::Closed);
    }

    let mut encounter = Encounter::new();
    loop {
        let GameState {
            player,
            planets,
            current,
            rng,
            ..
        } = &mut *state;
        let Some(enemy) = planets[*current].1.areas[index].enemy.as_mut() else {
            return Ok(Gate::Open);
        };
        let record = encounter.next_round(player, enemy, rng)?;
        out.text(&record.to_string(), TextStyle::tight())?;

        match record.outcome {
            RoundOutcome::Won => {
                let story = enemy.stories.won.clone();
                return match run_story(&story, player, out)? {
                    Signal::GameOver => Ok(Gate::Over),
                    Signal::Continue => Ok(Gate::Open),
                };
            }
            RoundOutcome::Lost => {
                let story = enemy.stories.lost.clone();
                if !run_story(&story, player, out)?.is_game_over() {
                    warn!("lost story for {} does not end the game", record.enemy);
                }
                return Ok(Gate::Over);
            }
            RoundOutcome::Ongoing => {
                if out.choose_option("Continue fighting or flee?", &["continue", "flee"])? == 1 {
                    retreat(state, out)?;
                    return Ok(Gate::Closed);
                }
            }
        }
    }
}

fn retreat(state: &mut GameState, out: &mut dyn Presenter) -> FictionResult<()> {
    state.planet_mut().return_to_previous();
    debug!("retreated to {}", state.planet().player_pos());
    out.paragraph(
        "You retreat to where you came from.",
        TextStyle::colored(Color::Yellow),
    )?;
    Ok(())
}

fn neutral_step(
    state: &mut GameState,
    index: usize,
    first_visit: bool,
    out: &mut dyn Presenter,
) -> FictionResult<Signal> {
    let Some(neutral) = state.planet().areas[index].neutral.as_ref() else {
        return Ok(Signal::Continue);
    };
    let story: Story = if first_visit {
        neutral.stories.initial.clone()
    } else if let Some(quest) = neutral.quest_story_for(&state.player) {
        debug!("{} receives the quest item", neutral.name);
        quest.clone()
    } else {
        neutral.stories.revisit.clone()
    };
    run_story(&story, &mut state.player, out)
}
