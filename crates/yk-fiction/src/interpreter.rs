//! The story interpreter.
//!
//! Walks a story top to bottom. Text and pauses go to the presenter, item
//! steps go to the inventory, and a game-over step stops the walk and is
//! handed back to the caller as [`Signal::GameOver`].

use log::{debug, warn};
use yk_core::character::Player;
use yk_core::story::{StepAction, StoryStep};

use crate::error::FictionResult;
use crate::inventory;
use crate::presenter::Presenter;

/// How a story (or anything that runs one) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Carry on playing.
    Continue,
    /// The scenario is over and the game must reset.
    GameOver,
}

impl Signal {
    /// Returns true for [`Signal::GameOver`].
    pub fn is_game_over(self) -> bool {
        self == Self::GameOver
    }
}

/// Run a story against the player.
pub fn run_story(
    steps: &[StoryStep],
    player: &mut Player,
    out: &mut dyn Presenter,
) -> FictionResult<Signal> {
    for step in steps {
        debug!("story step: {}", step.action);
        match &step.action {
            StepAction::Clear => out.clear()?,
            StepAction::Text(body) => out.paragraph(body, step.style)?,
            StepAction::Continue => out.pause_for_enter(step.style.space)?,
            StepAction::Grant(item) => inventory::grant(item.clone(), player, out)?,
            StepAction::Unequip(slot) => inventory::unequip(*slot, player, out)?,
            StepAction::GameOver => return Ok(Signal::GameOver),
            StepAction::Unrecognized(shape) => warn!("skipping unrecognized story step: {shape}"),
        }
    }
    Ok(Signal::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::ScriptedPresenter;
    use yk_core::item::{Potion, Slot, Weapon};

    #[test]
    fn runs_text_in_order() {
        let mut player = Player::new("Hero");
        let mut out = ScriptedPresenter::default();
        let story = vec![
            StoryStep::clear(),
            StoryStep::text("one"),
            StoryStep::pause(),
            StoryStep::text("two"),
        ];
        let signal = run_story(&story, &mut player, &mut out).unwrap();
        assert_eq!(signal, Signal::Continue);
        assert_eq!(out.transcript(), ["one", "two"]);
    }

    #[test]
    fn game_over_stops_the_walk() {
        let mut player = Player::new("Hero");
        let mut out = ScriptedPresenter::default();
        let story = vec![
            StoryStep::text("before"),
            StoryStep::game_over(),
            StoryStep::text("after"),
        ];
        let signal = run_story(&story, &mut player, &mut out).unwrap();
        assert!(signal.is_game_over());
        assert!(out.contains("before"));
        assert!(!out.contains("after"));
    }

    #[test]
    fn grants_reach_the_player() {
        let mut player = Player::new("Hero");
        let mut out = ScriptedPresenter::default();
        let story = vec![
            StoryStep::grant(Potion::new("Small Potion", 20)),
            StoryStep::grant(Weapon::new("Rusty Sword", 6)),
        ];
        run_story(&story, &mut player, &mut out).unwrap();
        assert_eq!(player.potions.len(), 1);
        assert_eq!(player.effective_attack(), 16);
    }

    #[test]
    fn unequip_step_and_sentinel_agree() {
        let mut out = ScriptedPresenter::default();
        let mut a = Player::new("Hero");
        let mut b = Player::new("Hero");
        a.equip_weapon(Weapon::new("Rusty Sword", 6));
        b.equip_weapon(Weapon::new("Rusty Sword", 6));
        run_story(&[StoryStep::unequip(Slot::Weapon)], &mut a, &mut out).unwrap();
        run_story(&[StoryStep::grant(Weapon::unequip())], &mut b, &mut out).unwrap();
        assert!(a.weapon.is_none());
        assert!(b.weapon.is_none());
        assert!(a.inventory.is_empty());
        assert!(b.inventory.is_empty());
    }

    #[test]
    fn unrecognized_steps_are_skipped() {
        let mut player = Player::new("Hero");
        let mut out = ScriptedPresenter::default();
        let story = vec![
            StoryStep::new(StepAction::Unrecognized("(\"continue\", true)".into())),
            StoryStep::text("still here"),
        ];
        assert_eq!(run_story(&story, &mut player, &mut out).unwrap(), Signal::Continue);
        assert!(out.contains("still here"));
    }
}
