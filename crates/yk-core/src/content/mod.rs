//! Embedded scenario content.
//!
//! Every planet, area, character and item of both scenarios is built here
//! as plain data. Nothing is loaded from disk.

mod luminara;
mod mystara;
mod yolkaris;

use crate::item::{Potion, Spaceship, Special};
use crate::planet::Planet;
use crate::scenario::{PlanetId, Scenario, UNLOCK_ITEM};
use crate::story::{Color, StoryStep};

/// Title banner shown at the start of every run.
pub const TITLE_ART: &str = r"
 __   __    _ _              _
 \ \ / /__ | | | ____ _ _ __(_)___
  \ V / _ \| | |/ / _` | '__| / __|
   | | (_) | |   < (_| | |  | \__ \
   |_|\___/|_|_|\_\__,_|_|  |_|___/
";

/// Name of the item the Timekeeper is waiting for.
pub const QUEST_ITEM: &str = "The Time Crystal";

/// Build one planet of a scenario.
pub fn planet(scenario: Scenario, id: PlanetId) -> Planet {
    match id {
        PlanetId::Yolkaris => yolkaris::build(scenario),
        PlanetId::Mystara => mystara::build(),
        PlanetId::Luminara => luminara::build(),
    }
}

// ---------------------------------------------------------------------------
// Shared items
// ---------------------------------------------------------------------------

/// Heals 20.
pub fn small_potion() -> Potion {
    Potion::new("Small Potion", 20)
}

/// Heals 50.
pub fn medium_potion() -> Potion {
    Potion::new("Medium Potion", 50)
}

/// Heals 100.
pub fn large_potion() -> Potion {
    Potion::new("Large Potion", 100)
}

/// The quest item of both scenarios.
pub fn time_crystal() -> Special {
    Special::new(QUEST_ITEM)
        .with_description(
            "A fist-sized crystal that ticks softly, as if a tiny clock were \
             trapped inside. The seconds of Yolkaris flow from it.",
        )
        .with_received("You hold The Time Crystal. Its steady ticking warms your palm.")
}

/// The item that unlocks the route to Luminara.
pub fn cosmos_codex() -> Special {
    Special::new(UNLOCK_ITEM)
        .with_description("A palm-sized prism that projects the star lanes of the system.")
        .with_received("The Holographic Cosmos Codex flickers to life in your hands.")
        .with_story(vec![
            text(
                "You twist the Codex. A web of blue light unfolds above it: Yolkaris, \
                 Mystara, and far beyond them a pale, shimmering world marked Luminara.",
            )
            .color(Color::Blue),
            text("Your ship's navigation computer can now plot a course there."),
        ])
}

/// The ship that carries the player between planets.
pub fn starhopper() -> Spaceship {
    Spaceship::new(
        "Starhopper",
        "A small, egg-shaped scout ship with patched wings and a warm cockpit.",
    )
}

// ---------------------------------------------------------------------------
// Script helpers
// ---------------------------------------------------------------------------

pub(crate) fn text(body: impl Into<String>) -> StoryStep {
    StoryStep::text(body)
}

pub(crate) fn say(speaker: &str, line: &str) -> StoryStep {
    StoryStep::text(format!("{speaker}: \"{line}\"")).color(Color::Cyan)
}

pub(crate) fn pause() -> StoryStep {
    StoryStep::pause()
}

pub(crate) fn lines(paragraphs: &[&str]) -> Vec<String> {
    paragraphs.iter().map(|p| p.to_string()).collect()
}
