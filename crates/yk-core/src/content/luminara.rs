//! Luminara, the hidden world of light in scenario 2.

use crate::area::Area;
use crate::character::{Enemy, EnemyStories, Neutral, NeutralStories};
use crate::item::Book;
use crate::planet::Planet;
use crate::story::{Color, StoryStep};

use super::{QUEST_ITEM, large_potion, lines, pause, say, text, time_crystal};

pub(super) fn build() -> Planet {
    Planet::new(
        "Luminara",
        "A radiant world where the ground glows and the sky never darkens.",
        3,
        2,
    )
    .with_area(arrival_plaza())
    .with_area(prism_spire())
    .with_area(glowing_gardens())
    .with_area(radiant_observatory())
    .with_travel(
        lines(&[
            "The Codex flares. Space folds around the Starhopper, and a blinding white \
             world blooms ahead. You land on Luminara, shielding your eyes.",
        ]),
        lines(&["You leave the endless daylight of Luminara behind."]),
    )
}

fn arrival_plaza() -> Area {
    Area::new(
        "Arrival Plaza",
        vec![
            StoryStep::clear(),
            text("Welcome to Luminara.").color(Color::Yellow),
            text(
                "The plaza is paved with glowing white stone. A spire of prisms towers \
                 somewhere nearby, bending the light into colors you have never seen.",
            ),
        ],
        vec![text("The plaza glows warmly beneath your feet.")],
    )
    .at(0, 0)
}

fn prism_spire() -> Area {
    Area::new(
        "Prism Spire",
        vec![text(
            "The spire rises in a helix of prisms. At its foot, a tall figure in a \
             black cloak is prying at the crystals.",
        )],
        vec![text("The Prism Spire blazes with light.")],
    )
    .with_enemy(Enemy::new(
        "Phineas Blackthorn",
        60,
        22,
        10,
        EnemyStories {
            initial: vec![
                say(
                    "Phineas Blackthorn",
                    "You followed me across the stars? Then you will fall among them.",
                )
                .color(Color::Red),
            ],
            revisit: vec![say("Phineas Blackthorn", "The light here suits me. Leave.")],
            mid_fight: vec![say("Phineas Blackthorn", "Back again? You are persistent.")],
            won: vec![
                text("Phineas Blackthorn crumples against the spire.").color(Color::Green),
                StoryStep::grant(time_crystal()),
                text(format!(
                    "Carry {QUEST_ITEM} home to the Timekeeper on Yolkaris."
                )),
            ],
            lost: vec![
                text("The light fades from your eyes.").color(Color::Red),
                pause(),
                StoryStep::game_over(),
            ],
            defeated: vec![text("The spire hums, untroubled now.")],
        },
    ))
}

fn glowing_gardens() -> Area {
    Area::new(
        "Glowing Gardens",
        vec![text(
            "Flowers of living light bob on slender stems. A tiny sprite flits from \
             bloom to bloom.",
        )],
        vec![text("The flowers turn to follow you.")],
    )
    .with_neutral(Neutral::new(
        "Lumen Sprite",
        NeutralStories {
            initial: vec![
                say("Lumen Sprite", "A shadow-maker! How exciting! Drink this, you look tired."),
                StoryStep::grant(large_potion()),
            ],
            revisit: vec![say("Lumen Sprite", "Hello again, shadow-maker!")],
            quest_complete: None,
        },
    ))
}

fn radiant_observatory() -> Area {
    Area::new(
        "Radiant Observatory",
        vec![text(
            "A domed observatory of glass. Great lenses track stars that are invisible \
             in the endless day.",
        )],
        vec![text("The lenses of the observatory turn slowly overhead.")],
    )
    .with_item(Book::new(
        "Journal of Phineas Blackthorn",
        "A black notebook, its pages crammed with frantic handwriting.",
        vec![
            text(
                "\"Day 12. The crystal does not work here. Time on Luminara is light, not motion.\"",
            ),
            text("\"Perhaps the Timekeeper was right. Perhaps it only beats for Yolkaris.\"")
                .color(Color::Grey),
        ],
    ))
    .with_item(large_potion())
}
