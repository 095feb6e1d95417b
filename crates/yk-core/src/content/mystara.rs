//! Mystara, the archive world of scenario 2.

use crate::area::Area;
use crate::character::{Enemy, EnemyStories, Neutral, NeutralStories};
use crate::item::{Armour, Book, Weapon};
use crate::planet::Planet;
use crate::story::{Color, StoryStep};

use super::{cosmos_codex, lines, medium_potion, pause, say, small_potion, text};

pub(super) fn build() -> Planet {
    Planet::new(
        "Mystara",
        "A misty violet world of ancient libraries and drifting stone islands.",
        3,
        3,
    )
    .with_area(landing_pad())
    .with_area(old_citadel())
    .with_area(mistwood())
    .with_area(crystal_caverns())
    .with_area(floating_market())
    .with_travel(
        lines(&[
            "Violet mist swallows the Starhopper. When it clears, stone islands drift \
             past the viewport and you set down on a worn landing pad.",
        ]),
        lines(&[
            "You climb out of the mists of Mystara. The drifting islands fall away \
             beneath you.",
        ]),
    )
}

fn landing_pad() -> Area {
    Area::new(
        "Misty Landing Pad",
        vec![
            StoryStep::clear(),
            text("Welcome to Mystara.").color(Color::Magenta),
            text(
                "The landing pad is cracked and overgrown with glowing moss. In the \
                 distance the spires of an old citadel rise out of the fog.",
            ),
        ],
        vec![text("The Starhopper waits on the mossy landing pad.")],
    )
    .at(0, 0)
}

fn old_citadel() -> Area {
    Area::new(
        "Old Citadel",
        vec![text(
            "Endless shelves of scrolls and crystal tablets climb into the dark of the \
             citadel's great hall.",
        )],
        vec![text("Dust motes dance in the quiet of the Old Citadel.")],
    )
    .with_neutral(Neutral::new(
        "Archivist Orin",
        NeutralStories {
            initial: vec![
                say(
                    "Archivist Orin",
                    "A visitor from Yolkaris? And you seek the road to Luminara... Few \
                     have asked for that in a thousand years.",
                ),
                say(
                    "Archivist Orin",
                    "This Codex holds every star lane we ever charted. Guard it well.",
                ),
                StoryStep::grant(cosmos_codex()),
                pause(),
            ],
            revisit: vec![say(
                "Archivist Orin",
                "Use the Codex wisely. And return it some day, if you can.",
            )],
            quest_complete: None,
        },
    ))
    .with_item(Book::new(
        "Star Charts of Mystara",
        "A heavy atlas of faded star charts.",
        vec![
            text("Most of the charts are faded beyond reading."),
            text(
                "One page, freshly inked, shows a path from Mystara to a bright world \
                 labelled only: \"Luminara - open with the Codex\".",
            )
            .color(Color::Blue),
        ],
    ))
}

fn mistwood() -> Area {
    Area::new(
        "Mistwood",
        vec![text(
            "Pale trees loom out of thick fog. Something moves between them, too fast \
             to follow.",
        )],
        vec![text("The fog of the Mistwood curls around your ankles again.")],
    )
    .with_enemy(Enemy::new(
        "Shadow Stalker",
        40,
        14,
        6,
        EnemyStories {
            initial: vec![
                text("A creature of smoke and teeth uncoils from the mist.").color(Color::Red),
            ],
            revisit: vec![text("The Shadow Stalker watches you from the fog.")],
            mid_fight: vec![text(
                "The Shadow Stalker hisses. Its wounds have not closed.",
            )],
            won: vec![
                text("The Shadow Stalker dissolves into drifting smoke.").color(Color::Green),
            ],
            lost: vec![
                text("The mist closes over you.").color(Color::Red),
                pause(),
                StoryStep::game_over(),
            ],
            defeated: vec![text("The Mistwood is silent now.")],
        },
    ))
    .with_item(
        Weapon::new("Starsteel Saber", 26)
            .with_description("A curved blade forged from a fallen star. It hums when swung."),
    )
}

fn crystal_caverns() -> Area {
    Area::new(
        "Crystal Caverns",
        vec![text(
            "Violet crystals light a maze of caverns from within. Your footsteps echo \
             a hundred times.",
        )],
        vec![text("The caverns glow softly as you return.")],
    )
    .with_item(medium_potion())
    .with_item(
        Armour::new("Moonstone Mail", 28)
            .with_description("Links of pale moonstone, cool to the touch."),
    )
}

fn floating_market() -> Area {
    Area::new(
        "Floating Market",
        vec![text(
            "Stalls hang from a cluster of drifting stone islands, linked by rope \
             bridges. Merchants call out in a dozen tongues.",
        )],
        vec![text("The market bustles as ever.")],
    )
    .with_neutral(Neutral::new(
        "Merchant Zara",
        NeutralStories {
            initial: vec![
                say(
                    "Merchant Zara",
                    "New face! First customers get a free sample. Don't tell the others.",
                ),
                StoryStep::grant(medium_potion()),
            ],
            revisit: vec![say("Merchant Zara", "Sold out, friend. Come back next moon.")],
            quest_complete: None,
        },
    ))
    .with_item(small_potion())
}
