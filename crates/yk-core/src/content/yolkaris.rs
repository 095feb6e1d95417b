//! Yolkaris, the home world. Present in both scenarios.

use crate::area::Area;
use crate::character::{Enemy, EnemyStories, Neutral, NeutralStories};
use crate::item::{Armour, Book, Generic, Weapon};
use crate::planet::Planet;
use crate::scenario::Scenario;
use crate::story::{Color, Story, StoryStep};

use super::{
    QUEST_ITEM, large_potion, lines, medium_potion, pause, say, small_potion, starhopper, text,
    time_crystal,
};

pub(super) fn build(scenario: Scenario) -> Planet {
    Planet::new(
        "Yolkaris",
        "A warm, golden planet of rolling hills, windmills and clock towers.",
        4,
        2,
    )
    .with_area(capital_city(scenario))
    .with_area(feathered_forest())
    .with_area(windmill_farm())
    .with_area(crystal_hills(scenario))
    .with_area(sunny_meadows())
    .with_area(whispering_lake())
    .with_travel(
        lines(&[
            "The golden curve of Yolkaris fills the viewport. You glide down through \
             warm clouds and settle beside the clock towers of the Capital City.",
        ]),
        lines(&[
            "The Starhopper shudders, then lifts. Below you the windmills of Yolkaris \
             shrink to specks as the sky turns from gold to black.",
        ]),
    )
}

fn capital_city(scenario: Scenario) -> Area {
    Area::new(
        "Capital City",
        vec![
            StoryStep::clear(),
            text("Welcome to the Capital City of Yolkaris!").color(Color::Yellow),
            text(
                "Cobbled streets wind between tall clock towers. Every clock in the city \
                 has stopped at the same minute, and the townsfolk whisper nervously in \
                 the squares.",
            ),
        ],
        vec![text(
            "You are back in the Capital City. The frozen clock hands still point at \
             the same minute.",
        )],
    )
    .at(0, 0)
    .with_neutral(timekeeper(scenario))
    .with_item(medium_potion())
}

fn timekeeper(scenario: Scenario) -> Neutral {
    let initial: Story = match scenario {
        Scenario::Homeworld => vec![
            text("An old man in a long coat covered in tiny gears hurries towards you."),
            say(
                "Timekeeper",
                "Thank the stars, a traveller! Phineas Blackthorn has stolen The Time \
                 Crystal from the great clock. Without it, time on Yolkaris will grind \
                 to a halt.",
            ),
            say(
                "Timekeeper",
                "He was last seen heading for the Crystal Hills. Find better gear before \
                 you face him, and bring the crystal back to me.",
            ),
            pause(),
        ],
        Scenario::StarVoyage => vec![
            text("An old man in a long coat covered in tiny gears hurries towards you."),
            say(
                "Timekeeper",
                "Phineas Blackthorn has stolen The Time Crystal and fled Yolkaris \
                 altogether. My instruments place him on Luminara, the world of light.",
            ),
            say(
                "Timekeeper",
                "No ship knows the way there. The archivists of Mystara keep the old star \
                 charts. Take my Starhopper, and bring the crystal home.",
            ),
            StoryStep::grant(starhopper()),
            pause(),
        ],
    };

    Neutral::new(
        "Timekeeper",
        NeutralStories {
            initial,
            revisit: vec![say(
                "Timekeeper",
                "Tick, tock, traveller. Every minute counts. Bring me The Time Crystal!",
            )],
            quest_complete: Some(vec![
                StoryStep::clear(),
                say("Timekeeper", "You found it! You truly found it!").color(Color::Green),
                text(
                    "The Timekeeper sets The Time Crystal into the heart of the great \
                     clock. With a deep chime the hands lurch forward, and all across \
                     the city the clocks begin to tick again.",
                ),
                text("Yolkaris is saved. Thank you for playing!").color(Color::Yellow),
                pause(),
                StoryStep::game_over(),
            ]),
        },
    )
    .with_quest_item(time_crystal())
}

fn feathered_forest() -> Area {
    Area::new(
        "Feathered Forest",
        vec![
            text(
                "Trees with soft, feather-like leaves sway above you. Sunlight falls \
                 through them in golden threads.",
            ),
            text("Something glints among the roots. Perhaps worth a search."),
        ],
        vec![text("The feathered trees rustle a quiet welcome back.")],
    )
    .with_item(
        Weapon::new("Feathered Blade", 18)
            .with_description("A light, razor-sharp sword with a hilt wrapped in golden feathers."),
    )
    .with_item(Book::new(
        "Legends of Yolkaris",
        "A leather-bound book of old tales.",
        vec![
            text("You open the book to a well-worn page."),
            text(
                "\"Long ago the first Timekeeper caught a falling star and carved from it \
                 a crystal that keeps the heartbeat of the world. Whoever holds it holds \
                 the hours of Yolkaris.\"",
            )
            .color(Color::Magenta),
        ],
    ))
}

fn windmill_farm() -> Area {
    Area::new(
        "Windmill Farm",
        vec![text(
            "Great windmills creak over golden fields. Between the rows of corn, \
             something straw-stuffed is moving.",
        )],
        vec![text("The windmills creak as you return to the farm.")],
    )
    .with_enemy(Enemy::new(
        "Grumpy Scarecrow",
        30,
        9,
        3,
        EnemyStories {
            initial: vec![
                text(
                    "A scarecrow tears itself off its pole and stomps towards you, \
                     waving a rake.",
                )
                .color(Color::Red),
                say("Grumpy Scarecrow", "Off my field, featherbrain!"),
            ],
            revisit: vec![say(
                "Grumpy Scarecrow",
                "You again? I'm still here, and still grumpy.",
            )],
            mid_fight: vec![say(
                "Grumpy Scarecrow",
                "Back for more? I've restuffed myself, you know.",
            )],
            won: vec![
                text("The scarecrow collapses into a heap of straw.").color(Color::Green),
            ],
            lost: vec![
                text("The rake catches you one time too many. Everything goes dark.")
                    .color(Color::Red),
                pause(),
                StoryStep::game_over(),
            ],
            defeated: vec![text("A heap of straw lies where the scarecrow fell.")],
        },
    ))
    .with_neutral(Neutral::new(
        "Farmer Barnaby",
        NeutralStories {
            initial: vec![
                say(
                    "Farmer Barnaby",
                    "You beat that scarecrow? It's been chasing my hens for weeks! \
                     Here, take this for your trouble.",
                ),
                StoryStep::grant(small_potion()),
            ],
            revisit: vec![say(
                "Farmer Barnaby",
                "Mind the corn. And try the armour in the barn if you haven't.",
            )],
            quest_complete: None,
        },
    ))
    .with_item(
        Armour::new("Feathered Armor", 20)
            .with_description("Overlapping golden feathers, light as air and hard as steel."),
    )
}

fn crystal_hills(scenario: Scenario) -> Area {
    let area = Area::new(
        "Crystal Hills",
        vec![text(
            "Jagged crystals jut from the hillsides, scattering rainbows across the \
             grass.",
        )],
        vec![text("The crystals of the hills glitter as you return.")],
    )
    .at(3, 1);

    match scenario {
        Scenario::Homeworld => area.with_enemy(phineas()).with_item(small_potion()),
        Scenario::StarVoyage => area
            .with_neutral(Neutral::new(
                "Old Miner Greta",
                NeutralStories {
                    initial: vec![
                        say(
                            "Old Miner Greta",
                            "Blackthorn? He dug about here for weeks, then took off in a \
                             stolen ship. Headed somewhere bright, I'd wager.",
                        ),
                        say("Old Miner Greta", "Here, you'll need this more than me."),
                        StoryStep::grant(large_potion()),
                    ],
                    revisit: vec![say("Old Miner Greta", "Safe travels among the stars.")],
                    quest_complete: None,
                },
            ))
            .with_item(small_potion()),
    }
}

fn phineas() -> Enemy {
    Enemy::new(
        "Phineas Blackthorn",
        50,
        20,
        8,
        EnemyStories {
            initial: vec![
                text(
                    "A tall figure in a black cloak turns from the crystals. In his hand \
                     something ticks.",
                ),
                say(
                    "Phineas Blackthorn",
                    "The Timekeeper sent a chick to fetch his crystal? How quaint.",
                )
                .color(Color::Red),
            ],
            revisit: vec![say("Phineas Blackthorn", "Still here? Time is on my side.")],
            mid_fight: vec![say(
                "Phineas Blackthorn",
                "You ran once. You will run again.",
            )],
            won: vec![
                text("Phineas Blackthorn staggers and falls to his knees.").color(Color::Green),
                say("Phineas Blackthorn", "Take it, then. Time always runs out."),
                StoryStep::grant(time_crystal()),
                text(format!("Return {QUEST_ITEM} to the Timekeeper in the Capital City.")),
            ],
            lost: vec![
                text("Phineas laughs as you fall. The ticking fades away.").color(Color::Red),
                pause(),
                StoryStep::game_over(),
            ],
            defeated: vec![text(
                "Only a torn black cloak remains where Phineas Blackthorn fell.",
            )],
        },
    )
}

fn sunny_meadows() -> Area {
    Area::new(
        "Sunny Meadows",
        vec![text(
            "Wildflowers stretch to the horizon. A flock of plump golden hens pecks \
             happily at the grass.",
        )],
        vec![text("The hens cluck as you wander back through the meadow.")],
    )
    .with_neutral(Neutral::new(
        "Shepherd Pip",
        NeutralStories {
            initial: vec![
                say(
                    "Shepherd Pip",
                    "Hello! My hens found this in the grass. It looks lucky. You should \
                     have it!",
                ),
                StoryStep::grant(
                    Generic::new("Golden Feather")
                        .with_description(
                            "A shimmering golden feather. It does not seem to do anything.",
                        )
                        .with_received("Pip hands you a Golden Feather."),
                ),
            ],
            revisit: vec![say("Shepherd Pip", "The hens say hello!")],
            quest_complete: None,
        },
    ))
    .with_item(small_potion())
}

fn whispering_lake() -> Area {
    Area::new(
        "Whispering Lake",
        vec![
            text(
                "A still lake reflects the sky like polished glass. The reeds along the \
                 shore whisper in a wind you cannot feel.",
            ),
            text("Old gear lies half-buried in the sand.").color(Color::Grey),
        ],
        vec![text("The reeds whisper your name as you return to the lake.")],
    )
    .with_item(
        Weapon::new("Rusty Sword", 6).with_description("Better than nothing. Barely."),
    )
    .with_item(
        Armour::new("Leather Vest", 8).with_description("Scuffed, but it still turns a blow."),
    )
}
