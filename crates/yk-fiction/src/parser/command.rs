//! Command parsing for player input.

use yk_core::position::Direction;

use super::suggest::suggest_command;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Step one tile.
    Move(Direction),
    /// Show the planet map.
    Map,
    /// Search the current tile.
    Search,
    /// Open the inventory menu.
    Inventory,
    /// Open the potion menu.
    Potion,
    /// Show the stats sheet.
    Stats,
    /// Describe the current tile.
    Contents,
    /// List commands.
    Help,
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
    /// Blank input.
    Empty,
    /// Anything else.
    Unknown {
        /// The original input.
        input: String,
        /// A close known command, if there is one.
        suggestion: Option<&'static str>,
    },
}

/// Every command word with its aliases, in help order.
pub(crate) const COMMANDS: &[(&str, &[&str], &str)] = &[
    ("north", &[], "move one tile north"),
    ("south", &[], "move one tile south"),
    ("east", &[], "move one tile east"),
    ("west", &[], "move one tile west"),
    ("map", &[], "show the map of this planet"),
    ("search", &["s"], "look for items on this tile"),
    ("inventory", &["i"], "use or inspect your items"),
    ("potion", &["potions", "p"], "drink a potion"),
    ("stats", &[], "show your health and gear"),
    ("contents", &[], "describe what is on this tile"),
    ("help", &[], "show this list"),
    ("reset", &[], "start a new game"),
    ("quit", &[], "leave the game"),
];

/// Parse a player input string into a command. Matching is
/// case-insensitive and ignores surrounding whitespace.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }
    let word = input.to_lowercase();

    if let Some(direction) = Direction::parse(&word) {
        return Command::Move(direction);
    }

    match word.as_str() {
        "map" => Command::Map,
        "search" | "s" => Command::Search,
        "inventory" | "i" => Command::Inventory,
        "potion" | "potions" | "p" => Command::Potion,
        "stats" => Command::Stats,
        "contents" => Command::Contents,
        "help" => Command::Help,
        "reset" => Command::Reset,
        "quit" => Command::Quit,
        _ => Command::Unknown {
            input: input.to_string(),
            suggestion: suggest_command(&word),
        },
    }
}
