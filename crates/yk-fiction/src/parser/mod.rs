//! Command parsing and typo suggestions.

mod command;
mod suggest;

pub(crate) use command::COMMANDS;
pub use command::{Command, parse_command};
pub use suggest::suggest_command;
