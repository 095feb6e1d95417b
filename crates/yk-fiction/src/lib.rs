//! Interactive fiction engine for Yolkaris.
//!
//! Runs the scripted stories, decides which branch of an area plays when
//! the player walks in, hands fights to the combat engine, and drives the
//! command loop. All I/O goes through the [`Presenter`] port so the same
//! engine runs in a terminal or headless from a script.

/// Game session configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// The per-tile interaction controller.
pub mod interaction;
/// The story interpreter.
pub mod interpreter;
/// Grants, equipment, item use and potions.
pub mod inventory;
/// Command parsing.
pub mod parser;
/// The presentation port and the scripted presenter.
pub mod presenter;
/// Searching tiles for items.
pub mod search;
/// The game session and command loop.
pub mod session;
/// Mutable state of one run.
pub mod state;
/// Travel between planets.
pub mod travel;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use interpreter::{Signal, run_story};
pub use parser::{Command, parse_command};
pub use presenter::{Presenter, ScriptedPresenter};
pub use session::{Flow, GameSession};
pub use state::GameState;
