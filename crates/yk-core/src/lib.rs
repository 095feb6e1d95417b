//! Core types for Yolkaris: items, characters, story scripts, planets and
//! the two embedded scenarios.
//!
//! This crate is pure data plus the grid model. It never prints and never
//! reads input; the fiction layer drives it through a presenter.

/// Areas: the content of a single map tile.
pub mod area;
/// The player, enemies and neutral characters.
pub mod character;
/// Embedded scenario content.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Bounded health values.
pub mod health;
/// Items the player can find, carry and use.
pub mod item;
/// Planets: a grid of areas plus visit tracking.
pub mod planet;
/// Grid positions and compass directions.
pub mod position;
/// Scenarios and the interplanetary travel graph.
pub mod scenario;
/// Story scripts: sequences of text and state-changing steps.
pub mod story;

/// Re-export the area type.
pub use area::Area;
/// Re-export character types.
pub use character::{Enemy, EnemyStories, Neutral, NeutralStories, Player};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export health.
pub use health::Health;
/// Re-export item types.
pub use item::{Armour, Book, Generic, Item, Potion, Slot, Spaceship, Special, Weapon};
/// Re-export planet types.
pub use planet::{MapTile, Planet};
/// Re-export grid types.
pub use position::{Direction, Position};
/// Re-export scenario types.
pub use scenario::{PlanetId, Scenario};
/// Re-export story types.
pub use story::{Color, StepAction, Story, StoryStep, TextStyle};
