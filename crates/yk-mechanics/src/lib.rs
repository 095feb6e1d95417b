//! Combat engine for Yolkaris.
//!
//! Resolves fights between the player and an enemy one round at a time.
//! The player always strikes first; damage is drawn from the caller's
//! [`rand::rngs::StdRng`] so a seeded session replays identically.

pub mod combat;
pub mod damage;
pub mod error;

pub use combat::{CombatOutcome, Encounter, RoundOutcome, RoundRecord};
pub use damage::roll_damage;
pub use error::{MechError, MechResult};
