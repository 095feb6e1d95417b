//! Error types for the combat engine.

/// Errors that can occur while resolving combat.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The enemy has no hit points left; there is nothing to fight.
    #[error("{0} is already defeated")]
    AlreadyDefeated(String),

    /// The player has no hit points left and cannot act.
    #[error("{0} cannot fight with no health left")]
    PlayerDown(String),
}

/// Convenience result type for combat operations.
pub type MechResult<T> = Result<T, MechError>;
