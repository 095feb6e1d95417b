/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying the game world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Every tile of the planet is already occupied.
    #[error("no free tile left on {planet} for \"{area}\"")]
    GridFull {
        /// The planet being populated.
        planet: String,
        /// The area that could not be placed.
        area: String,
    },

    /// A scenario number outside the supported set.
    #[error("unknown scenario: {0} (expected 1 or 2)")]
    UnknownScenario(u32),
}
