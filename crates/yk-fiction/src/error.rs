//! Error types for the fiction engine.

use thiserror::Error;
use yk_core::CoreError;
use yk_mechanics::MechError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during play.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),

    /// World model error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Combat error.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// A player name that breaks the naming rules.
    #[error("invalid name '{0}': use 3 to 24 letters or digits")]
    InvalidName(String),

    /// Input that does not parse as a command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Blank input where something was required.
    #[error("input cannot be empty")]
    EmptyInput,
}

impl FictionError {
    /// Returns true if the error is the input stream running dry.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_detection() {
        let eof = FictionError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(eof.is_end_of_input());
        let other = FictionError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(!other.is_end_of_input());
        assert!(!FictionError::EmptyInput.is_end_of_input());
    }

    #[test]
    fn messages() {
        assert_eq!(
            FictionError::UnknownCommand("dance".into()).to_string(),
            "unknown command: dance"
        );
        assert!(FictionError::InvalidName("x".into()).to_string().contains("3 to 24"));
    }
}
