//! Error types for the game engine and interaction boundary.
//!
//! Only `InvalidGuess` is recoverable: the engine answers it with a
//! re-prompt. Every other variant ends the session.

use thiserror::Error;

use crate::engine::Phase;

/// Errors raised while playing a session.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid guess `{0}`: expected 4 unique decimal digits")]
    InvalidGuess(String),
    #[error("operation not allowed while {0}")]
    WrongPhase(Phase),
    #[error("input stream closed")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no target with unique digits found after {attempts} attempts")]
    TargetGenerationExhausted { attempts: u32 },
}

impl GameError {
    /// Whether the session can continue after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidGuess(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_categories() {
        assert!(GameError::InvalidGuess("12".into()).is_recoverable());
        assert!(!GameError::InputClosed.is_recoverable());
        assert!(!GameError::WrongPhase(Phase::Terminated).is_recoverable());
        assert!(!GameError::TargetGenerationExhausted { attempts: 3 }.is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(!GameError::from(io).is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = GameError::InvalidGuess("12a3".into());
        assert_eq!(
            err.to_string(),
            "invalid guess `12a3`: expected 4 unique decimal digits"
        );
        let err = GameError::WrongPhase(Phase::Terminated);
        assert_eq!(err.to_string(), "operation not allowed while terminated");
        let err = GameError::TargetGenerationExhausted { attempts: 7 };
        assert_eq!(
            err.to_string(),
            "no target with unique digits found after 7 attempts"
        );
    }
}
