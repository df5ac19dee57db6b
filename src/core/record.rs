//! Scores and the per-round guess history entries.

use serde::{Deserialize, Serialize};

use super::code::Code;
use super::config::DIGIT_COUNT;

/// Result of comparing a guess to the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Right digit, right position.
    pub bulls: u8,
    /// Right digit, wrong position.
    pub hits: u8,
}

impl Score {
    #[must_use]
    pub const fn new(bulls: u8, hits: u8) -> Self {
        Self { bulls, hits }
    }

    /// Every position matched.
    #[must_use]
    pub fn is_win(&self) -> bool {
        usize::from(self.bulls) == DIGIT_COUNT
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bulls: {}, Hits: {}", self.bulls, self.hits)
    }
}

/// An accepted guess and its score, as shown in the round history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Code,
    pub score: Score,
}

impl GuessRecord {
    #[must_use]
    pub fn new(guess: Code, score: Score) -> Self {
        Self { guess, score }
    }
}

impl std::fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.guess, self.score)
    }
}
