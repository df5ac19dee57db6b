//! Game configuration.
//!
//! The engine is configured at startup with a `GameConfig`. The digit count is
//! fixed at [`DIGIT_COUNT`]; everything else has a default.

use serde::{Deserialize, Serialize};

/// Number of digits in a target and in every guess.
pub const DIGIT_COUNT: usize = 4;

/// Smallest target value (leading digit is never zero).
pub const TARGET_MIN: u16 = 1000;

/// Largest target value.
pub const TARGET_MAX: u16 = 9999;

/// Default cap on rejection-sampling attempts when drawing a target.
///
/// About half of [1000, 9999] has unique digits, so a sound generator never
/// gets near this.
pub const DEFAULT_MAX_TARGET_ATTEMPTS: u32 = 10_000;

/// Default literal that continues a session after a win.
pub const DEFAULT_REPLAY_TOKEN: &str = "1";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cap on rejection-sampling attempts per target.
    pub max_target_attempts: u32,

    /// Input that starts another round after a win.
    pub replay_token: String,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_target_attempts: DEFAULT_MAX_TARGET_ATTEMPTS,
            replay_token: DEFAULT_REPLAY_TOKEN.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the rejection-sampling cap.
    #[must_use]
    pub fn with_max_target_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Must allow at least 1 target attempt");
        self.max_target_attempts = attempts;
        self
    }

    /// Set the replay token.
    #[must_use]
    pub fn with_replay_token(mut self, token: impl Into<String>) -> Self {
        self.replay_token = token.into();
        self
    }

    /// Check whether a replay answer means "play again".
    #[must_use]
    pub fn is_replay(&self, answer: &str) -> bool {
        answer == self.replay_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.max_target_attempts, DEFAULT_MAX_TARGET_ATTEMPTS);
        assert_eq!(config.replay_token, "1");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_seed(42)
            .with_max_target_attempts(5)
            .with_replay_token("y");

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_target_attempts, 5);
        assert!(config.is_replay("y"));
        assert!(!config.is_replay("1"));
    }

    #[test]
    fn test_is_replay_is_literal() {
        let config = GameConfig::new();
        assert!(config.is_replay("1"));
        assert!(!config.is_replay(" 1"));
        assert!(!config.is_replay("01"));
        assert!(!config.is_replay("0"));
        assert!(!config.is_replay(""));
    }

    #[test]
    #[should_panic(expected = "Must allow at least 1 target attempt")]
    fn test_zero_attempts() {
        let _ = GameConfig::new().with_max_target_attempts(0);
    }
}
