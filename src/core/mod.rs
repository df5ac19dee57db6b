//! Core game types: codes, scores, round state, RNG, configuration.

pub mod code;
pub mod config;
pub mod record;
pub mod rng;
pub mod state;

pub use code::Code;
pub use config::{GameConfig, DIGIT_COUNT, TARGET_MAX, TARGET_MIN};
pub use record::{GuessRecord, Score};
pub use rng::{GameRng, GameRngState};
pub use state::RoundState;
