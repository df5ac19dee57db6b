//! # bulls-hits
//!
//! A single-player "Bulls and Hits" number-guessing game.
//!
//! The engine draws a secret four-digit number with unique digits. The player
//! guesses; each guess scores **bulls** (right digit, right place) and
//! **hits** (right digit, wrong place). Four bulls wins the round, and the
//! player can start another.
//!
//! ## Design
//!
//! - **Owned randomness**: every engine holds a seedable ChaCha8 generator,
//!   so a fixed seed replays the same targets.
//! - **Narrow I/O boundary**: the engine only asks for text and shows text,
//!   through the `Interaction` trait. The console and scripted
//!   implementations are interchangeable.
//! - **Recoverable vs fatal**: a malformed guess is answered with a re-prompt;
//!   only a failing input source ends a session early.
//!
//! ## Modules
//!
//! - `core`: codes, scores, round state, RNG, configuration
//! - `rules`: validation, scoring, target generation
//! - `engine`: the game engine and session loop
//! - `interaction`: the player-facing I/O boundary

pub mod core;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Code, GameConfig, GameRng, GameRngState, GuessRecord, RoundState, Score, DIGIT_COUNT,
};

pub use crate::engine::{GameEngine, GuessOutcome, Phase, SessionSummary};

pub use crate::error::{GameError, Result};

pub use crate::interaction::{ConsoleInteraction, Interaction, ScriptedInteraction};
