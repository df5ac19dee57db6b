//! Game engine: owns the round, sequences play and replay.
//!
//! The engine only reaches the player through
//! [`Interaction`](crate::interaction::Interaction), so the same session logic
//! drives a terminal or a scripted test.

mod game;
pub mod messages;
mod phase;

pub use game::{GameEngine, GuessOutcome, SessionSummary};
pub use phase::Phase;
