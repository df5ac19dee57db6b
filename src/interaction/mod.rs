//! The interaction boundary between the engine and the player.
//!
//! The engine only ever asks for a line of text and shows text back. Anything
//! that can do both (a terminal, a scripted transcript, a network session)
//! can drive a game.

pub mod console;
pub mod scripted;

pub use console::ConsoleInteraction;
pub use scripted::ScriptedInteraction;

use crate::error::Result;

/// Message shown when the player submits an empty line.
pub const EMPTY_INPUT_MESSAGE: &str = "The input cannot be empty. Please try again.";

/// Request/response text I/O used by the engine.
///
/// ## Contract
///
/// - `request_input` never returns empty text. Implementations re-prompt on
///   empty or cancelled input themselves.
/// - `request_input` fails only when the input source is gone for good
///   (`GameError::InputClosed` or `GameError::Io`). The engine treats that as
///   the end of the session.
/// - `show_message` has no failure path visible to the engine.
pub trait Interaction {
    /// Show `prompt` and block until the player supplies non-empty text.
    fn request_input(&mut self, prompt: &str) -> Result<String>;

    /// Display `text` to the player.
    fn show_message(&mut self, text: &str);
}
