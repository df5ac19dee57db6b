//! Player-facing text.

use crate::core::RoundState;

/// Shown at the start of every round.
pub const WELCOME: &str = "Welcome to the game!";

/// Header of the guess prompt; the round history follows it.
pub const GUESS_PROMPT: &str = "Please enter your guess (4-digit number with unique digits):";

/// Shown when a guess is not four unique digits.
pub const INVALID_GUESS: &str =
    "Invalid input! Make sure it's a 4-digit number with unique digits.";

/// Shown when the player declines another round.
pub const FAREWELL: &str = "Thank you for playing! Goodbye!";

/// Shown when the round is won.
pub fn success(guess_count: u32) -> String {
    format!(
        "Congratulations! You guessed the right number in {} guesses!",
        guess_count
    )
}

/// Asked after a win.
pub fn replay_prompt(replay_token: &str) -> String {
    format!(
        "Would you like to play again? (If yes, enter {}, otherwise enter 0.)",
        replay_token
    )
}

/// The guess prompt followed by every earlier guess of the round.
pub fn guess_prompt(round: &RoundState) -> String {
    let mut prompt = String::from(GUESS_PROMPT);
    prompt.push('\n');
    for record in round.history() {
        prompt.push_str(&record.to_string());
        prompt.push('\n');
    }
    prompt
}
