//! Session phases.
//!
//! ```text
//! AwaitingGuess --invalid guess--> AwaitingGuess
//! AwaitingGuess --valid, no win--> AwaitingGuess
//! AwaitingGuess --valid, win-----> AwaitingReplayDecision
//! AwaitingReplayDecision --replay--> AwaitingGuess (new round)
//! AwaitingReplayDecision --other---> Terminated
//! ```

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// A round is running and the next guess is expected.
    #[default]
    AwaitingGuess,
    /// The round was won; waiting for the play-again answer.
    AwaitingReplayDecision,
    /// The session is over.
    Terminated,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Terminated
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::AwaitingGuess => "awaiting guess",
            Phase::AwaitingReplayDecision => "awaiting replay decision",
            Phase::Terminated => "terminated",
        };
        f.write_str(name)
    }
}
