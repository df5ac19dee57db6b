//! Round state: the target, the guess count and the guess history.
//!
//! Uses an `im` persistent vector for the history so snapshots of a round
//! clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::code::Code;
use super::record::GuessRecord;

/// State of the round in progress.
///
/// Created at round start, mutated on each accepted guess, replaced when the
/// player starts another round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    target: Code,
    guess_count: u32,
    history: Vector<GuessRecord>,
}

impl RoundState {
    /// Start a round against `target`.
    #[must_use]
    pub fn new(target: Code) -> Self {
        Self {
            target,
            guess_count: 0,
            history: Vector::new(),
        }
    }

    /// The secret target.
    #[must_use]
    pub fn target(&self) -> Code {
        self.target
    }

    /// Number of accepted guesses this round.
    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Accepted guesses, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    /// Whether the last accepted guess matched the target.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history.last().is_some_and(|r| r.score.is_win())
    }

    /// Count an accepted guess and append it to the history.
    pub fn record(&mut self, record: GuessRecord) {
        self.guess_count += 1;
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Score;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn test_new_round_is_empty() {
        let state = RoundState::new(code("8423"));
        assert_eq!(state.target(), code("8423"));
        assert_eq!(state.guess_count(), 0);
        assert!(state.history().is_empty());
        assert!(!state.is_won());
    }

    #[test]
    fn test_record() {
        let mut state = RoundState::new(code("1234"));
        state.record(GuessRecord::new(code("4321"), Score::new(0, 4)));
        assert_eq!(state.guess_count(), 1);
        assert!(!state.is_won());

        state.record(GuessRecord::new(code("1234"), Score::new(4, 0)));
        assert_eq!(state.guess_count(), 2);
        assert!(state.is_won());
        assert_eq!(state.history()[0].guess, code("4321"));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = RoundState::new(code("1234"));
        state.record(GuessRecord::new(code("5678"), Score::new(0, 0)));

        let snapshot = state.clone();
        state.record(GuessRecord::new(code("1234"), Score::new(4, 0)));

        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_serde() {
        let mut state = RoundState::new(code("9076"));
        state.record(GuessRecord::new(code("9067"), Score::new(2, 2)));

        let json = serde_json::to_string(&state).unwrap();
        let back: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
