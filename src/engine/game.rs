//! The game engine: round state, guess handling, and the play/replay loop.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::messages;
use super::phase::Phase;
use crate::core::{Code, GameConfig, GameRng, GameRngState, GuessRecord, RoundState, Score};
use crate::error::{GameError, Result};
use crate::interaction::Interaction;
use crate::rules;

/// What an accepted guess did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// The history entry appended for this guess.
    pub record: GuessRecord,
    /// Accepted guesses so far this round, including this one.
    pub guess_count: u32,
    /// Whether this guess won the round.
    pub won: bool,
}

/// Guesses needed in each round of a finished session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub guesses_per_round: Vec<u32>,
}

impl SessionSummary {
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.guesses_per_round.len()
    }
}

/// Single-player Bulls and Hits engine.
///
/// Owns its RNG, so two engines built from the same seed draw the same
/// targets. The engine never does I/O itself; `play_round` and `run_session`
/// talk to the player through an [`Interaction`].
///
/// ## Example
///
/// ```
/// use bulls_hits::{GameConfig, GameEngine};
///
/// let mut engine = GameEngine::new(GameConfig::new().with_seed(42)).unwrap();
/// let target = engine.round().target().to_string();
///
/// let outcome = engine.submit_guess(&target).unwrap();
/// assert!(outcome.won);
/// assert_eq!(outcome.guess_count, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    round: RoundState,
    phase: Phase,
}

impl GameEngine {
    /// Create an engine and draw the first target.
    ///
    /// Seeds from `config.seed`, or from OS entropy when unset.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine around an existing generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self> {
        debug!("engine seeded with {}", rng.seed());
        let target = rules::generate_target(&mut rng, config.max_target_attempts)?;
        trace!("target is {}", target);
        info!("new round started");

        Ok(Self {
            config,
            rng,
            round: RoundState::new(target),
            phase: Phase::AwaitingGuess,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The round in progress (or just won).
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Checkpoint of the RNG, enough to predict every later target.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Check whether `text` is an acceptable guess.
    #[must_use]
    pub fn validate(&self, text: &str) -> bool {
        rules::validate(text)
    }

    /// Score `guess` against the current target.
    #[must_use]
    pub fn score(&self, guess: &Code) -> Score {
        rules::score(&self.round.target(), guess)
    }

    /// Draw a fresh target and reset the guess count and history.
    pub fn new_round(&mut self) -> Result<()> {
        if self.phase.is_terminal() {
            return Err(GameError::WrongPhase(self.phase));
        }

        let target = rules::generate_target(&mut self.rng, self.config.max_target_attempts)?;
        trace!("target is {}", target);

        self.round = RoundState::new(target);
        self.phase = Phase::AwaitingGuess;
        info!("new round started");
        Ok(())
    }

    /// Validate, score, and record one guess.
    ///
    /// Returns `GameError::InvalidGuess` for malformed input; the round is
    /// unchanged and the caller may simply ask again.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome> {
        if self.phase != Phase::AwaitingGuess {
            return Err(GameError::WrongPhase(self.phase));
        }

        let guess = Code::parse(text).inspect_err(|_| debug!("rejected guess {:?}", text))?;
        let record = GuessRecord::new(guess, self.score(&guess));
        self.round.record(record);

        let won = record.score.is_win();
        let guess_count = self.round.guess_count();
        if won {
            info!("round won in {} guesses", guess_count);
            self.phase = Phase::AwaitingReplayDecision;
        } else {
            debug!("guess {}: {}", guess_count, record);
        }

        Ok(GuessOutcome {
            record,
            guess_count,
            won,
        })
    }

    /// Apply the play-again answer after a win.
    ///
    /// Returns `true` and starts a new round when `answer` is the configured
    /// replay token; otherwise terminates the session and returns `false`.
    pub fn decide_replay(&mut self, answer: &str) -> Result<bool> {
        if self.phase != Phase::AwaitingReplayDecision {
            return Err(GameError::WrongPhase(self.phase));
        }

        if self.config.is_replay(answer) {
            self.new_round()?;
            Ok(true)
        } else {
            self.phase = Phase::Terminated;
            Ok(false)
        }
    }

    /// Play the current round to a win.
    ///
    /// Invalid guesses are reported and re-prompted. Returns the number of
    /// accepted guesses it took.
    pub fn play_round<I: Interaction>(&mut self, ui: &mut I) -> Result<u32> {
        if self.phase != Phase::AwaitingGuess {
            return Err(GameError::WrongPhase(self.phase));
        }

        ui.show_message(messages::WELCOME);

        loop {
            let input = ui.request_input(&messages::guess_prompt(&self.round))?;

            match self.submit_guess(&input) {
                Ok(outcome) if outcome.won => {
                    ui.show_message(&messages::success(outcome.guess_count));
                    return Ok(outcome.guess_count);
                }
                Ok(_) => {}
                Err(err) if err.is_recoverable() => ui.show_message(messages::INVALID_GUESS),
                Err(err) => return Err(err),
            }
        }
    }

    /// Play rounds until the player declines another.
    ///
    /// A boundary failure (closed input, I/O error) ends the session with
    /// that error and leaves the engine terminated.
    pub fn run_session<I: Interaction>(&mut self, ui: &mut I) -> Result<SessionSummary> {
        if self.phase != Phase::AwaitingGuess {
            return Err(GameError::WrongPhase(self.phase));
        }

        let result = self.session_loop(ui);
        if result.is_err() {
            self.phase = Phase::Terminated;
        }
        result
    }

    fn session_loop<I: Interaction>(&mut self, ui: &mut I) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            summary.guesses_per_round.push(self.play_round(ui)?);

            let answer = ui.request_input(&messages::replay_prompt(&self.config.replay_token))?;
            if !self.decide_replay(&answer)? {
                ui.show_message(messages::FAREWELL);
                info!(
                    "session ended after {} round(s): {:?}",
                    summary.rounds_played(),
                    summary.guesses_per_round
                );
                return Ok(summary);
            }
        }
    }
}
