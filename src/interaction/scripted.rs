//! Scripted interaction for tests and automation.

use std::collections::VecDeque;

use log::debug;

use super::{Interaction, EMPTY_INPUT_MESSAGE};
use crate::error::{GameError, Result};

/// One entry in a scripted transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exchange {
    /// The engine asked for input with this prompt.
    Prompt(String),
    /// The engine displayed this message.
    Message(String),
}

/// Answers prompts from a fixed queue and records everything shown.
///
/// Empty answers in the queue are absorbed the way a console absorbs blank
/// lines. Running out of answers reports `GameError::InputClosed`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInteraction {
    inputs: VecDeque<String>,
    transcript: Vec<Exchange>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue another answer.
    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    /// Answers not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Everything the engine prompted and displayed, in order.
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Only the displayed messages, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().filter_map(|e| match e {
            Exchange::Message(m) => Some(m.as_str()),
            Exchange::Prompt(_) => None,
        })
    }

    /// Only the prompts, in order.
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().filter_map(|e| match e {
            Exchange::Prompt(p) => Some(p.as_str()),
            Exchange::Message(_) => None,
        })
    }
}

impl Interaction for ScriptedInteraction {
    fn request_input(&mut self, prompt: &str) -> Result<String> {
        loop {
            self.transcript.push(Exchange::Prompt(prompt.to_string()));

            let input = self.inputs.pop_front().ok_or(GameError::InputClosed)?;
            if input.is_empty() {
                debug!("empty input ignored");
                self.transcript
                    .push(Exchange::Message(EMPTY_INPUT_MESSAGE.to_string()));
                continue;
            }
            return Ok(input);
        }
    }

    fn show_message(&mut self, text: &str) {
        self.transcript.push(Exchange::Message(text.to_string()));
    }
}
