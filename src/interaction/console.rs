//! Line-oriented terminal interaction.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{debug, error};

use super::{Interaction, EMPTY_INPUT_MESSAGE};
use crate::error::{GameError, Result};

/// Reads answers line by line from `R` and writes prompts and messages to `W`.
///
/// Line endings are stripped; no other trimming happens, so `" 1"` is not the
/// same answer as `"1"`. Bytes that are not UTF-8 are replaced rather than
/// rejected, so the engine sees them as an ordinary invalid answer.
pub struct ConsoleInteraction<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInteraction<StdinLock<'static>, Stdout> {
    /// Interaction over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_block(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text.trim_end_matches('\n'))?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleInteraction<R, W> {
    fn request_input(&mut self, prompt: &str) -> Result<String> {
        loop {
            self.write_block(prompt)?;
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let mut raw = Vec::new();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                return Err(GameError::InputClosed);
            }

            let line = String::from_utf8_lossy(&raw).into_owned();
            let answer = line.strip_suffix('\n').unwrap_or(&line);
            let answer = answer.strip_suffix('\r').unwrap_or(answer);

            if answer.is_empty() {
                debug!("empty input ignored");
                self.write_block(EMPTY_INPUT_MESSAGE)?;
                continue;
            }
            return Ok(answer.to_string());
        }
    }

    fn show_message(&mut self, text: &str) {
        if let Err(err) = self.write_block(text) {
            error!("failed to display message: {}", err);
        }
    }
}
