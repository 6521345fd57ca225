//! User input and interaction handling.
//! The overwrite confirmation reads one line through a [`Prompter`], either
//! from a terminal via dialoguer or from any buffered reader.

use crate::error::{Error, Result};
use dialoguer::Input;
use std::io::{BufRead, Write};

/// Source of interactive answers.
pub trait Prompter {
    /// Shows `message` and returns the line typed in reply, without the line
    /// terminator. End of input yields an empty answer.
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Stops accepting input. Later calls to [`Prompter::ask`] fail.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// Prompter reading answers from the controlling terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter {
    closed: bool,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        if self.closed {
            return Err(Error::PromptError("input is closed".to_string()));
        }
        let answer: String = Input::new()
            .with_prompt(message.trim_end())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Prompter reading answers line by line from a reader, echoing prompts to a writer.
///
/// Closing drops the reader, releasing the underlying input handle.
pub struct ReaderPrompter<R: BufRead, W: Write> {
    input: Option<R>,
    output: W,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input: Some(input), output }
    }

    /// Releases the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<String> {
        let input = self
            .input
            .as_mut()
            .ok_or_else(|| Error::PromptError("input is closed".to_string()))?;

        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn close(&mut self) {
        self.input = None;
    }

    fn is_closed(&self) -> bool {
        self.input.is_none()
    }
}
