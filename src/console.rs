// src/console.rs

use crate::error::AppError;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, Write};

/// Operator-facing input and output. Prompt loops are written against this trait
/// so they can be driven by a terminal, a pipe, or an in-memory script.
pub trait Console {
    /// Shows `prompt` and reads one response line without its terminator.
    /// Returns `None` once the input is closed, which callers treat as cancellation.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Shows one line of text to the operator.
    fn tell(&mut self, message: &str) -> Result<(), AppError>;
}

/// Interactive console backed by `dialoguer`.
#[derive(Default)]
pub struct TerminalConsole {
    theme: ColorfulTheme,
}

impl Console for TerminalConsole {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        let response = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(response))
    }

    fn tell(&mut self, message: &str) -> Result<(), AppError> {
        println!("{}", message);
        Ok(())
    }
}

/// Console over arbitrary streams, used when stdin is not a terminal.
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StreamConsole { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}: ", prompt).map_err(AppError::ConsoleIo)?;
        self.output.flush().map_err(AppError::ConsoleIo)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(AppError::ConsoleIo)?;
        if read == 0 {
            return Ok(None);
        }

        // Only the terminator is removed; "y " is not "y".
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn tell(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", message).map_err(AppError::ConsoleIo)
    }
}
