//! # GoBot Session Loop
//!
//! File: cli/src/session/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives the read-eval-print cycle. Each iteration prints the prompt, blocks
//! on one line of input, and then either ends the session or prints the
//! responder's reply followed by a blank line.
//!
//! ## States
//!
//! RUNNING until one of:
//! - a termination word (`quit`, `exit`, `bye`, `goodbye`): goodbye is printed
//! - end of input: nothing more is printed
//! - a read error: returned to the caller as `BotError::Input`
//!
//! The loop is generic over `BufRead`/`Write`, so the binary hands it locked
//! stdin/stdout and tests hand it in-memory buffers.
//!
use crate::bot::{self, Responder};
use crate::common::ui;
use crate::core::error::BotError;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Why a session stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed a termination word.
    Quit,
    /// The input stream ran out of lines.
    EndOfInput,
}

pub struct Session<'a, R, W> {
    responder: &'a Responder,
    prompt: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(responder: &'a Responder, prompt: &'a str, input: R, output: W) -> Self {
        Self {
            responder,
            prompt,
            input,
            output,
        }
    }

    /// Runs until a termination word, end of input, or an I/O error.
    pub fn run(mut self) -> Result<SessionOutcome, BotError> {
        let mut turns = 0usize;
        loop {
            write!(self.output, "{}", self.prompt).map_err(output_error)?;
            self.output.flush().map_err(output_error)?;

            let Some(line) = self.read_line()? else {
                info!("End of input after {} turn(s).", turns);
                return Ok(SessionOutcome::EndOfInput);
            };

            if bot::is_termination(&line) {
                writeln!(self.output, "{}", ui::GOODBYE).map_err(output_error)?;
                self.output.flush().map_err(output_error)?;
                info!("User ended the session after {} turn(s).", turns);
                return Ok(SessionOutcome::Quit);
            }

            let reply = self.responder.respond(&line);
            writeln!(self.output, "{}", reply).map_err(output_error)?;
            writeln!(self.output).map_err(output_error)?;
            turns += 1;
        }
    }

    /// Reads one line without its terminator. Returns `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>, BotError> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|source| BotError::Input { source })?;
        if read == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => {
                debug!("Input line contained invalid UTF-8; replaced offending bytes.");
                s
            }
        };
        Ok(Some(line))
    }
}

fn output_error(source: std::io::Error) -> BotError {
    BotError::Output { source }
}
