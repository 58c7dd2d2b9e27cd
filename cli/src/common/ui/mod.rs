//! # GoBot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal text that is not a reply: the startup banner and the goodbye
//! line. Everything writes to a caller-supplied `Write` so the session loop
//! and its tests share one output path.
//!
use crate::bot::Identity;
use crate::core::error::BotError;
use std::io::{self, Write};

/// Width of the separator line under the banner.
const SEPARATOR_WIDTH: usize = 50;

/// Printed when the user types a termination word.
pub const GOODBYE: &str = "🤖 Goodbye! Thanks for chatting with me!";

/// Writes the startup banner: identity, instructions, and a separator line.
///
/// Write failures come back as `BotError::Output`, the same as failures
/// inside the session loop.
pub fn write_banner<W: Write>(out: &mut W, identity: &Identity) -> Result<(), BotError> {
    write_banner_lines(out, identity).map_err(|source| BotError::Output { source })
}

fn write_banner_lines<W: Write>(out: &mut W, identity: &Identity) -> io::Result<()> {
    writeln!(
        out,
        "🤖 Hello! I'm {} v{}",
        identity.name(),
        identity.version()
    )?;
    writeln!(out, "🤖 I'm a simple chatbot built with Go!")?;
    writeln!(out, "🤖 Type 'quit' or 'exit' to end our conversation.")?;
    writeln!(out, "🤖 Let's chat!")?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}
