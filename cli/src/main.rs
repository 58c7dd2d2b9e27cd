//! # GoBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the GoBot chatbot.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the responder
//! - Running the chat session on stdin/stdout and reporting how it ended
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! gobot
//!
//! # Chat with a renamed bot and debug logs on stderr
//! gobot -vv --name Gopher
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration and print the banner
//! 4. Run the session until quit, end of input, or a read error
//!
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Responder: identity, rule table, clock
mod common; // Shared terminal helpers
mod core; // Core infrastructure (errors, config)
mod session; // Read-eval-print loop

use crate::bot::{Identity, Responder};
use crate::core::error::{BotError, Result};
use crate::session::Session;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "gobot",
    about = "🤖 GoBot: a simple interactive chatbot",
    long_about = "Reads lines from stdin and answers with canned replies.\n\
                  Type 'quit', 'exit', 'bye' or 'goodbye' to leave.",
    version
)]
struct Cli {
    /// Path to a TOML configuration file (skips .gobot.toml discovery).
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,
    /// Override the bot's name.
    #[arg(long)]
    name: Option<String>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("GoBot failed: {:?}", e);
        match e.downcast_ref::<BotError>() {
            // A broken input stream is reported on stdout, after the last prompt.
            Some(BotError::Input { source }) => {
                println!("Error reading input: {}", source);
                io::stdout().flush().ok();
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = crate::core::config::load_config(cli.config.as_deref(), cli.name)?;
    let responder = Responder::new(Identity::new(config.bot.name, config.bot.version))
        .with_fallback(config.replies.fallback);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    common::ui::write_banner(&mut out, responder.identity())?;

    let session = Session::new(&responder, &config.session.prompt, stdin.lock(), out);
    let outcome = session.run()?;
    tracing::info!("Session finished: {:?}", outcome);
    Ok(())
}
