//! # GoBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout GoBot. The surface is
//! deliberately small: matching and formatting replies cannot fail, so the
//! only runtime errors come from the terminal streams, plus configuration
//! problems detected at startup.
//!
//! ## Architecture
//!
//! - `BotError`: A custom error enum using `thiserror` for the specific cases
//!   callers branch on (a failed read is reported differently from a failed write).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for everything else.
//!
//! ## Examples
//!
//! ```rust
//! match session.run() {
//!     Ok(outcome) => info!("Session ended: {:?}", outcome),
//!     Err(BotError::Input { source }) => println!("Error reading input: {}", source),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the GoBot application.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the next line from the input stream failed.
    #[error("{source}")]
    Input { source: std::io::Error },

    /// Writing the prompt or a reply to the output stream failed.
    #[error("Failed to write output: {source}")]
    Output { source: std::io::Error },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
