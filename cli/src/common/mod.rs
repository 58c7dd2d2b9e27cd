//! # GoBot Common Utilities
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! Shared helpers that are not part of the responder itself.
//!
//! - `ui`: Banner and other fixed terminal text.
//!

/// Terminal presentation helpers (banner, goodbye line).
pub mod ui;
