//! # GoBot Responder
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The responder turns one line of user input into one reply. It holds the
//! bot's identity (name and version), normalizes the input, and walks the
//! ordered rule table in `rules`. It never fails: every input, including an
//! empty line or bytes that were not valid UTF-8, produces a reply.
//!
//! ## Architecture
//!
//! - `rules`: The ordered (predicate, reply) table. First match wins.
//! - `clock`: The `Clock` seam used by the time and date replies, so tests
//!   can pin the wall clock.
//!
//! ## Examples
//!
//! ```rust
//! let bot = Responder::new(Identity::new("GoBot", "1.0"));
//! assert_eq!(bot.respond("Hello!"), "🤖 Hello there! Nice to meet you!");
//! ```
//!
pub mod clock;
pub mod rules;

use clock::{Clock, SystemClock};
use rand::seq::SliceRandom;
use rules::{Reply, FALLBACK_REPLIES};
use serde::Deserialize;
use tracing::debug;

/// Words that end the session when typed on their own.
pub const TERMINATION_WORDS: [&str; 4] = ["quit", "exit", "bye", "goodbye"];

/// How the fallback reply is chosen when no rule matches.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Always the first fallback reply.
    #[default]
    First,
    /// A uniformly random fallback reply on each call.
    Random,
}

/// Immutable name/version pair the bot introduces itself with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    version: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Maps user input to canned replies.
pub struct Responder {
    identity: Identity,
    fallback: FallbackPolicy,
    clock: Box<dyn Clock>,
}

impl Responder {
    /// Creates a responder that reads the system clock and always returns the
    /// first fallback reply.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            fallback: FallbackPolicy::default(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Produces the reply for one raw input line.
    pub fn respond(&self, raw_input: &str) -> String {
        let input = normalize(raw_input);
        let rule = rules::first_match(&input);
        debug!("Input {:?} matched rule '{}'", input, rule.name);

        match rule.reply {
            Reply::Fixed(text) => text.to_string(),
            Reply::Name => format!(
                "🤖 I'm {}, your friendly Go chatbot!",
                self.identity.name()
            ),
            Reply::Time => format!(
                "🤖 The current time is: {}",
                clock::format_time(&self.clock.now())
            ),
            Reply::Date => format!(
                "🤖 Today's date is: {}",
                clock::format_date(&self.clock.now())
            ),
            Reply::Fallback => self.fallback_reply().to_string(),
        }
    }

    fn fallback_reply(&self) -> &'static str {
        match self.fallback {
            FallbackPolicy::First => FALLBACK_REPLIES[0],
            FallbackPolicy::Random => FALLBACK_REPLIES
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(FALLBACK_REPLIES[0]),
        }
    }
}

/// Trims surrounding whitespace and lowercases.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// True when the whole line, normalized, is one of `TERMINATION_WORDS`.
pub fn is_termination(input: &str) -> bool {
    let input = normalize(input);
    TERMINATION_WORDS.contains(&input.as_str())
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use chrono::{DateTime, Local, TimeZone};
    use std::collections::HashSet;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    fn bot() -> Responder {
        Responder::new(Identity::new("GoBot", "1.0"))
    }

    fn pinned_bot() -> Responder {
        let at = Local.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        bot().with_clock(FixedClock(at))
    }

    #[test]
    fn test_greeting_any_case_any_position() {
        let bot = bot();
        for input in ["Hello!", "hi", "  HI there ", "oh, HeLLo you", "well hi"] {
            assert_eq!(bot.respond(input), GREETING_REPLY, "input: {:?}", input);
        }
    }

    #[test]
    fn test_wellbeing() {
        assert_eq!(bot().respond("How are you?"), WELLBEING_REPLY);
    }

    #[test]
    fn test_identity_uses_configured_name() {
        let bot = Responder::new(Identity::new("Gopher", "2.0"));
        assert_eq!(
            bot.respond("What's your name?"),
            "🤖 I'm Gopher, your friendly Go chatbot!"
        );
        assert_eq!(
            bot.respond("who are you"),
            "🤖 I'm Gopher, your friendly Go chatbot!"
        );
    }

    #[test]
    fn test_time_reply_uses_clock() {
        assert_eq!(
            pinned_bot().respond("what TIME is it?"),
            "🤖 The current time is: 15:04:05"
        );
    }

    #[test]
    fn test_date_reply_uses_clock() {
        assert_eq!(
            pinned_bot().respond("today's date"),
            "🤖 Today's date is: January 2, 2006"
        );
    }

    #[test]
    fn test_time_reply_reads_system_clock_per_call() {
        let before = Local::now();
        let reply = bot().respond("time");
        let after = Local::now();

        let stamp = reply
            .strip_prefix("🤖 The current time is: ")
            .expect("time reply prefix");
        assert_eq!(stamp.len(), 8);
        assert!(
            stamp == clock::format_time(&before) || stamp == clock::format_time(&after),
            "stamp {} not within [{}, {}]",
            stamp,
            before,
            after
        );
    }

    #[test]
    fn test_go_praise() {
        assert_eq!(bot().respond("tell me about golang"), GO_REPLY);
        assert_eq!(bot().respond("GO"), GO_REPLY);
    }

    #[test]
    fn test_help() {
        let reply = bot().respond("help");
        assert_eq!(reply, HELP_REPLY);
        assert!(reply.contains("\n   - Current time/date"));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let bot = bot();
        for input in ["", "   ", "\t", " \t  "] {
            assert_eq!(bot.respond(input), EMPTY_REPLY, "input: {:?}", input);
        }
    }

    #[test]
    fn test_fallback_is_deterministic_by_default() {
        let bot = bot();
        for input in ["tell me a joke", "what is the meaning of life?", "xyz"] {
            assert_eq!(bot.respond(input), FALLBACK_REPLIES[0]);
        }
    }

    #[test]
    fn test_random_fallback_stays_within_list() {
        let bot = bot().with_fallback(FallbackPolicy::Random);
        for _ in 0..50 {
            let reply = bot.respond("tell me a joke");
            assert!(FALLBACK_REPLIES.contains(&reply.as_str()));
        }
        // Matched rules are unaffected by the fallback policy.
        assert_eq!(bot.respond("hello"), GREETING_REPLY);
    }

    #[test]
    fn test_random_fallback_varies() {
        let bot = bot().with_fallback(FallbackPolicy::Random);
        let seen: HashSet<String> = (0..200).map(|_| bot.respond("tell me a joke")).collect();
        assert!(seen.len() > 1, "200 random fallbacks returned only {:?}", seen);
    }

    #[test]
    fn test_replacement_characters_are_accepted() {
        assert_eq!(bot().respond("\u{FFFD}\u{FFFD}"), FALLBACK_REPLIES[0]);
    }

    #[test]
    fn test_is_termination_exact_match() {
        for input in ["quit", "EXIT", "  Bye ", "GoodBye\t"] {
            assert!(is_termination(input), "input: {:?}", input);
        }
        for input in ["quit now", "bye bye", "please exit", "", "goodbyes"] {
            assert!(!is_termination(input), "input: {:?}", input);
        }
    }

    #[test]
    fn test_identity_accessors() {
        let bot = bot();
        assert_eq!(bot.identity().name(), "GoBot");
        assert_eq!(bot.identity().version(), "1.0");
    }
}
