//! # GoBot Reply Rules
//!
//! File: cli/src/bot/rules.rs
//! Author: Christi Mahu
//!
//! The ordered rule table the responder walks for every line. Each rule pairs
//! a predicate over the normalized input with the reply it produces. The first
//! rule whose predicate holds wins, so the order of `RULES` is part of the
//! behavior: `hi` is a substring of words like "this" or "which", which means
//! the greeting rule shadows everything below it for such input, and `go`
//! shadows `golang`. Keep it a list.

/// How a rule decides whether it applies to the normalized input.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Input contains at least one of these substrings.
    ContainsAny(&'static [&'static str]),
    /// Input is empty after trimming.
    Empty,
    /// Always applies. Only valid as the last rule.
    Always,
}

/// What a rule answers with once it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Fixed(&'static str),
    /// Introduces the bot by its configured name.
    Name,
    /// Current wall-clock time.
    Time,
    /// Current wall-clock date.
    Date,
    /// One of `FALLBACK_REPLIES`, picked by the fallback policy.
    Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Short label used in debug logs.
    pub name: &'static str,
    pub matcher: Matcher,
    pub reply: Reply,
}

impl Matcher {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::ContainsAny(needles) => needles.iter().any(|n| normalized.contains(n)),
            Matcher::Empty => normalized.is_empty(),
            Matcher::Always => true,
        }
    }
}

pub const GREETING_REPLY: &str = "🤖 Hello there! Nice to meet you!";
pub const WELLBEING_REPLY: &str = "🤖 I'm doing great! Thanks for asking. How are you?";
pub const GO_REPLY: &str =
    "🤖 Go is awesome! It's fast, simple, and great for building applications!";
pub const HELP_REPLY: &str = "🤖 You can ask me about:\n   - My name\n   - Current time/date\n   - How I'm doing\n   - About Go language\n   - Or just say hello!";
pub const EMPTY_REPLY: &str = "🤖 You didn't say anything. Try typing something!";

pub const FALLBACK_REPLIES: [&str; 4] = [
    "🤖 That's interesting! Tell me more.",
    "🤖 I see! What else would you like to know?",
    "🤖 Hmm, I'm still learning. Can you ask me something else?",
    "🤖 That's cool! I'm here to chat whenever you want.",
];

pub const RULES: &[Rule] = &[
    Rule {
        name: "greeting",
        matcher: Matcher::ContainsAny(&["hello", "hi"]),
        reply: Reply::Fixed(GREETING_REPLY),
    },
    Rule {
        name: "wellbeing",
        matcher: Matcher::ContainsAny(&["how are you"]),
        reply: Reply::Fixed(WELLBEING_REPLY),
    },
    Rule {
        name: "identity",
        matcher: Matcher::ContainsAny(&["what's your name", "who are you"]),
        reply: Reply::Name,
    },
    Rule {
        name: "time",
        matcher: Matcher::ContainsAny(&["time"]),
        reply: Reply::Time,
    },
    Rule {
        name: "date",
        matcher: Matcher::ContainsAny(&["date"]),
        reply: Reply::Date,
    },
    Rule {
        name: "golang",
        matcher: Matcher::ContainsAny(&["go", "golang"]),
        reply: Reply::Fixed(GO_REPLY),
    },
    Rule {
        name: "help",
        matcher: Matcher::ContainsAny(&["help"]),
        reply: Reply::Fixed(HELP_REPLY),
    },
    Rule {
        name: "empty",
        matcher: Matcher::Empty,
        reply: Reply::Fixed(EMPTY_REPLY),
    },
    Rule {
        name: "fallback",
        matcher: Matcher::Always,
        reply: Reply::Fallback,
    },
];

/// Returns the first rule whose predicate holds for `normalized`.
pub fn first_match(normalized: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.matcher.matches(normalized))
        // The table ends with `Matcher::Always`.
        .unwrap_or(&RULES[RULES.len() - 1])
}
