//! # Intent and Reply Catalogs
//!
//! File: cli/src/engine/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The two static tables that drive every conversation:
//! - `IntentCatalog`: ordered intents, each with ordered regex patterns, plus the
//!   dedicated arithmetic-expression pattern.
//! - `ResponseCatalog`: candidate reply templates per `ReplySet`.
//!
//! Both are built once by `Catalogs::load()`, together with the `Normalizer`,
//! at startup and only ever borrowed afterwards. Declaration order matters: it is the order in which intents are
//! reported for a single input.
//!
use crate::core::error::BotError;
use crate::engine::normalize::Normalizer;
use regex::Regex;
use std::fmt;

/// A category of user purpose recognized by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Bye,
    Thanks,
    AskName,
    ProvideName,
    Help,
    Age,
    /// Synthetic intent for `<number> <op> <number>`; never part of the pattern table.
    Math,
}

impl Intent {
    pub fn name(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Bye => "bye",
            Intent::Thanks => "thanks",
            Intent::AskName => "ask_name",
            Intent::ProvideName => "provide_name",
            Intent::Help => "help",
            Intent::Age => "age",
            Intent::Math => "math",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keys of the reply table. Mostly mirrors `Intent`, plus `NameReply` and `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplySet {
    Greeting,
    Bye,
    Thanks,
    NameReply,
    AskName,
    Help,
    Unknown,
    Age,
}

/// Placeholder substituted with the user's name in `NameReply` templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

const INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &[
            r"\bhi\b",
            r"\bhello\b",
            r"\bhey\b",
            r"\bgood (morning|afternoon|evening)\b",
        ],
    ),
    (
        Intent::Bye,
        &[
            r"\bbye\b",
            r"\bgoodbye\b",
            r"\bsee you\b",
            r"\bexit\b",
            r"\bquit\b",
        ],
    ),
    (Intent::Thanks, &[r"\bthank\b", r"\bthanks\b", r"\bthx\b"]),
    (
        Intent::AskName,
        &[
            r"\bwhat(?:'s| is) your name\b",
            r"\bwho are you\b",
            r"\bwhat are you\b",
        ],
    ),
    (
        Intent::ProvideName,
        &[
            r"\bmy name is (\w+)\b",
            r"\bi am (\w+)\b",
            r"\bi'm (\w+)\b",
            r"\bcall me (\w+)\b",
        ],
    ),
    (
        Intent::Help,
        &[r"\bhelp\b", r"\bwhat can you do\b", r"\bcommands?\b"],
    ),
    (Intent::Age, &[r"\bage\b", r"\bhow old are you\b"]),
];

const ARITHMETIC_PATTERN: &str = r"(-?\d+(?:\.\d+)?)\s*([+\-*/])\s*(-?\d+(?:\.\d+)?)";

const REPLIES: &[(ReplySet, &[&str])] = &[
    (
        ReplySet::Greeting,
        &[
            "Hi! How can I help you today?",
            "Hello! What can I do for you?",
            "Hey there!",
        ],
    ),
    (
        ReplySet::Bye,
        &["Goodbye! Have a nice day.", "See you later!", "Bye!"],
    ),
    (
        ReplySet::Thanks,
        &["You're welcome!", "No problem!", "Happy to help!"],
    ),
    (
        ReplySet::NameReply,
        &["Nice to meet you, {name}!", "Got it — I'll call you {name}."],
    ),
    (
        ReplySet::AskName,
        &["What's your name?", "May I know your name?"],
    ),
    (
        ReplySet::Help,
        &["I can greet you, remember your name, do simple math (e.g. 2 + 3), and respond to a few common intents."],
    ),
    (
        ReplySet::Unknown,
        &[
            "Sorry, I didn't understand that. Could you rephrase?",
            "I don't know how to respond to that yet.",
        ],
    ),
    (
        ReplySet::Age,
        &["I am a simple rule-based chatbot (no real age!)."],
    ),
];

/// Compiled pattern table. Immutable once built.
#[derive(Debug)]
pub struct IntentCatalog {
    entries: Vec<(Intent, Vec<Regex>)>,
    arithmetic: Regex,
}

impl IntentCatalog {
    pub fn compile() -> Result<Self, BotError> {
        let mut entries = Vec::with_capacity(INTENT_PATTERNS.len());
        for (intent, patterns) in INTENT_PATTERNS {
            let compiled = patterns
                .iter()
                .map(|pattern| Regex::new(pattern))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((*intent, compiled));
        }
        Ok(Self {
            entries,
            arithmetic: Regex::new(ARITHMETIC_PATTERN)?,
        })
    }

    /// Intents with their patterns, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Intent, &[Regex])> {
        self.entries
            .iter()
            .map(|(intent, patterns)| (*intent, patterns.as_slice()))
    }

    pub fn arithmetic(&self) -> &Regex {
        &self.arithmetic
    }
}

/// Reply templates keyed by `ReplySet`.
#[derive(Debug, Clone, Copy)]
pub struct ResponseCatalog {
    table: &'static [(ReplySet, &'static [&'static str])],
}

impl ResponseCatalog {
    pub fn builtin() -> Self {
        Self { table: REPLIES }
    }

    /// Candidates for `set`. Falls back to the `Unknown` set, which always exists.
    pub fn candidates(&self, set: ReplySet) -> &'static [&'static str] {
        self.lookup(set)
            .or_else(|| self.lookup(ReplySet::Unknown))
            .unwrap_or(&[])
    }

    fn lookup(&self, set: ReplySet) -> Option<&'static [&'static str]> {
        self.table
            .iter()
            .find(|(key, _)| *key == set)
            .map(|(_, replies)| *replies)
    }
}

/// Both catalogs and the normalizer their patterns assume, built once at
/// startup and passed around by reference.
#[derive(Debug)]
pub struct Catalogs {
    pub normalizer: Normalizer,
    pub intents: IntentCatalog,
    pub responses: ResponseCatalog,
}

impl Catalogs {
    pub fn load() -> Result<Self, BotError> {
        let intents = IntentCatalog::compile()?;
        tracing::debug!(
            "Compiled {} intents with {} patterns",
            intents.entries.len(),
            intents.entries.iter().map(|(_, p)| p.len()).sum::<usize>()
        );
        Ok(Self {
            normalizer: Normalizer::new()?,
            intents,
            responses: ResponseCatalog::builtin(),
        })
    }
}
