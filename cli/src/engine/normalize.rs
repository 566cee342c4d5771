//! # Input Normalizer
//!
//! File: cli/src/engine/normalize.rs
//! Author: Christi Mahu
//!
//! Turns a raw line into the form the intent patterns are written against:
//! lowercase, only word characters, whitespace and the arithmetic symbols
//! `+ - * / .`, with no leading or trailing whitespace.
//!
//! Word characters are letters (`\p{L}`), numbers (`\p{N}`) and `_`. Combining
//! marks are not word characters, so Devanagari vowel signs or a stray U+0307
//! are stripped like punctuation.
//!
use crate::core::error::BotError;
use regex::Regex;

const STRIPPED_CHARS: &str = r"[^\p{L}\p{N}_\s+\-*/.]";

#[derive(Debug)]
pub struct Normalizer {
    stripped: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self, BotError> {
        Ok(Self {
            stripped: Regex::new(STRIPPED_CHARS)?,
        })
    }

    /// Normalizes `raw`. Total over every input and idempotent.
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let filtered = self.stripped.replace_all(&lowered, "");
        // Trim last: stripping punctuation can expose whitespace at either end.
        filtered.trim().to_string()
    }
}
