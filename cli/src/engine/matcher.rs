//! # Intent Matcher
//!
//! File: cli/src/engine/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Applies the `IntentCatalog` to normalized text. Every intent is tested in
//! catalog order; within an intent the first pattern that hits anywhere in the
//! text wins and the remaining patterns of that intent are skipped. A single
//! input can therefore report several intents.
//!
//! Arithmetic is detected separately with the catalog's dedicated pattern and,
//! when present, is always reported last as `Intent::Math`.
//!
//! Matching reads no session state: the result depends only on the text and the
//! catalog.
//!
use crate::engine::catalog::{Intent, IntentCatalog};
use tracing::trace;

/// Operands and operator of a detected `<number> <op> <number>`, still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathCapture {
    pub lhs: String,
    pub operator: String,
    pub rhs: String,
}

/// Substrings extracted while matching.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captures {
    /// Capitalized name from a `provide_name` pattern.
    pub name: Option<String>,
    pub math: Option<MathCapture>,
}

/// Everything detected in one turn's input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub intents: Vec<Intent>,
    pub captures: Captures,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// Detects all intents in `normalized`.
pub fn detect(catalog: &IntentCatalog, normalized: &str) -> MatchResult {
    let mut result = MatchResult::default();

    for (intent, patterns) in catalog.entries() {
        let Some(hit) = patterns.iter().find_map(|pattern| pattern.captures(normalized)) else {
            continue;
        };
        trace!("Intent '{}' hit on {:?}", intent, hit.get(0).map(|m| m.as_str()));
        result.intents.push(intent);
        if intent == Intent::ProvideName {
            if let Some(name) = hit.get(1) {
                result.captures.name = Some(capitalize(name.as_str()));
            }
        }
    }

    if let Some(expr) = catalog.arithmetic().captures(normalized) {
        let token = |i: usize| expr.get(i).map_or_else(String::new, |m| m.as_str().to_string());
        result.intents.push(Intent::Math);
        result.captures.math = Some(MathCapture {
            lhs: token(1),
            operator: token(2),
            rhs: token(3),
        });
    }

    result
}

/// Titlecases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = titlecase(first);
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

/// Titlecase mapping of a single character.
///
/// Differs from `char::to_uppercase` only for the characters listed here:
/// ligatures and digraphs keep their second half lowercase, and Greek vowels
/// with ypogegrammeni take prosgegrammeni instead of a separate capital iota.
fn titlecase(c: char) -> String {
    let mapped = match c {
        'ß' => "Ss",
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        'ﬓ' => "Մն",
        'ﬔ' => "Մե",
        'ﬕ' => "Մի",
        'ﬖ' => "Վն",
        'ﬗ' => "Մխ",
        'ᾳ' => "ᾼ",
        'ῃ' => "ῌ",
        'ῳ' => "ῼ",
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            // Each lowercase block is followed by its titlecase block.
            return char::from_u32(c as u32 + 8)
                .map_or_else(|| c.to_uppercase().collect(), String::from);
        }
        _ => return c.to_uppercase().collect(),
    };
    mapped.to_string()
}
