//! # Response Synthesizer
//!
//! File: cli/src/engine/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a `MatchResult` into reply text and applies the turn's side effects to
//! `SessionState`:
//! - `provide_name` stores the captured name.
//! - `bye` raises the exit flag.
//!
//! Intents are answered in the order they were detected, one fragment each,
//! and the fragments are joined with single spaces. An empty intent list gets a
//! single fallback from the `unknown` set.
//!
//! Arithmetic errors stop here: a failed evaluation becomes `MATH_FAILURE_REPLY`.
//!
use crate::engine::arithmetic;
use crate::engine::catalog::{Intent, ReplySet, ResponseCatalog, NAME_PLACEHOLDER};
use crate::engine::chooser::{pick, Chooser};
use crate::engine::matcher::Captures;
use crate::engine::session::SessionState;
use tracing::{debug, info};

pub const MATH_FAILURE_REPLY: &str = "I couldn't compute that math expression.";

/// Borrowed view of the reply table plus the choice capability.
pub struct Responder<'a> {
    catalog: &'a ResponseCatalog,
    chooser: &'a mut dyn Chooser,
}

impl<'a> Responder<'a> {
    pub fn new(catalog: &'a ResponseCatalog, chooser: &'a mut dyn Chooser) -> Self {
        Self { catalog, chooser }
    }

    /// One uniformly chosen reply from `set`.
    pub fn choose(&mut self, set: ReplySet) -> &'static str {
        pick(self.chooser, self.catalog.candidates(set))
    }

    pub fn synthesize(
        &mut self,
        intents: &[Intent],
        captures: &Captures,
        state: &mut SessionState,
    ) -> String {
        if intents.is_empty() {
            return self.choose(ReplySet::Unknown).to_string();
        }

        let mut fragments: Vec<String> = Vec::with_capacity(intents.len());
        for intent in intents {
            match intent {
                Intent::Greeting => fragments.push(self.choose(ReplySet::Greeting).into()),
                Intent::Thanks => fragments.push(self.choose(ReplySet::Thanks).into()),
                Intent::Help => fragments.push(self.choose(ReplySet::Help).into()),
                Intent::Age => fragments.push(self.choose(ReplySet::Age).into()),
                Intent::Bye => {
                    fragments.push(self.choose(ReplySet::Bye).into());
                    state.should_exit = true;
                }
                Intent::AskName => match &state.user_name {
                    Some(name) => fragments.push(format!("You're {}, right?", name)),
                    None => fragments.push(self.choose(ReplySet::AskName).into()),
                },
                Intent::ProvideName => {
                    // Without a capture there is nothing to remember or say.
                    if let Some(name) = &captures.name {
                        info!("Remembering user name '{}'", name);
                        state.user_name = Some(name.clone());
                        let template = self.choose(ReplySet::NameReply);
                        fragments.push(template.replace(NAME_PLACEHOLDER, name));
                    }
                }
                Intent::Math => fragments.push(self.answer_math(captures)),
            }
        }
        fragments.join(" ")
    }

    fn answer_math(&self, captures: &Captures) -> String {
        let Some(expr) = &captures.math else {
            return MATH_FAILURE_REPLY.to_string();
        };
        match arithmetic::evaluate(expr) {
            Ok(answer) => format!("The answer is {}", answer),
            Err(e) => {
                debug!("Arithmetic on {:?} failed: {}", expr, e);
                MATH_FAILURE_REPLY.to_string()
            }
        }
    }
}
