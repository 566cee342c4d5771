//! # Session Loop
//!
//! File: cli/src/engine/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Owns the per-process `SessionState` and drives one turn at a time through
//! normalize, detect and synthesize.
//!
//! ## State Machine
//!
//! ```text
//!            blank line / any reply without `bye`
//!              +-----------+
//!              v           |
//!   start -> Running ------+
//!              |
//!              | exact exit keyword, detected `bye`, or end of input
//!              v
//!          Terminated
//! ```
//!
//! The exit-keyword check compares the whole trimmed, lowercased line against
//! `EXIT_KEYWORDS` and bypasses pattern matching entirely.
//!
use crate::common::console::Console;
use crate::core::error::Result;
use crate::engine::catalog::{Catalogs, ReplySet};
use crate::engine::chooser::Chooser;
use crate::engine::matcher;
use crate::engine::responder::Responder;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info, trace};

/// Lines that end the session immediately when typed on their own.
pub const EXIT_KEYWORDS: [&str; 5] = ["exit", "quit", "bye", "goodbye", "see you"];

/// Reply to a blank line.
pub const EMPTY_INPUT_REPLY: &str = "Please say something or type 'help'.";

/// Mutable memory of the conversation. Only the responder changes it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user_name: Option<String>,
    pub should_exit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

pub struct Session<'c> {
    catalogs: &'c Catalogs,
    chooser: Box<dyn Chooser>,
    state: SessionState,
    phase: Phase,
}

impl<'c> Session<'c> {
    pub fn new(catalogs: &'c Catalogs, chooser: Box<dyn Chooser>) -> Self {
        Self {
            catalogs,
            chooser,
            state: SessionState::default(),
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Processes one line and returns the reply, or `None` once terminated.
    pub fn turn(&mut self, line: &str) -> Option<String> {
        if self.phase == Phase::Terminated {
            return None;
        }

        if line.trim().is_empty() {
            return Some(EMPTY_INPUT_REPLY.to_string());
        }

        let mut responder = Responder::new(&self.catalogs.responses, self.chooser.as_mut());

        let lowered = line.trim().to_lowercase();
        if EXIT_KEYWORDS.contains(&lowered.as_str()) {
            debug!("Exit keyword '{}' entered", lowered);
            self.phase = Phase::Terminated;
            return Some(responder.choose(ReplySet::Bye).to_string());
        }

        let normalized = self.catalogs.normalizer.normalize(line);
        trace!("Normalized input: {:?}", normalized);
        let detected = matcher::detect(&self.catalogs.intents, &normalized);
        if detected.is_empty() {
            debug!("No intent matched {:?}", normalized);
        } else {
            debug!(
                "Detected intents: [{}]",
                detected
                    .intents
                    .iter()
                    .map(|intent| intent.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let reply = responder.synthesize(&detected.intents, &detected.captures, &mut self.state);
        if self.state.should_exit {
            self.phase = Phase::Terminated;
        }
        Some(reply)
    }

    /// Runs turns against `console` until the session terminates or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        info!("Session started");
        while self.phase() == Phase::Running {
            let Some(line) = console.read_line().context("Failed to read user input")? else {
                debug!("End of input reached");
                self.phase = Phase::Terminated;
                break;
            };
            if let Some(reply) = self.turn(&line) {
                console.reply(&reply).context("Failed to write reply")?;
            }
        }
        info!(
            "Session ended (user name: {})",
            self.state().user_name.as_deref().unwrap_or("unknown")
        );
        Ok(())
    }
}
