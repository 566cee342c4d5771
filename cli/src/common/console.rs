//! # Line Console
//!
//! File: cli/src/common/console.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The line-oriented I/O collaborator for the session loop. It wraps any
//! `BufRead` + `Write` pair, so the binary uses locked stdin/stdout while tests
//! use in-memory buffers.
//!
//! Each read prints the user label (no newline), flushes, and reads one line
//! with its line terminator removed. Each reply is printed on its own line
//! behind the bot label.
//!
use crate::core::error::BotError;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    user_label: String,
    bot_label: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        input: R,
        output: W,
        user_label: impl Into<String>,
        bot_label: impl Into<String>,
    ) -> Self {
        Self {
            input,
            output,
            user_label: user_label.into(),
            bot_label: bot_label.into(),
        }
    }

    /// Writes a line verbatim, without the bot label.
    pub fn announce(&mut self, text: &str) -> Result<(), BotError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts and reads one line. `None` means the input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>, BotError> {
        write!(self.output, "{}", self.user_label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn reply(&mut self, text: &str) -> Result<(), BotError> {
        writeln!(self.output, "{}{}", self.bot_label, text)?;
        self.output.flush()?;
        Ok(())
    }
}
