//! # Rulebot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! Shared utilities that are not part of the conversation engine itself.
//! Currently this is only the terminal side of a session:
//!
//! - **`console`**: Line-oriented prompt/read/reply over any reader and writer.
//!

/// Prompting, reading and replying one line at a time.
pub mod console;
