//! # Rulebot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout rulebot. The surface is
//! small: a conversation turn never fails, so most variants describe
//! startup problems (bad configuration, a pattern that does not compile) or a
//! broken terminal.
//!
//! ## Architecture
//!
//! - `BotError`: A custom error enum using `thiserror` for the specific failures.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling.
//!
//! `BotError::Math` is the one variant produced during a turn. The response
//! synthesizer consumes it locally and turns it into an apology reply.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if label.contains('\n') {
//!     return Err(BotError::Config("labels must be single-line".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the rulebot application.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Console I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Invalid catalog pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },

    #[error("Cannot evaluate arithmetic: {0}")]
    Math(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
