//! # Rulebot Conversation Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything needed to turn one line of user text into one reply. Data flows
//! in a single direction per turn:
//!
//! ```text
//! raw line -> normalize -> matcher::detect -> Responder::synthesize -> reply
//!                                                   |
//!                                                   v
//!                                             SessionState
//! ```
//!
//! ## Modules
//!
//! - `catalog`: Intent patterns and reply templates, built once at startup
//! - `normalize`: Lowercasing and punctuation stripping
//! - `matcher`: Multi-intent detection with name and arithmetic captures
//! - `arithmetic`: Best-effort evaluation of `<number> <op> <number>`
//! - `chooser`: Injectable uniform choice among reply candidates
//! - `responder`: Reply synthesis and state side effects
//! - `session`: Session state machine and the blocking read/reply loop
//!

pub mod arithmetic;
pub mod catalog;
pub mod chooser;
pub mod matcher;
pub mod normalize;
pub mod responder;
pub mod session;
