//! # Rulebot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs the
//! compiled `rulebot` binary with an explicit, empty configuration file so that a
//! developer's own `config.toml` or `.rulebot.toml` cannot change the transcript.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `rulebot` binary.
///
/// ## Panics
/// Panics if the `rulebot` binary cannot be found via `Command::cargo_bin`.
pub fn rulebot_cmd() -> Command {
    Command::cargo_bin("rulebot").expect("Failed to find rulebot binary for testing")
}

/// A scratch directory holding an empty `config.toml`.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("config.toml"), toml).expect("Failed to write config");
        Self { dir }
    }

    pub fn config_path(&self) -> String {
        self.dir.path().join("config.toml").to_string_lossy().into_owned()
    }

    /// `rulebot --config <sandbox config> --no-banner`, run inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = rulebot_cmd();
        cmd.current_dir(self.dir.path())
            .args(["--config", &self.config_path(), "--no-banner"]);
        cmd
    }
}
