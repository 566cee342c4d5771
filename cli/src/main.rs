//! # Rulebot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the rulebot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and the intent/reply catalogs
//! - Running the interactive session over stdin/stdout
//!
//! Logs go to stderr so that stdout carries only the conversation.
//!
//! ## Examples
//!
//! ```bash
//! # Chat interactively
//! rulebot
//!
//! # Reproducible replies, no banner, debug logging
//! rulebot --seed 42 --no-banner -vv
//!
//! # Scripted session
//! printf 'hi\nmy name is Ada\nbye\n' | rulebot --no-banner
//! ```
//!
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

mod common; // Terminal console
mod core; // Configuration and errors
mod engine; // Normalizer, matcher, responder and session loop

use crate::common::console::Console;
use crate::engine::catalog::Catalogs;
use crate::engine::chooser::RandomChooser;
use crate::engine::session::Session;

const BANNER: &str = "ChatBot v1.0 — type 'exit' or 'quit' to leave.";

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "rulebot",
    about = "A rule-based chatbot: greetings, names, thanks and quick arithmetic",
    long_about = "Reads one line at a time, recognizes a few fixed intents by pattern\n\
                  matching and answers with a templated reply. Type 'exit' or 'quit' to leave.",
    version
)]
struct Cli {
    /// Read configuration from this file instead of the user/project files.
    #[arg(long, value_name = "PATH")]
    config: Option<String>,
    /// Seed reply selection for a reproducible session.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Do not print the startup banner.
    #[arg(long)]
    no_banner: bool,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = core::config::load_config(cli.config.as_deref())?;
    core::config::apply_overrides(&mut config, cli.seed, cli.no_banner);
    let session_cfg = config.session;

    let catalogs = Catalogs::load().context("Failed to build intent catalog")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        session_cfg.user_label,
        session_cfg.bot_label,
    );
    if session_cfg.banner {
        console.announce(BANNER).context("Failed to print banner")?;
    }

    let mut session = Session::new(&catalogs, Box::new(RandomChooser::new(session_cfg.seed)));
    session.run(&mut console)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("rulebot failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
