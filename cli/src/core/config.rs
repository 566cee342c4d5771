//! # Rulebot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the small amount of configuration
//! rulebot accepts. The intent and reply catalogs are compiled into the binary
//! and are not configurable; only presentation (prompt labels, banner) and the
//! reply-selection seed are.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--seed`, `--no-banner`), applied by `apply_overrides`
//! 2. An explicit `--config <PATH>` file, which replaces file discovery entirely
//! 3. Project-specific `.rulebot.toml` in the current directory or ancestors
//! 4. User-specific `config.toml` in the platform config directory
//! 5. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [session]
//! user_label = "> "
//! bot_label = "rulebot: "
//! banner = false
//! seed = 42
//! ```
//!
//! ```rust
//! let mut cfg = config::load_config(cli.config.as_deref())?;
//! config::apply_overrides(&mut cfg, cli.seed, cli.no_banner);
//! ```
//!
use crate::core::error::{BotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
}

/// Settings for the interactive session shell.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Printed (without a newline) before reading each user line.
    #[serde(default = "default_user_label")]
    pub user_label: String,
    /// Printed in front of every reply.
    #[serde(default = "default_bot_label")]
    pub bot_label: String,
    /// Whether to print the startup banner.
    #[serde(default = "default_banner")]
    pub banner: bool,
    /// Fixed seed for reply selection. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_label: default_user_label(),
            bot_label: default_bot_label(),
            banner: default_banner(),
            seed: None,
        }
    }
}

fn default_user_label() -> String {
    "You: ".to_string()
}
fn default_bot_label() -> String {
    "Bot: ".to_string()
}
fn default_banner() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".rulebot.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read (after `~` expansion). Otherwise the
/// user and project files are discovered and merged, project values winning.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let config = match explicit {
        Some(raw_path) => {
            let expanded = shellexpand::tilde(raw_path).into_owned();
            info!("Loading configuration from --config path: {}", expanded);
            load_config_from_path(Path::new(&expanded))?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Applies command-line flags on top of the file configuration.
pub fn apply_overrides(config: &mut Config, seed: Option<u64>, no_banner: bool) {
    if let Some(seed) = seed {
        debug!("Overriding reply seed from command line: {}", seed);
        config.session.seed = Some(seed);
    }
    if no_banner {
        config.session.banner = false;
    }
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Rulebot", "rulebot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.rulebot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.session.user_label = if project_cfg.session.user_label != default_user_label() {
        project_cfg.session.user_label
    } else {
        user.session.user_label
    };
    merged.session.bot_label = if project_cfg.session.bot_label != default_bot_label() {
        project_cfg.session.bot_label
    } else {
        user.session.bot_label
    };
    merged.session.banner = if project_cfg.session.banner != default_banner() {
        project_cfg.session.banner
    } else {
        user.session.banner
    };
    merged.session.seed = project_cfg.session.seed.or(user.session.seed);
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    for (field, label) in [
        ("user_label", &config.session.user_label),
        ("bot_label", &config.session.bot_label),
    ] {
        if label.contains(['\n', '\r']) {
            return Err(anyhow!(BotError::Config(format!(
                "'{}' must be a single line, got {:?}.",
                field, label
            ))));
        }
    }
    Ok(())
}
