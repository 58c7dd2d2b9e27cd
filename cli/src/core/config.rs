//! # GoBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! GoBot runs fine with no configuration at all. This module lets a user
//! rename the bot, change the prompt, or opt into random fallback replies
//! through small TOML files.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line overrides (`--name`)
//! 2. An explicit file passed with `--config` (skips discovery), or else a
//!    project-specific `.gobot.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/gobot/config.toml`)
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! name = "GoBot"
//! version = "1.0"
//!
//! [session]
//! prompt = "You: "
//!
//! [replies]
//! fallback = "first" # or "random"
//! ```
//!
use crate::bot::FallbackPolicy;
use crate::core::error::{BotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub replies: RepliesConfig,
}

/// The bot's identity, shown in the banner and in the "who are you" reply.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,
    #[serde(default = "default_bot_version")]
    pub version: String,
}

/// Settings for the read-eval-print loop.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Text printed before each line is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RepliesConfig {
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            version: default_bot_version(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_bot_name() -> String {
    "GoBot".to_string()
}
fn default_bot_version() -> String {
    "1.0".to_string()
}
fn default_prompt() -> String {
    "You: ".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".gobot.toml";

/// Loads, merges, and validates the configuration.
///
/// `explicit_path` comes from `--config`; when present, user and project
/// discovery is skipped and the file must exist. `name_override` comes from
/// `--name` and wins over every file.
pub fn load_config(explicit_path: Option<&str>, name_override: Option<String>) -> Result<Config> {
    let mut config = match explicit_path {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    if let Some(name) = name_override {
        debug!("Overriding bot name from command line: {}", name);
        config.bot.name = name;
    }
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "GoBot", "gobot") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No project configuration file (.gobot.toml) found.");
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.gobot.toml`.
/// The search stops at the first directory that contains a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = Config::default();
    let pick = |project_value: String, user_value: String, default_value: &str| {
        if project_value != default_value {
            project_value
        } else {
            user_value
        }
    };
    Config {
        bot: BotConfig {
            name: pick(project.bot.name, user.bot.name, &defaults.bot.name),
            version: pick(project.bot.version, user.bot.version, &defaults.bot.version),
        },
        session: SessionConfig {
            prompt: pick(
                project.session.prompt,
                user.session.prompt,
                &defaults.session.prompt,
            ),
        },
        replies: RepliesConfig {
            fallback: if project.replies.fallback != defaults.replies.fallback {
                project.replies.fallback
            } else {
                user.replies.fallback
            },
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(BotError::Config(
            "Bot name cannot be empty.".to_string()
        )));
    }
    if config.bot.version.trim().is_empty() {
        return Err(anyhow!(BotError::Config(format!(
            "Bot version cannot be empty (bot name: '{}').",
            config.bot.name
        ))));
    }
    Ok(())
}
