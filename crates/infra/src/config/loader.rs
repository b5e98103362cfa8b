//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BOARDWATCH_LISTS`: Comma-separated Trello list identifiers
//! - `BOARDWATCH_IGNORE_LABELS`: Comma-separated label identifiers to exclude
//! - `BOARDWATCH_CHECK_DATE`: Check-instant override (date, datetime or epoch)
//! - `BOARDWATCH_UPCOMING_WITHIN`: Upcoming horizon (e.g. `+7 days`)
//! - `BOARDWATCH_CHANNEL`: Target channel override
//! - `BOARDWATCH_OVERDUE_MENTION`: Mention string for overdue items
//! - `BOARDWATCH_TRELLO_API_KEY`: Trello API key
//! - `BOARDWATCH_TRELLO_API_TOKEN`: Trello API token
//! - `BOARDWATCH_SLACK_BOT_TOKEN`: Slack bot token
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./boardwatch.json` or `./boardwatch.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use boardwatch_domain::config::{
    BoardwatchConfig, NotificationConfig, SlackConfig, TrelloConfig,
};
use boardwatch_domain::{BoardwatchError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `BoardwatchError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<BoardwatchConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `BoardwatchError::Config` if required variables are missing.
pub fn load_from_env() -> Result<BoardwatchConfig> {
    let lists = env_list(&env_var("BOARDWATCH_LISTS")?);
    let ignore_labels =
        std::env::var("BOARDWATCH_IGNORE_LABELS").map(|s| env_list(&s)).unwrap_or_default();

    let trello_api_key = env_var("BOARDWATCH_TRELLO_API_KEY")?;
    let trello_api_token = env_var("BOARDWATCH_TRELLO_API_TOKEN")?;
    let slack_bot_token = env_var("BOARDWATCH_SLACK_BOT_TOKEN")?;

    Ok(BoardwatchConfig {
        notification: NotificationConfig {
            lists,
            ignore_labels,
            check_date: std::env::var("BOARDWATCH_CHECK_DATE").ok(),
            upcoming_within: std::env::var("BOARDWATCH_UPCOMING_WITHIN").ok(),
            channel: std::env::var("BOARDWATCH_CHANNEL").ok(),
            overdue_mention: std::env::var("BOARDWATCH_OVERDUE_MENTION").ok(),
        },
        trello: TrelloConfig { api_key: trello_api_key, api_token: trello_api_token },
        slack: SlackConfig { bot_token: slack_bot_token },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `BoardwatchError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<BoardwatchConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BoardwatchError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BoardwatchError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BoardwatchError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Arguments
/// * `contents` - File contents as string
/// * `path` - Path to the file (for format detection and error messages)
///
/// # Errors
/// Returns `BoardwatchError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<BoardwatchConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BoardwatchError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BoardwatchError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(BoardwatchError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./boardwatch.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("boardwatch.json"),
            cwd.join("boardwatch.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("boardwatch.json"),
                exe_dir.join("boardwatch.toml"),
                exe_dir.join("../config.json"),
                exe_dir.join("../config.toml"),
                exe_dir.join("../../config.json"),
                exe_dir.join("../../config.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `BoardwatchError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        BoardwatchError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Split a comma-separated environment value into trimmed, non-empty entries.
fn env_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(ToString::to_string).collect()
}
