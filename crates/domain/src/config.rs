//! Application configuration structures.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardwatchConfig {
    /// What to check and how to report it.
    pub notification: NotificationConfig,
    /// Trello API credentials.
    pub trello: TrelloConfig,
    /// Slack API credentials.
    pub slack: SlackConfig,
}

/// Notification run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// List identifiers to query, in order. Must be non-empty.
    pub lists: Vec<String>,
    /// Label identifiers that exclude a card from notification.
    #[serde(default)]
    pub ignore_labels: Vec<String>,
    /// Check-instant override: an absolute date, datetime, or numeric
    /// epoch. Falls back to the current time when absent or unparseable.
    #[serde(default)]
    pub check_date: Option<String>,
    /// Horizon for the upcoming bucket, relative to the check instant
    /// (e.g. `+7 days`). The bucket stays unpopulated when absent.
    #[serde(default)]
    pub upcoming_within: Option<String>,
    /// Target channel override for the outgoing message.
    #[serde(default)]
    pub channel: Option<String>,
    /// Mention string rendered ahead of the bucket sections when overdue
    /// items are present.
    #[serde(default)]
    pub overdue_mention: Option<String>,
}

/// Trello credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// API key.
    pub api_key: String,
    /// API token paired with the key.
    pub api_token: String,
}

/// Slack credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot token used as bearer auth for `chat.postMessage`.
    pub bot_token: String,
}
