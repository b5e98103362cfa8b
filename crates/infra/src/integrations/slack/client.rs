//! Slack Web API client implementing the message gateway port

use async_trait::async_trait;
use boardwatch_core::MessageGateway;
use boardwatch_domain::config::SlackConfig;
use boardwatch_domain::{BoardwatchError, MessagePayload, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::InfraError;

const SLACK_API_BASE: &str = "https://slack.com/api";

/// Slack Web API client
///
/// Posts the rendered payload to `chat.postMessage` with bearer-token
/// authentication. Slack wraps every response in an `ok`/`error` envelope;
/// an `ok: false` answer is an API-level rejection and surfaces as an
/// unacknowledged send, not a transport error.
pub struct SlackClient {
    client: Client,
    base_url: String,
    bot_token: String,
}

impl SlackClient {
    /// Create a client against the public Slack API.
    pub fn new(config: &SlackConfig) -> Self {
        Self::with_base_url(config, SLACK_API_BASE)
    }

    /// Create a client against an alternate base URL, used by tests to point
    /// at a mock server.
    pub fn with_base_url(config: &SlackConfig, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            bot_token: config.bot_token.clone(),
        }
    }
}

#[async_trait]
impl MessageGateway for SlackClient {
    async fn send_message(&self, payload: &MessagePayload) -> Result<bool> {
        let url = format!("{}/chat.postMessage", self.base_url);
        debug!(blocks = payload.blocks.len(), "posting Slack message");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.bot_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                InfraError(BoardwatchError::Network(format!("Slack API request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            let message = format!("Slack API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 | 403 => InfraError(BoardwatchError::Auth(message)),
                _ => InfraError(BoardwatchError::Network(message)),
            }
            .into());
        }

        let envelope: SlackEnvelope = response.json().await.map_err(|e| {
            InfraError(BoardwatchError::InvalidInput(format!(
                "Failed to parse Slack response: {e}"
            )))
        })?;

        if !envelope.ok {
            warn!(
                error = envelope.error.as_deref().unwrap_or("unknown"),
                "Slack rejected the message"
            );
            return Ok(false);
        }

        Ok(true)
    }
}

#[derive(Debug, Deserialize)]
struct SlackEnvelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}
