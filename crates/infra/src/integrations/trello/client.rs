//! Trello REST client implementing the task-board gateway port

use async_trait::async_trait;
use boardwatch_core::TaskBoardGateway;
use boardwatch_domain::config::TrelloConfig;
use boardwatch_domain::{BoardwatchError, Card, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::InfraError;

const TRELLO_API_BASE: &str = "https://api.trello.com";

/// Trello REST client
///
/// Authenticates with the key/token query parameters Trello expects. One
/// `fetch_cards` call is one `GET /1/lists/{id}/cards` request; the core
/// never retries, so neither does this client.
pub struct TrelloClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_token: String,
}

impl TrelloClient {
    /// Create a client against the public Trello API.
    pub fn new(config: &TrelloConfig) -> Self {
        Self::with_base_url(config, TRELLO_API_BASE)
    }

    /// Create a client against an alternate base URL, used by tests to point
    /// at a mock server.
    pub fn with_base_url(config: &TrelloConfig, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: config.api_key.clone(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl TaskBoardGateway for TrelloClient {
    async fn fetch_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        let url = format!("{}/1/lists/{}/cards", self.base_url, list_id);
        debug!(list_id, "fetching Trello cards");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("token", self.api_token.as_str())])
            .send()
            .await
            .map_err(|e| {
                InfraError(BoardwatchError::Network(format!("Trello API request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            let message = format!("Trello API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 | 403 => InfraError(BoardwatchError::Auth(message)),
                _ => InfraError(BoardwatchError::Network(message)),
            }
            .into());
        }

        let cards: Vec<TrelloCard> = response.json().await.map_err(|e| {
            InfraError(BoardwatchError::InvalidInput(format!(
                "Failed to parse Trello response: {e}"
            )))
        })?;

        Ok(cards.into_iter().map(TrelloCard::into_card).collect())
    }
}

#[derive(Debug, Deserialize)]
struct TrelloCard {
    name: String,
    url: String,
    due: Option<String>,
    #[serde(rename = "idLabels", default)]
    id_labels: Vec<String>,
}

impl TrelloCard {
    fn into_card(self) -> Card {
        let due_at = self.due.as_deref().and_then(|raw| parse_due(raw, &self.name));

        Card { title: self.name, url: self.url, due_at, label_ids: self.id_labels }
    }
}

/// Parse a card's due timestamp. Trello sends RFC 3339; a malformed value is
/// logged and the card is treated as undated rather than failing the list.
fn parse_due(raw: &str, card_name: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(error) => {
            warn!(card = card_name, raw, %error, "unparseable due timestamp, treating card as undated");
            None
        }
    }
}
