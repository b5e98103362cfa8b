//! Raw task-board card records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Card returned by the task-board gateway for one list, before
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Card title as shown on the board.
    pub title: String,
    /// Permalink to the card.
    pub url: String,
    /// Due timestamp, absent for undated cards.
    pub due_at: Option<DateTime<Utc>>,
    /// Label identifiers attached to the card.
    pub label_ids: Vec<String>,
}
