//! Port interfaces for card classification

use async_trait::async_trait;
use boardwatch_domain::{Card, Result};

/// Trait for reading cards from a task-board list
///
/// Implementations own transport, authentication and pagination; failures
/// propagate to the engine unchanged.
#[async_trait]
pub trait TaskBoardGateway: Send + Sync {
    /// Fetch the cards of a list, in board order
    async fn fetch_cards(&self, list_id: &str) -> Result<Vec<Card>>;
}
