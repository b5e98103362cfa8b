//! Port interfaces for message delivery

use async_trait::async_trait;
use boardwatch_domain::{MessagePayload, Result};

/// Trait for delivering a rendered message payload
///
/// Implementations own transport and authentication. `Ok(true)` means the
/// service acknowledged the message, `Ok(false)` means it rejected the
/// message at the API level; `Err` is reserved for transport failures.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Deliver the payload to the messaging service
    async fn send_message(&self, payload: &MessagePayload) -> Result<bool>;
}
