//! Message renderer - assembles the outgoing block sequence and delivers it

use std::sync::Arc;

use boardwatch_domain::{
    Block, BoardwatchError, Bucket, MessagePayload, NotificationCollection, Result,
};
use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, info, warn};

use super::ports::MessageGateway;

/// Fixed title of the outgoing notification message.
const MESSAGE_TITLE: &str = "Upcoming Due Trello Tasks";

/// Presentation settings for the rendered message.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Target channel override; the service default is used when absent.
    pub channel: Option<String>,
    /// Mention string rendered ahead of the bucket sections when overdue
    /// items are present.
    pub overdue_mention: Option<String>,
}

/// Outcome of one delivery attempt.
///
/// Send failures are reported through the error channel, keeping the three
/// possible results of a run distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The messaging service acknowledged the notification.
    Sent,
    /// The collection was empty, so no message was built or sent.
    NothingToSend,
}

/// Message renderer for a populated collection.
///
/// Reads the collection, never mutates it. The block sequence is built by
/// [`build_blocks`], which stays a pure function so tests can check the
/// rendered output without a gateway.
pub struct MessageRenderer {
    gateway: Arc<dyn MessageGateway>,
    options: RenderOptions,
}

impl MessageRenderer {
    /// Create a new message renderer.
    pub fn new(gateway: Arc<dyn MessageGateway>, options: RenderOptions) -> Self {
        Self { gateway, options }
    }

    /// Render the collection and hand the payload to the messaging gateway.
    ///
    /// An empty collection short-circuits to
    /// [`DeliveryOutcome::NothingToSend`] without touching the gateway. An
    /// unacknowledged send surfaces as a `Send` error.
    pub async fn deliver(&self, collection: &NotificationCollection) -> Result<DeliveryOutcome> {
        if !collection.has_items() {
            debug!("no classified items, skipping notification");
            return Ok(DeliveryOutcome::NothingToSend);
        }

        let payload = MessagePayload {
            blocks: build_blocks(collection, self.options.overdue_mention.as_deref()),
            channel: self.options.channel.clone(),
        };

        let acknowledged = self.gateway.send_message(&payload).await?;
        if !acknowledged {
            warn!("messaging service did not acknowledge the notification");
            return Err(BoardwatchError::Send(
                "message delivery was not acknowledged".into(),
            ));
        }

        info!(blocks = payload.blocks.len(), "notification sent");
        Ok(DeliveryOutcome::Sent)
    }
}

/// Build the ordered block sequence for a populated collection.
///
/// Order: the fixed title header, a divider, the overdue mention (only when
/// one is configured and overdue items exist), then one section per present
/// bucket in first-occurrence order. Due-date context lines accompany
/// `Overdue` and `Upcoming` items but never `Today` items.
pub fn build_blocks(
    collection: &NotificationCollection,
    overdue_mention: Option<&str>,
) -> Vec<Block> {
    let mut blocks = vec![Block::header(MESSAGE_TITLE), Block::divider()];

    if let Some(mention) = overdue_mention {
        if collection.has_bucket(Bucket::Overdue) {
            blocks.push(Block::section(format!("<{mention}>")));
        }
    }

    for &bucket in collection.present_buckets() {
        let count = collection.count_in(bucket);
        let noun = if count == 1 { "item" } else { "items" };
        blocks.push(Block::header(format!("{} ({count} {noun})", bucket.display_name())));

        for item in collection.items_in(bucket) {
            blocks.push(Block::section(format!("<{}|{}>", item.url(), item.title())));

            if matches!(bucket, Bucket::Overdue | Bucket::Upcoming) {
                blocks.push(Block::context(format!(
                    "*Due Date:* {}",
                    format_due_date(item.due_at())
                )));
            }
        }
    }

    blocks
}

/// Format a due timestamp's UTC calendar day as `M/D/YYYY` without leading
/// zeros.
fn format_due_date(due_at: DateTime<Utc>) -> String {
    format!("{}/{}/{}", due_at.month(), due_at.day(), due_at.year())
}
