//! Classified notification items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// One classified card, immutable once constructed.
///
/// The bucket is assigned exactly once, at construction, by the
/// classification step; the fields are private so nothing can reassign it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    title: String,
    url: String,
    due_at: DateTime<Utc>,
    bucket: Bucket,
}

impl NotificationItem {
    /// Create an item with an explicit bucket.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        due_at: DateTime<Utc>,
        bucket: Bucket,
    ) -> Self {
        Self { title: title.into(), url: url.into(), due_at, bucket }
    }

    /// Create an item without picking a bucket; assigns the default
    /// (`Today`).
    pub fn with_default_bucket(
        title: impl Into<String>,
        url: impl Into<String>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self::new(title, url, due_at, Bucket::default())
    }

    /// Card title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Card permalink.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Due timestamp.
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Assigned bucket.
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }
}
