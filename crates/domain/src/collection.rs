//! Insertion-ordered collection of classified items with grouped lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::{Bucket, NotificationItem};

/// Collection of classified items for one notification run.
///
/// The underlying sequence preserves insertion order; grouped queries go
/// through a memoized index keyed by bucket. Appending drops the memoized
/// index, and the next grouped query rebuilds it in full from the
/// authoritative sequence, so the grouping always reflects current contents.
#[derive(Debug, Default)]
pub struct NotificationCollection {
    items: Vec<NotificationItem>,
    index: OnceLock<BucketIndex>,
}

#[derive(Debug)]
struct BucketIndex {
    /// Distinct buckets in first-occurrence order.
    present: Vec<Bucket>,
    /// Item positions per bucket, in insertion order.
    by_bucket: HashMap<Bucket, Vec<usize>>,
}

impl BucketIndex {
    fn build(items: &[NotificationItem]) -> Self {
        let mut present = Vec::new();
        let mut by_bucket: HashMap<Bucket, Vec<usize>> = HashMap::new();

        for (position, item) in items.iter().enumerate() {
            let slot = by_bucket.entry(item.bucket()).or_default();
            if slot.is_empty() {
                present.push(item.bucket());
            }
            slot.push(position);
        }

        Self { present, by_bucket }
    }
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of the sequence.
    ///
    /// Duplicate titles and URLs are legal and preserved.
    pub fn append(&mut self, item: NotificationItem) {
        self.items.push(item);
        self.index.take();
    }

    /// Whether the collection holds any items at all.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Number of items across all buckets.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NotificationItem> {
        self.items.iter()
    }

    /// Whether at least one item landed in the given bucket.
    pub fn has_bucket(&self, bucket: Bucket) -> bool {
        self.count_in(bucket) > 0
    }

    /// Distinct buckets with at least one item, in first-occurrence order
    /// across the underlying sequence.
    pub fn present_buckets(&self) -> &[Bucket] {
        &self.index().present
    }

    /// Items in the given bucket, in insertion order. Empty when the bucket
    /// holds no items.
    pub fn items_in(&self, bucket: Bucket) -> Vec<&NotificationItem> {
        self.index()
            .by_bucket
            .get(&bucket)
            .map(|positions| positions.iter().map(|&position| &self.items[position]).collect())
            .unwrap_or_default()
    }

    /// Number of items in the given bucket.
    pub fn count_in(&self, bucket: Bucket) -> usize {
        self.index().by_bucket.get(&bucket).map_or(0, Vec::len)
    }

    fn index(&self) -> &BucketIndex {
        self.index.get_or_init(|| BucketIndex::build(&self.items))
    }
}
