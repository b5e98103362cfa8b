//! Classification engine - filters and buckets cards by due date

use std::collections::HashSet;
use std::sync::Arc;

use boardwatch_domain::config::NotificationConfig;
use boardwatch_domain::utils::dates::{parse_check_instant, parse_horizon};
use boardwatch_domain::{
    BoardwatchError, Bucket, NotificationCollection, NotificationItem, Result,
};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use super::ports::TaskBoardGateway;

/// Settings for one classification run.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    /// List identifiers to query, in order. Must be non-empty.
    pub lists: Vec<String>,
    /// Label identifiers that exclude a card from classification.
    pub ignore_labels: Vec<String>,
    /// Check-instant expression; the current time is used when absent.
    pub check_date: Option<String>,
    /// Horizon expression for the upcoming bucket; the bucket stays
    /// unpopulated when absent.
    pub upcoming_within: Option<String>,
}

impl From<&NotificationConfig> for ClassifierConfig {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            lists: config.lists.clone(),
            ignore_labels: config.ignore_labels.clone(),
            check_date: config.check_date.clone(),
            upcoming_within: config.upcoming_within.clone(),
        }
    }
}

/// Classification engine for turning raw card data into a populated
/// collection.
///
/// One call to [`execute_check`](Self::execute_check) is one notification
/// run: it fetches every configured list through the task-board port,
/// applies the exclusion and bucketing rules, and returns a fresh
/// collection. Gateway failures propagate unchanged.
pub struct ClassificationEngine {
    gateway: Arc<dyn TaskBoardGateway>,
    config: ClassifierConfig,
}

impl std::fmt::Debug for ClassificationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationEngine").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ClassificationEngine {
    /// Create a new classification engine.
    ///
    /// # Errors
    /// Returns a `Config` error when no list identifiers are configured.
    pub fn new(gateway: Arc<dyn TaskBoardGateway>, config: ClassifierConfig) -> Result<Self> {
        if config.lists.is_empty() {
            return Err(BoardwatchError::Config(
                "at least one list id must be configured".into(),
            ));
        }

        Ok(Self { gateway, config })
    }

    /// Fetch, filter and bucket the cards of every configured list.
    ///
    /// Lists are processed in configured order and cards in the order the
    /// gateway returned them, so the collection's insertion order is stable
    /// across runs with the same inputs.
    pub async fn execute_check(&self) -> Result<NotificationCollection> {
        let check_instant = self.resolve_check_instant();
        let horizon = self.resolve_horizon();
        let exclusions: HashSet<&str> =
            self.config.ignore_labels.iter().map(String::as_str).collect();

        let mut collection = NotificationCollection::new();

        for list_id in &self.config.lists {
            let cards = self.gateway.fetch_cards(list_id).await?;
            debug!(list_id, count = cards.len(), "fetched cards for list");

            for card in cards {
                let Some(due_at) = card.due_at else {
                    continue;
                };

                if card.label_ids.iter().any(|label| exclusions.contains(label.as_str())) {
                    continue;
                }

                if let Some(bucket) = bucket_for(due_at, check_instant, horizon) {
                    collection.append(NotificationItem::new(card.title, card.url, due_at, bucket));
                }
            }
        }

        debug!(items = collection.len(), "classification run complete");
        Ok(collection)
    }

    /// Resolve the check instant, substituting "now" for an absent or
    /// unparseable expression. A bad expression never aborts the run.
    fn resolve_check_instant(&self) -> DateTime<Utc> {
        match self.config.check_date.as_deref() {
            None => Utc::now(),
            Some(expr) => match parse_check_instant(expr) {
                Ok(instant) => instant,
                Err(error) => {
                    warn!(expr, %error, "unparseable check date, falling back to now");
                    Utc::now()
                }
            },
        }
    }

    /// Resolve the upcoming horizon; an unparseable expression disables the
    /// upcoming bucket for the run.
    fn resolve_horizon(&self) -> Option<Duration> {
        let expr = self.config.upcoming_within.as_deref()?;
        match parse_horizon(expr) {
            Ok(horizon) => Some(horizon),
            Err(error) => {
                warn!(expr, %error, "unparseable horizon, upcoming bucket disabled");
                None
            }
        }
    }
}

/// Bucket a due timestamp relative to the check instant.
///
/// Calendar-day equality wins before the ordered comparisons, so a card due
/// later the same day is still `Today` rather than `Upcoming`, and a card
/// due earlier the same day is `Today` rather than `Overdue`. A card that
/// matches no rule returns `None` and is dropped by the engine.
pub fn bucket_for(
    due_at: DateTime<Utc>,
    check_instant: DateTime<Utc>,
    horizon: Option<Duration>,
) -> Option<Bucket> {
    if due_at.date_naive() == check_instant.date_naive() {
        return Some(Bucket::Today);
    }

    if due_at < check_instant {
        return Some(Bucket::Overdue);
    }

    match horizon {
        Some(horizon) if due_at < check_instant + horizon => Some(Bucket::Upcoming),
        _ => None,
    }
}
