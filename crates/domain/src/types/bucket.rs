//! Classification buckets for due cards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BoardwatchError, Result};

/// Due-date bucket assigned to a qualifying card.
///
/// The set is closed: every classified item lands in exactly one of these
/// three buckets. A card that matches none of them is dropped, so absence of
/// a classification is represented by omission rather than a sentinel
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Due on the same calendar day as the check instant.
    Today,
    /// Due strictly before the check instant.
    Overdue,
    /// Due within the configured upcoming horizon.
    Upcoming,
}

impl Bucket {
    /// All buckets, in declaration order.
    pub const ALL: [Bucket; 3] = [Bucket::Today, Bucket::Overdue, Bucket::Upcoming];

    /// Human-readable section heading for the bucket.
    pub fn display_name(self) -> &'static str {
        match self {
            Bucket::Today => "Due Today",
            Bucket::Overdue => "Overdue",
            Bucket::Upcoming => "Upcoming",
        }
    }

    /// Convert a legacy numeric bucket id (1 = today, 2 = overdue,
    /// 3 = upcoming) still found in older configuration sources.
    pub fn from_legacy_id(id: i64) -> Result<Self> {
        match id {
            1 => Ok(Bucket::Today),
            2 => Ok(Bucket::Overdue),
            3 => Ok(Bucket::Upcoming),
            other => {
                Err(BoardwatchError::InvalidBucket(format!("bucket id {other} not implemented")))
            }
        }
    }
}

impl Default for Bucket {
    /// Fallback for callers that construct an item without picking a bucket;
    /// the classification engine always assigns one explicitly.
    fn default() -> Self {
        Bucket::Today
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Bucket {
    type Err = BoardwatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Bucket::Today),
            "overdue" => Ok(Bucket::Overdue),
            "upcoming" => Ok(Bucket::Upcoming),
            other => {
                Err(BoardwatchError::InvalidBucket(format!("bucket '{other}' not implemented")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_section_headings() {
        assert_eq!(Bucket::Today.display_name(), "Due Today");
        assert_eq!(Bucket::Overdue.display_name(), "Overdue");
        assert_eq!(Bucket::Upcoming.display_name(), "Upcoming");
    }

    #[test]
    fn default_bucket_is_today() {
        assert_eq!(Bucket::default(), Bucket::Today);
    }

    #[test]
    fn parses_known_bucket_names() {
        assert_eq!("today".parse::<Bucket>().unwrap(), Bucket::Today);
        assert_eq!(" Overdue ".parse::<Bucket>().unwrap(), Bucket::Overdue);
        assert_eq!("UPCOMING".parse::<Bucket>().unwrap(), Bucket::Upcoming);
    }

    #[test]
    fn unknown_bucket_name_is_invalid() {
        let err = "someday".parse::<Bucket>().unwrap_err();
        assert!(matches!(err, BoardwatchError::InvalidBucket(_)));
    }

    #[test]
    fn legacy_ids_map_to_buckets() {
        assert_eq!(Bucket::from_legacy_id(1).unwrap(), Bucket::Today);
        assert_eq!(Bucket::from_legacy_id(2).unwrap(), Bucket::Overdue);
        assert_eq!(Bucket::from_legacy_id(3).unwrap(), Bucket::Upcoming);
    }

    #[test]
    fn legacy_ids_cover_every_bucket() {
        let mapped: Vec<Bucket> =
            (1..=3).map(|id| Bucket::from_legacy_id(id).unwrap()).collect();
        assert_eq!(mapped, Bucket::ALL);
    }

    #[test]
    fn out_of_range_legacy_id_is_invalid() {
        let err = Bucket::from_legacy_id(4).unwrap_err();
        assert!(matches!(err, BoardwatchError::InvalidBucket(_)));
    }
}
