//! Relative-date bucketing for the conversation list.
//!
//! Each item is labelled by the first matching rule ("Today", "Yesterday",
//! "This Week", ...). Rule order matters: anything up to seven calendar days
//! old is "This Week" before the week-based "Last Week" rule is consulted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::{calendar_days_between, months_between, weeks_between, years_between};

/// Anything with an identity and a local timestamp can be bucketed.
pub trait TimestampedItem {
    fn id(&self) -> &str;
    fn timestamp(&self) -> NaiveDateTime;
}

/// Relative date bucket, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DateBucket {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
    Older,
}

impl DateBucket {
    pub const ALL: [DateBucket; 9] = [
        DateBucket::Today,
        DateBucket::Yesterday,
        DateBucket::ThisWeek,
        DateBucket::LastWeek,
        DateBucket::ThisMonth,
        DateBucket::LastMonth,
        DateBucket::ThisYear,
        DateBucket::LastYear,
        DateBucket::Older,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::LastWeek => "Last Week",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::ThisYear => "This Year",
            Self::LastYear => "Last Year",
            Self::Older => "Older",
        }
    }

    /// Sort key, Today = 0 through Older = 8
    pub fn priority(&self) -> u8 {
        match self {
            Self::Today => 0,
            Self::Yesterday => 1,
            Self::ThisWeek => 2,
            Self::LastWeek => 3,
            Self::ThisMonth => 4,
            Self::LastMonth => 5,
            Self::ThisYear => 6,
            Self::LastYear => 7,
            Self::Older => 8,
        }
    }

    /// Label a single timestamp relative to `now`. First match wins.
    pub fn for_timestamp(timestamp: NaiveDateTime, now: NaiveDateTime) -> Self {
        let days = calendar_days_between(timestamp.date(), now.date());
        let weeks = weeks_between(timestamp, now);
        let months = months_between(timestamp, now);
        let years = years_between(timestamp, now);

        if days == 0 {
            Self::Today
        } else if days == 1 {
            Self::Yesterday
        } else if days <= 7 {
            Self::ThisWeek
        } else if weeks == 1 {
            Self::LastWeek
        } else if months == 0 {
            Self::ThisMonth
        } else if months == 1 {
            Self::LastMonth
        } else if years == 0 {
            Self::ThisYear
        } else if years == 1 {
            Self::LastYear
        } else {
            Self::Older
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A non-empty run of items sharing a bucket, most recent first
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup<T> {
    pub bucket: DateBucket,
    pub items: Vec<T>,
}

impl<T> DateGroup<T> {
    pub fn label(&self) -> &'static str {
        self.bucket.label()
    }
}

/// Group items into relative-date buckets.
///
/// Buckets come out in priority order and only when non-empty; items inside a
/// bucket are sorted by timestamp descending, keeping input order on ties.
pub fn classify<T: TimestampedItem>(items: Vec<T>, now: NaiveDateTime) -> Vec<DateGroup<T>> {
    let mut groups: Vec<DateGroup<T>> = Vec::new();

    for item in items {
        let bucket = DateBucket::for_timestamp(item.timestamp(), now);
        match groups.iter_mut().find(|g| g.bucket == bucket) {
            Some(group) => group.items.push(item),
            None => groups.push(DateGroup {
                bucket,
                items: vec![item],
            }),
        }
    }

    for group in &mut groups {
        // sort_by is stable
        group
            .items
            .sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    }
    groups.sort_by_key(|g| g.bucket.priority());

    tracing::trace!(groups = groups.len(), "classified items by date");
    groups
}
