//! Domain logic for the chitchat mock messaging client: relative-date
//! grouping, card corner geometry, presence, filters and sample data.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod filter;
pub mod format;
pub mod geometry;
pub mod grouping;
pub mod models;
pub mod sample;
pub mod sections;

pub use config::{ConfigError, CoreConfig, ListGeometryConfig};
pub use filter::{ChatFilter, FilterSelection};
pub use geometry::{ChatListStateManager, CornerRadii};
pub use grouping::{classify, DateBucket, DateGroup, TimestampedItem};
pub use sections::{ChatListSections, ListStateRegistry, Section, SectionKey};
