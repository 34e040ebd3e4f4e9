use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::format::format_last_seen;

/// What the avatar status indicator shows, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Typing,
    Online,
    /// Compact age label such as "41m" or "4h"
    LastSeen(String),
    Offline,
}

impl Presence {
    /// Resolve presence flags into a single indicator.
    ///
    /// Typing only counts while online. `max_age_hours` hides last-seen
    /// labels older than the given number of whole hours.
    pub fn resolve(
        is_online: bool,
        is_typing: bool,
        last_seen: Option<NaiveDateTime>,
        now: NaiveDateTime,
        max_age_hours: Option<i64>,
    ) -> Self {
        if is_online && is_typing {
            return Presence::Typing;
        }
        if is_online {
            return Presence::Online;
        }
        match last_seen {
            Some(seen) => {
                let hours = (now - seen).num_hours();
                match max_age_hours {
                    Some(max) if hours > max => Presence::Offline,
                    _ => Presence::LastSeen(format_last_seen(seen, now)),
                }
            }
            None => Presence::Offline,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Presence::Typing | Presence::Online)
    }

    /// Text for headers ("typing...", "online", "last seen 4h")
    pub fn describe(&self) -> String {
        match self {
            Presence::Typing => "typing...".to_string(),
            Presence::Online => "online".to_string(),
            Presence::LastSeen(age) => format!("last seen {age}"),
            Presence::Offline => "offline".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_typing_requires_online() {
        assert_eq!(
            Presence::resolve(true, true, None, now(), None),
            Presence::Typing
        );
        assert_eq!(
            Presence::resolve(false, true, None, now(), None),
            Presence::Offline,
            "typing while offline must not show the typing indicator"
        );
    }

    #[test]
    fn test_online_beats_last_seen() {
        let seen = now() - Duration::minutes(41);
        assert_eq!(
            Presence::resolve(true, false, Some(seen), now(), None),
            Presence::Online
        );
    }

    #[test]
    fn test_last_seen_label() {
        let seen = now() - Duration::minutes(41);
        assert_eq!(
            Presence::resolve(false, false, Some(seen), now(), None),
            Presence::LastSeen("41m".to_string())
        );
    }

    #[test]
    fn test_max_age_boundary_is_inclusive() {
        let seen = now() - Duration::hours(24);
        assert_eq!(
            Presence::resolve(false, false, Some(seen), now(), Some(24)),
            Presence::LastSeen("1d".to_string())
        );
        let older = now() - Duration::hours(25);
        assert_eq!(
            Presence::resolve(false, false, Some(older), now(), Some(24)),
            Presence::Offline
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(Presence::Typing.describe(), "typing...");
        assert_eq!(Presence::LastSeen("4h".into()).describe(), "last seen 4h");
        assert!(Presence::Online.is_online());
        assert!(!Presence::Offline.is_online());
    }
}
