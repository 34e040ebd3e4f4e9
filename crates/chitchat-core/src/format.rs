use chrono::NaiveDateTime;

use crate::calendar::{calendar_days_between, days_between, years_between};
use crate::constants::UNREAD_BADGE_CAP;

/// Format a message time as `h:mm AM/PM`.
pub fn format_message_time(dt: NaiveDateTime) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// Compact date label for a conversation card.
///
/// Same day shows the clock time, yesterday shows "Yesterday", the past week
/// shows the weekday, the current year shows `Mon d`, older shows `Mon d, yyyy`.
pub fn format_date_for_chat(dt: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = calendar_days_between(dt.date(), now.date());
    let years = years_between(dt, now);

    if days == 0 {
        format_message_time(dt)
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days <= 7 {
        dt.format("%A").to_string()
    } else if years == 0 {
        dt.format("%b %-d").to_string()
    } else {
        dt.format("%b %-d, %Y").to_string()
    }
}

/// Age of a last-seen timestamp: "41m", "4h", "3d" or "long ago".
pub fn format_last_seen(last_seen: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now - last_seen;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = days_between(last_seen, now);

    if minutes < 60 {
        format!("{minutes}m")
    } else if hours < 24 {
        format!("{hours}h")
    } else if days < 7 {
        format!("{days}d")
    } else {
        "long ago".to_string()
    }
}

/// Badge text for an unread counter, `None` when nothing is unread.
pub fn unread_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > UNREAD_BADGE_CAP => Some(format!("{UNREAD_BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_same_day_shows_clock_time() {
        let now = at(2024, 6, 15, 16, 0);
        assert_eq!(format_date_for_chat(at(2024, 6, 15, 14, 30), now), "2:30 PM");
        assert_eq!(format_date_for_chat(at(2024, 6, 15, 9, 5), now), "9:05 AM");
    }

    #[test]
    fn test_recent_days() {
        let now = at(2024, 6, 15, 12, 0); // Saturday
        assert_eq!(format_date_for_chat(at(2024, 6, 14, 23, 0), now), "Yesterday");
        assert_eq!(format_date_for_chat(at(2024, 6, 12, 8, 0), now), "Wednesday");
        assert_eq!(format_date_for_chat(at(2024, 6, 8, 8, 0), now), "Saturday");
    }

    #[test]
    fn test_older_dates() {
        let now = at(2024, 6, 15, 12, 0);
        assert_eq!(format_date_for_chat(at(2024, 5, 2, 8, 0), now), "May 2");
        assert_eq!(format_date_for_chat(at(2023, 4, 15, 8, 0), now), "Apr 15, 2023");
    }

    #[test]
    fn test_last_seen_units() {
        let now = at(2024, 6, 15, 12, 0);
        assert_eq!(format_last_seen(now - Duration::minutes(41), now), "41m");
        assert_eq!(format_last_seen(now - Duration::minutes(60), now), "1h");
        assert_eq!(format_last_seen(now - Duration::hours(23), now), "23h");
        assert_eq!(format_last_seen(now - Duration::hours(50), now), "2d");
        assert_eq!(format_last_seen(now - Duration::days(7), now), "long ago");
    }

    #[test]
    fn test_unread_badge() {
        assert_eq!(unread_badge(0), None);
        assert_eq!(unread_badge(7), Some("7".to_string()));
        assert_eq!(unread_badge(99), Some("99".to_string()));
        assert_eq!(unread_badge(100), Some("99+".to_string()));
    }
}
