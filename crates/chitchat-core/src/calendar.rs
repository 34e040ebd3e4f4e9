//! Whole-unit distances between local date-times.
//!
//! Date-based units (days, weeks, months, years) between two date-times count
//! complete units: when the end's time of day is earlier than the start's, the
//! end date counts as one day less (and symmetrically for negative spans).
//! Every count truncates toward zero.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Calendar-day difference of the two dates, ignoring time of day.
pub fn calendar_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// End date shifted so that an incomplete last day is not counted.
fn adjusted_end_date(start: NaiveDateTime, end: NaiveDateTime) -> NaiveDate {
    let end_date = end.date();
    if end_date > start.date() && end.time() < start.time() {
        end_date - Duration::days(1)
    } else if end_date < start.date() && end.time() > start.time() {
        end_date + Duration::days(1)
    } else {
        end_date
    }
}

fn months_until(start: NaiveDate, end: NaiveDate) -> i64 {
    let packed = |d: NaiveDate| (d.year() as i64 * 12 + d.month0() as i64) * 32 + d.day() as i64;
    (packed(end) - packed(start)) / 32
}

pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    calendar_days_between(start.date(), adjusted_end_date(start, end))
}

pub fn weeks_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    days_between(start, end) / 7
}

pub fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    months_until(start.date(), adjusted_end_date(start, end))
}

pub fn years_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    months_between(start, end) / 12
}
