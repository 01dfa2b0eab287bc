//! Date utilities: the organization's "today", inclusive ranges, weekday test.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Utc, Weekday};

/// Current date in the organization's fixed UTC offset (minutes).
/// The offset comes from configuration, never from the machine's local zone.
pub fn today_at_offset(utc_offset_minutes: i32) -> NaiveDate {
    let offset =
        FixedOffset::east_opt(utc_offset_minutes * 60).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    Utc::now().with_timezone(&offset).date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// All calendar days from `start` to `end`, both endpoints included.
/// Weekends are included; callers that want working days filter themselves.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        d = d + Duration::days(1);
    }
    out
}

pub fn is_weekday(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}
