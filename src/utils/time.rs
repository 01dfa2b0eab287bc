//! Time utilities: parsing HH:MM, minutes-of-day arithmetic, formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minutes since midnight for an "HH:MM" string, or None if it does not parse.
pub fn minutes_of_day(t: &str) -> Option<u32> {
    let (h, m) = t.split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

pub fn format_minutes(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Validate a user-supplied HH:MM string, keeping the original text.
pub fn validate_time(t: &str) -> AppResult<String> {
    match parse_time(t) {
        Some(_) => Ok(t.to_string()),
        None => Err(AppError::InvalidTime(t.to_string())),
    }
}
