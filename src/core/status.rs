//! Status derivation: raw check-in/out times plus a policy produce the
//! ordered multi-label status. Pure; no I/O, no failure path.

use crate::models::{AttendancePolicy, StatusLabel, StatusSet};
use crate::utils::time::minutes_of_day;

/// Derive the status set for one person's day.
///
/// - Empty `time_in` is terminal: `{absent}`.
/// - Anyone with a `time_in` is `present`; `late` is appended when arrival
///   is strictly after start-of-work plus the grace period (arriving exactly
///   at the threshold is on time).
/// - A recorded `time_out` adds exactly one checkout label: `left_early`
///   before the end of working hours, `left_on_time` at or after it.
///
/// Total over any string input: a nonempty but malformed time contributes
/// no label beyond `present`.
pub fn compute_status(time_in: &str, time_out: &str, policy: &AttendancePolicy) -> StatusSet {
    if time_in.is_empty() {
        return StatusSet::absent();
    }

    let mut status = StatusSet::present();

    if let (Some(checked_in), Some(start)) = (
        minutes_of_day(time_in),
        minutes_of_day(&policy.working_hours_start),
    ) {
        let threshold = start + policy.grace_period_minutes;
        if checked_in > threshold {
            status.push(StatusLabel::Late);
        }
    }

    if time_out.is_empty() {
        return status;
    }

    if let (Some(checked_out), Some(end)) = (
        minutes_of_day(time_out),
        minutes_of_day(&policy.working_hours_end),
    ) {
        if checked_out < end {
            status.push(StatusLabel::LeftEarly);
        } else {
            status.push(StatusLabel::LeftOnTime);
        }
    }

    status
}
