//! Rolling-window performance scoring over the archived snapshots.
//!
//! The window is the 30 most recent calendar days ending today, restricted
//! to weekdays. A missing snapshot, or a person missing from one, counts as
//! absent for that day: missing data is never neutral.

use crate::errors::AppResult;
use crate::models::{
    Assessment, AssessmentLevel, PerformanceSummary, Roster, StatusLabel, StatusSet,
};
use crate::store::{history, KeyValueStore};
use crate::utils::date::is_weekday;
use chrono::{Duration, NaiveDate};

const WINDOW_DAYS: i64 = 30;

pub struct PerformanceScorer<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> PerformanceScorer<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Score one person over the window ending at `today`.
    ///
    /// History records are matched by name, as the archive has always been
    /// consumed; the live roster keys by id.
    pub fn score(&self, name: &str, trade: &str, today: NaiveDate) -> AppResult<PerformanceSummary> {
        let mut present = 0u32;
        let mut late = 0u32;
        let mut absent = 0u32;
        let mut left_early = 0u32;
        let mut total = 0u32;

        for offset in 0..WINDOW_DAYS {
            let date = today - Duration::days(offset);
            if !is_weekday(date) {
                continue;
            }
            total += 1;

            let record = history::load_snapshot(self.store, date)?
                .and_then(|snap| snap.into_values().find(|rec| rec.name == name));

            match record {
                Some(rec) => {
                    classify(&rec.status, &mut present, &mut late, &mut absent, &mut left_early)
                }
                None => absent += 1,
            }
        }

        let attendance_rate = rate(present + late, total);
        let late_rate = rate(late, total);

        Ok(PerformanceSummary {
            name: name.to_string(),
            trade: trade.to_string(),
            present,
            late,
            absent,
            left_early,
            total,
            attendance_rate,
            assessment: assess(attendance_rate, late_rate),
        })
    }

    /// Score everyone currently on the roster.
    pub fn score_all(&self, roster: &Roster, today: NaiveDate) -> AppResult<Vec<PerformanceSummary>> {
        let mut out = Vec::with_capacity(roster.len());
        let mut people: Vec<_> = roster.values().collect();
        people.sort_by(|a, b| a.name.cmp(&b.name));
        for rec in people {
            out.push(self.score(&rec.name, &rec.trade, today)?);
        }
        Ok(out)
    }
}

/// One day lands in exactly one of present/late/absent; `left_early` is a
/// separate tally that can accompany either of the first two.
fn classify(
    status: &StatusSet,
    present: &mut u32,
    late: &mut u32,
    absent: &mut u32,
    left_early: &mut u32,
) {
    if status.is_absent() {
        *absent += 1;
        return;
    }
    if status.contains(StatusLabel::Late) {
        *late += 1;
    } else {
        *present += 1;
    }
    if status.contains(StatusLabel::LeftEarly) {
        *left_early += 1;
    }
}

/// Percentage rounded to one decimal; 0.0 when the window is empty.
fn rate(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = f64::from(count) / f64::from(total) * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Qualitative assessment, first matching rule wins. The rule order is the
/// one the reporting has always used: the `late_rate > 30` warning shadows
/// the `late_rate > 50` branch below it, so a chronically late person gets
/// the warning, never the critical message.
fn assess(attendance_rate: f64, late_rate: f64) -> Assessment {
    if attendance_rate >= 95.0 && late_rate < 5.0 {
        Assessment::new(
            "Excellent attendance! Always on time.",
            AssessmentLevel::Excellent,
        )
    } else if attendance_rate >= 90.0 && late_rate < 10.0 {
        Assessment::new(
            "Good attendance with occasional lateness.",
            AssessmentLevel::Good,
        )
    } else if late_rate > 30.0 {
        Assessment::new("Frequently late. Needs improvement.", AssessmentLevel::Warning)
    } else if late_rate > 50.0 {
        Assessment::new(
            "Always late. Requires immediate attention.",
            AssessmentLevel::Critical,
        )
    } else if attendance_rate < 70.0 {
        Assessment::new("Poor attendance. Needs improvement.", AssessmentLevel::Critical)
    } else if attendance_rate < 85.0 {
        Assessment::new("Average attendance. Can do better.", AssessmentLevel::Warning)
    } else {
        Assessment::new("Good attendance overall.", AssessmentLevel::Good)
    }
}
