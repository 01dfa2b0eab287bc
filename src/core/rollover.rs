//! Day-end rollover: archive today's roster into history, then reset the
//! live roster for the next day.
//!
//! The two writes hit independent documents with no shared transaction, so
//! the service runs them as explicit phases with a recorded intermediate
//! state: a `rollover/pending` marker is written after the archive succeeds
//! and removed once the reset lands. A failure between the phases is
//! therefore distinguishable from a clean failure, and `resume` can finish
//! the job.

use crate::core::status::compute_status;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendancePolicy, Roster, Session};
use crate::store::{self, history, paths, roster, KeyValueStore};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};

/// What a successful `end_day` actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloverOutcome {
    pub date: NaiveDate,
    pub archived: usize,
    /// False only for an empty roster, where there is nothing to reset.
    pub roster_reset: bool,
}

pub struct DayRolloverService<'a> {
    store: &'a dyn KeyValueStore,
    policy: AttendancePolicy,
    in_flight: AtomicBool,
}

impl<'a> DayRolloverService<'a> {
    pub fn new(store: &'a dyn KeyValueStore, policy: AttendancePolicy) -> Self {
        Self {
            store,
            policy,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Archive the roster under `date` and reset the live roster.
    /// Admin-only and non-reentrant: a second call while one is in flight
    /// is rejected rather than interleaving the two writes.
    pub fn end_day(&self, session: &Session, date: NaiveDate) -> AppResult<RolloverOutcome> {
        if !session.is_admin() {
            return Err(AppError::Forbidden("end-day".to_string()));
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::RolloverInFlight);
        }
        let result = self.run(date);
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    fn run(&self, date: NaiveDate) -> AppResult<RolloverOutcome> {
        let mut snapshot = roster::load_roster(self.store)?;

        // The archive always carries freshly derived status, whatever the
        // stored field said.
        for rec in snapshot.values_mut() {
            rec.status = compute_status(&rec.time_in, &rec.time_out, &self.policy);
        }

        // Phase 1: archive. Nothing has been touched if this fails.
        history::save_snapshot(self.store, date, &snapshot)
            .map_err(|e| AppError::RolloverArchive(e.to_string()))?;

        if snapshot.is_empty() {
            // An empty snapshot is still archived, but there is no roster
            // to reset.
            return Ok(RolloverOutcome {
                date,
                archived: 0,
                roster_reset: false,
            });
        }

        self.mark_pending(date)?;

        // Phase 2: reset the live roster in one bulk write.
        let reset: Roster = snapshot
            .iter()
            .map(|(id, rec)| (id.clone(), rec.reset()))
            .collect();
        roster::save_roster(self.store, &reset)
            .map_err(|e| AppError::RolloverPending(date.to_string(), e.to_string()))?;

        self.store.delete(paths::ROLLOVER_PENDING)?;

        Ok(RolloverOutcome {
            date,
            archived: snapshot.len(),
            roster_reset: true,
        })
    }

    fn mark_pending(&self, date: NaiveDate) -> AppResult<()> {
        self.store
            .put(
                paths::ROLLOVER_PENDING,
                &json!({ "date": date.format("%Y-%m-%d").to_string() }),
            )
            .map_err(|e| AppError::RolloverPending(date.to_string(), e.to_string()))
    }

    /// Finish an interrupted rollover: if a pending marker exists, rebuild
    /// the reset image from the archived snapshot and write it. No-op when
    /// nothing is pending.
    pub fn resume(&self, session: &Session) -> AppResult<Option<RolloverOutcome>> {
        if !session.is_admin() {
            return Err(AppError::Forbidden("end-day".to_string()));
        }
        let Some(marker) = store::get_checked(self.store, paths::ROLLOVER_PENDING)? else {
            return Ok(None);
        };
        let date_str = marker
            .get("date")
            .and_then(|d| d.as_str())
            .ok_or_else(|| AppError::Store("malformed rollover/pending marker".to_string()))?;
        let date = crate::utils::date::parse_date(date_str)?;

        let snapshot = history::load_snapshot(self.store, date)?
            .ok_or_else(|| AppError::NoDataForDate(date_str.to_string()))?;

        let reset: Roster = snapshot
            .iter()
            .map(|(id, rec)| (id.clone(), rec.reset()))
            .collect();
        roster::save_roster(self.store, &reset)
            .map_err(|e| AppError::RolloverPending(date_str.to_string(), e.to_string()))?;
        self.store.delete(paths::ROLLOVER_PENDING)?;

        Ok(Some(RolloverOutcome {
            date,
            archived: snapshot.len(),
            roster_reset: true,
        }))
    }
}
