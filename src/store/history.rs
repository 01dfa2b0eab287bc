//! Typed accessors for the per-date history snapshots.

use super::{get_checked, paths, KeyValueStore};
use crate::errors::AppResult;
use crate::models::Roster;
use chrono::NaiveDate;

/// Fetch the snapshot for `date`. `Ok(None)` when nothing was archived —
/// the caller decides whether that is an error.
pub fn load_snapshot(store: &dyn KeyValueStore, date: NaiveDate) -> AppResult<Option<Roster>> {
    match get_checked(store, &paths::history_daily(date))? {
        Some(v) => Ok(Some(serde_json::from_value(v)?)),
        None => Ok(None),
    }
}

/// Archive the roster under `date`, overwriting any earlier snapshot for
/// the same day (running day-end twice is an idempotent overwrite).
pub fn save_snapshot(store: &dyn KeyValueStore, date: NaiveDate, roster: &Roster) -> AppResult<()> {
    store.put(&paths::history_daily(date), &serde_json::to_value(roster)?)
}
