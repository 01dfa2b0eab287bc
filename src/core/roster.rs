//! Live roster operations: check-in/out plus the thin add/remove/list
//! conveniences the engine needs something to act on.
//!
//! Every mutation is read-modify-write over the single roster document,
//! and re-derives the record's status before writing back.

use crate::core::status::compute_status;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendancePolicy, PersonRecord, Roster};
use crate::store::{roster, KeyValueStore};
use crate::utils::time::validate_time;
use chrono::Utc;

/// Record a check-in time (HH:MM) for `id` and refresh its status.
pub fn check_in(
    store: &dyn KeyValueStore,
    policy: &AttendancePolicy,
    id: &str,
    time: &str,
) -> AppResult<PersonRecord> {
    let time = validate_time(time)?;
    update_record(store, id, |rec| {
        rec.time_in = time.clone();
        rec.status = compute_status(&rec.time_in, &rec.time_out, policy);
    })
}

/// Record a check-out time (HH:MM) for `id` and refresh its status.
pub fn check_out(
    store: &dyn KeyValueStore,
    policy: &AttendancePolicy,
    id: &str,
    time: &str,
) -> AppResult<PersonRecord> {
    let time = validate_time(time)?;
    update_record(store, id, |rec| {
        rec.time_out = time.clone();
        rec.status = compute_status(&rec.time_in, &rec.time_out, policy);
    })
}

fn update_record<F>(store: &dyn KeyValueStore, id: &str, apply: F) -> AppResult<PersonRecord>
where
    F: Fn(&mut PersonRecord),
{
    let mut all = roster::load_roster(store)?;
    let rec = all
        .get_mut(id)
        .ok_or_else(|| AppError::UnknownPerson(id.to_string()))?;
    apply(rec);
    let updated = rec.clone();
    roster::save_roster(store, &all)?;
    Ok(updated)
}

/// Add a person with a fresh millisecond-timestamp id, empty times and
/// absent status. Returns the new id.
pub fn add_person(store: &dyn KeyValueStore, name: &str, trade: &str) -> AppResult<String> {
    let mut all = roster::load_roster(store)?;
    let mut id = Utc::now().timestamp_millis().to_string();
    // Two adds inside the same millisecond would collide.
    while all.contains_key(&id) {
        id.push('0');
    }
    all.insert(id.clone(), PersonRecord::new(&id, name, trade));
    roster::save_roster(store, &all)?;
    Ok(id)
}

pub fn remove_person(store: &dyn KeyValueStore, id: &str) -> AppResult<()> {
    let mut all = roster::load_roster(store)?;
    if all.remove(id).is_none() {
        return Err(AppError::UnknownPerson(id.to_string()));
    }
    roster::save_roster(store, &all)
}

/// Roster with every status freshly derived; what the dashboard shows.
pub fn load_with_status(
    store: &dyn KeyValueStore,
    policy: &AttendancePolicy,
) -> AppResult<Roster> {
    let mut all = roster::load_roster(store)?;
    for rec in all.values_mut() {
        rec.status = compute_status(&rec.time_in, &rec.time_out, policy);
    }
    Ok(all)
}
