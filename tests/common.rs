#![allow(dead_code)]
use assert_cmd::Command;
use rollcall::core::status::compute_status;
use rollcall::models::{AttendancePolicy, PersonRecord, Roster};
use rollcall::store::{history, MemoryStore};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rollcall() -> Command {
    Command::cargo_bin("rollcall").unwrap()
}

/// Create a unique test data dir inside the system temp dir and remove any
/// leftover from a previous run.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Temporary output file path for CSV exports.
pub fn temp_out(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_report.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn default_policy() -> AttendancePolicy {
    AttendancePolicy::default()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Person with status derived from the given times under `policy`.
pub fn person(
    id: &str,
    name: &str,
    trade: &str,
    time_in: &str,
    time_out: &str,
    policy: &AttendancePolicy,
) -> PersonRecord {
    let mut rec = PersonRecord::new(id, name, trade);
    rec.time_in = time_in.to_string();
    rec.time_out = time_out.to_string();
    rec.status = compute_status(time_in, time_out, policy);
    rec
}

pub fn roster_of(records: Vec<PersonRecord>) -> Roster {
    records.into_iter().map(|r| (r.id.clone(), r)).collect()
}

/// Archive a snapshot for `day` into the store.
pub fn archive(store: &MemoryStore, day: NaiveDate, records: Vec<PersonRecord>) {
    history::save_snapshot(store, day, &roster_of(records)).unwrap();
}
