use super::status::StatusSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The live roster: one record per person, keyed by record id.
/// A BTreeMap keeps bulk writes byte-stable across runs.
pub type Roster = BTreeMap<String, PersonRecord>;

/// One person's row in the live roster (and, once archived, in a snapshot).
///
/// `time_in`/`time_out` are either `""` (not recorded) or "HH:MM". `status`
/// is derived, never authoritative: every reader recomputes it from the
/// times and the current policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub trade: String,
    #[serde(default)]
    pub time_in: String,
    #[serde(default)]
    pub time_out: String,
    #[serde(default)]
    pub status: StatusSet,
}

impl PersonRecord {
    /// Fresh roster entry: no times recorded yet, absent until checked in.
    pub fn new(id: &str, name: &str, trade: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            trade: trade.to_string(),
            time_in: String::new(),
            time_out: String::new(),
            status: StatusSet::absent(),
        }
    }

    /// Copy with times cleared and status back to absent; everything else
    /// untouched. Used by the day-end reset.
    pub fn reset(&self) -> Self {
        Self {
            time_in: String::new(),
            time_out: String::new(),
            status: StatusSet::absent(),
            ..self.clone()
        }
    }
}
