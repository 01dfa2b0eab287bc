//! Typed accessors for the live roster and the settings document.

use super::{get_checked, paths, KeyValueStore};
use crate::errors::AppResult;
use crate::models::{Roster, Settings};

/// Read the whole live roster. A missing document is an empty roster.
pub fn load_roster(store: &dyn KeyValueStore) -> AppResult<Roster> {
    match get_checked(store, paths::ROSTER)? {
        Some(v) => Ok(serde_json::from_value(v)?),
        None => Ok(Roster::new()),
    }
}

/// Overwrite the live roster in one bulk write.
pub fn save_roster(store: &dyn KeyValueStore, roster: &Roster) -> AppResult<()> {
    store.put(paths::ROSTER, &serde_json::to_value(roster)?)
}

/// Read settings, falling back to the defaults when the document is absent.
pub fn load_settings(store: &dyn KeyValueStore) -> AppResult<Settings> {
    match get_checked(store, paths::SETTINGS)? {
        Some(v) => Ok(serde_json::from_value(v)?),
        None => Ok(Settings::default()),
    }
}

pub fn save_settings(store: &dyn KeyValueStore, settings: &Settings) -> AppResult<()> {
    store.put(paths::SETTINGS, &serde_json::to_value(settings)?)
}
