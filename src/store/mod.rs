//! JSON-document key-value store abstraction.
//!
//! The engine never talks to a concrete backend: everything goes through
//! [`KeyValueStore`], a get/put/delete contract over named JSON documents.
//! `FileStore` backs the CLI with files under the data dir; `MemoryStore`
//! backs the tests and can inject write failures.

pub mod file;
pub mod history;
pub mod memory;
pub mod roster;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::{AppError, AppResult};
use serde_json::Value;

/// Document paths understood by the backends.
pub mod paths {
    use chrono::NaiveDate;

    pub const ROSTER: &str = "teachers";
    pub const SETTINGS: &str = "settings";
    pub const ROLLOVER_PENDING: &str = "rollover/pending";

    pub fn history_daily(date: NaiveDate) -> String {
        format!("history/daily/{}", date.format("%Y-%m-%d"))
    }
}

pub trait KeyValueStore: Send + Sync {
    /// Fetch a document. `Ok(None)` means the path holds nothing, which is
    /// not an error.
    fn get(&self, path: &str) -> AppResult<Option<Value>>;

    /// Overwrite the document at `path` wholesale.
    fn put(&self, path: &str, value: &Value) -> AppResult<()>;

    fn delete(&self, path: &str) -> AppResult<()>;
}

/// The backend may answer a transport-level success whose body is itself an
/// error report (`{"error": ...}`). Treat that as a failed fetch.
pub fn reject_error_body(path: &str, value: Value) -> AppResult<Value> {
    if let Some(err) = value.get("error") {
        let msg = err.as_str().map(str::to_string).unwrap_or_else(|| err.to_string());
        return Err(AppError::Store(format!("{path}: {msg}")));
    }
    Ok(value)
}

/// `get` + error-body check in one step; missing documents stay `None`.
pub fn get_checked(store: &dyn KeyValueStore, path: &str) -> AppResult<Option<Value>> {
    match store.get(path)? {
        Some(v) => Ok(Some(reject_error_body(path, v)?)),
        None => Ok(None),
    }
}
