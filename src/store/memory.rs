//! In-memory store used by tests and tooling.
//!
//! `fail_puts_on` marks a path so the next writes to it fail, which is how
//! the rollover tests exercise the partial-failure window between the two
//! day-end writes.

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<String, Value>>,
    failing_puts: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All subsequent `put`s to `path` fail until `clear_failures`.
    pub fn fail_puts_on(&self, path: &str) {
        self.failing_puts.lock().unwrap().insert(path.to_string());
    }

    pub fn clear_failures(&self) {
        self.failing_puts.lock().unwrap().clear();
    }

    pub fn contains(&self, path: &str) -> bool {
        self.docs.lock().unwrap().contains_key(path)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, path: &str) -> AppResult<Option<Value>> {
        Ok(self.docs.lock().unwrap().get(path).cloned())
    }

    fn put(&self, path: &str, value: &Value) -> AppResult<()> {
        if self.failing_puts.lock().unwrap().contains(path) {
            return Err(AppError::Store(format!("write to {path} refused")));
        }
        self.docs
            .lock()
            .unwrap()
            .insert(path.to_string(), value.clone());
        Ok(())
    }

    fn delete(&self, path: &str) -> AppResult<()> {
        self.docs.lock().unwrap().remove(path);
        Ok(())
    }
}
