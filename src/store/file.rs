//! File-backed store: each document path maps to `{root}/{path}.json`.

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a document path, refusing anything that could escape the root.
    fn file_for(&self, path: &str) -> AppResult<PathBuf> {
        if path.is_empty()
            || path.split('/').any(|c| c.is_empty() || c == "." || c == "..")
        {
            return Err(AppError::Store(format!("invalid document path: {path}")));
        }
        Ok(self.root.join(format!("{path}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, path: &str) -> AppResult<Option<Value>> {
        let file = self.file_for(path)?;
        if !file.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&file)
            .map_err(|e| AppError::Store(format!("read {path}: {e}")))?;
        let value = serde_json::from_str(&raw)
            .map_err(|e| AppError::Store(format!("parse {path}: {e}")))?;
        Ok(Some(value))
    }

    fn put(&self, path: &str, value: &Value) -> AppResult<()> {
        let file = self.file_for(path)?;
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Store(format!("mkdir for {path}: {e}")))?;
        }
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&file, raw).map_err(|e| AppError::Store(format!("write {path}: {e}")))?;
        Ok(())
    }

    fn delete(&self, path: &str) -> AppResult<()> {
        let file = self.file_for(path)?;
        match fs::remove_file(&file) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Store(format!("delete {path}: {e}"))),
        }
    }
}
