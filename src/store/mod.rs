//! Whole-list JSON store (lightweight for CLI usage).
//!
//! All records live in one file as a single JSON array. Every write
//! replaces the full list; there is no partial update and no cross-process
//! locking, so concurrent invocations against the same file can clobber
//! each other.

use crate::errors::{AppError, AppResult};
use crate::models::record::ShiftRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ShiftStore {
    path: PathBuf,
}

impl ShiftStore {
    pub fn open(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record list. A missing file or malformed content is
    /// treated as "no records", never as a fatal error.
    pub fn load(&self) -> Vec<ShiftRecord> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Rewrite the full record list.
    pub fn save(&self, records: &[ShiftRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(records).map_err(|e| AppError::Store(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        self.save(&[])
    }
}
