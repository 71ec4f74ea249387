// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value slot storage.
//!
//! A minimal synchronous, string-valued get/set/remove API. The workout
//! store keeps its whole collection in a single slot.
//!
//! Implementations:
//! - `FileKvStore`: one file per key in a data directory
//! - `MemoryKvStore`: in-process map for tests

use dashmap::DashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Errors from slot storage.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Synchronous string-valued slot storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot; `Ok(None)` if it does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Drop a slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<(), KvError>;
}

/// File-backed slots: key `k` lives at `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Open (and create if needed) a data directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, KvError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::info!(path = %dir.display(), "Opened data directory");
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, KvError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.slot_path(key)?;

        // Write to a sibling temp file then rename, so a crash mid-write
        // never leaves a truncated slot behind.
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| KvError::Io(e.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory slots.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    slots: DashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.slots.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        self.slots.remove(key);
        Ok(())
    }
}
