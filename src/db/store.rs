// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable workout collection.
//!
//! The whole collection lives as a JSON array in one key-value slot and
//! every mutation rewrites it in full. Mutations hold `write_lock` for the
//! entire read-modify-write so concurrent callers cannot lose updates.
//!
//! Entries are decoded one at a time. An entry that does not decode as a
//! `WorkoutRecord` is skipped by `list` but kept verbatim on rewrite. A slot
//! that is not a JSON array at all is treated as empty and is replaced by the
//! next mutation; that silent data loss is logged at `warn`. A slot that
//! cannot be read is never overwritten.

use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::db::ids::IdGenerator;
use crate::db::keys;
use crate::db::kv::KeyValueStore;
use crate::error::{AppError, Result};
use crate::models::{NewWorkout, WorkoutRecord};

/// Workout store over a key-value slot.
pub struct WorkoutStore {
    kv: Arc<dyn KeyValueStore>,
    ids: IdGenerator,
    write_lock: Mutex<()>,
}

impl WorkoutStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            ids: IdGenerator::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// All readable workouts in insertion order.
    ///
    /// Never fails: a missing, unreadable or corrupt slot yields an empty
    /// list, and undecodable entries are left out.
    pub fn list(&self) -> Vec<WorkoutRecord> {
        match self.load_entries() {
            Ok(entries) => decode_entries(entries),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read workouts, treating as empty");
                Vec::new()
            }
        }
    }

    /// Assign an id to `workout` and append it.
    ///
    /// The caller is responsible for validation.
    pub fn add(&self, workout: NewWorkout) -> Result<WorkoutRecord> {
        let _guard = self.lock();

        let mut entries = self.load_entries()?;
        let record = workout.into_record(self.ids.next_id()?);
        let entry = serde_json::to_value(&record).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to serialize workout: {}", e))
        })?;
        entries.push(entry);
        self.save(&entries)?;

        tracing::info!(
            id = %record.id,
            category = %record.category,
            date = %record.date,
            total = entries.len(),
            "Workout added"
        );
        Ok(record)
    }

    /// Delete a workout by id.
    ///
    /// Returns `false` (and writes nothing) if no entry has that id.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.lock();

        let mut entries = self.load_entries()?;
        let before = entries.len();
        entries.retain(|entry| entry_id(entry) != Some(id));

        if entries.len() == before {
            tracing::debug!(id, "Workout not found for deletion");
            return Ok(false);
        }

        self.save(&entries)?;
        tracing::info!(id, remaining = entries.len(), "Workout deleted");
        Ok(true)
    }

    /// Drop the whole collection, including the storage slot itself.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.lock();

        self.kv.remove(keys::WORKOUTS)?;
        tracing::info!("All workouts cleared");
        Ok(())
    }

    /// Raw slot entries. Read failures are errors; a slot that is not a
    /// JSON array reads as empty.
    fn load_entries(&self) -> Result<Vec<Value>> {
        let Some(raw) = self.kv.get(keys::WORKOUTS)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    bytes = raw.len(),
                    "Stored workouts are corrupt, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[Value]) -> Result<()> {
        let json = serde_json::to_string(entries)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize workouts: {}", e)))?;
        self.kv.set(keys::WORKOUTS, &json)?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

fn decode_entries(entries: Vec<Value>) -> Vec<WorkoutRecord> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<WorkoutRecord>(entry) {
                Ok(workout) => Some(workout),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping unreadable workout entry");
                    None
                }
            }
        })
        .collect()
}
