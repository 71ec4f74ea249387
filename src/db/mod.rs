//! Database layer (key-value slots).

pub mod ids;
pub mod kv;
pub mod store;

pub use kv::{FileKvStore, KeyValueStore, KvError, MemoryKvStore};
pub use store::WorkoutStore;

/// Slot keys as constants.
pub mod keys {
    /// The full workout collection (JSON array)
    pub const WORKOUTS: &str = "fitness-tracker-workouts";
}
