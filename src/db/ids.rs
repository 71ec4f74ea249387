// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout id generation.
//!
//! Ids look like `<millis>-<seq>-<random>` (all hex). The per-process
//! sequence keeps ids from the same millisecond apart; the random suffix
//! separates ids minted by different processes sharing a data directory.

use ring::rand::{SecureRandom, SystemRandom};
use std::sync::atomic::{AtomicU64, Ordering};

const RANDOM_BYTES: usize = 4;

/// Mints unique workout ids.
pub struct IdGenerator {
    sequence: AtomicU64,
    rng: SystemRandom,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
            rng: SystemRandom::new(),
        }
    }

    /// Mint the next id.
    pub fn next_id(&self) -> Result<String, anyhow::Error> {
        let millis = chrono::Utc::now().timestamp_millis().max(0);
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);

        let mut random = [0u8; RANDOM_BYTES];
        self.rng
            .fill(&mut random)
            .map_err(|_| anyhow::anyhow!("System random source unavailable"))?;

        Ok(format!("{:x}-{:x}-{}", millis, seq, hex::encode(random)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_burst_ids_are_unique() {
        let ids = IdGenerator::new();
        let minted: HashSet<String> = (0..10_000).map(|_| ids.next_id().unwrap()).collect();
        assert_eq!(minted.len(), 10_000);
    }

    #[test]
    fn test_id_shape() {
        let id = IdGenerator::new().next_id().unwrap();
        let parts: Vec<&str> = id.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1], "0");
        assert_eq!(parts[2].len(), RANDOM_BYTES * 2);
        assert!(parts
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_hexdigit())));
    }
}
