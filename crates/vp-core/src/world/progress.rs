//! Kill tracking for the current arena
//!
//! Every so many kills a key drops; collecting a key opens an exit. Killing
//! every hostile clears the arena.

use log::warn;
use serde::{Deserialize, Serialize};

/// What a single kill triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KillOutcome {
    pub key_dropped: bool,
    pub cleared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaProgress {
    total_hostiles: u32,
    killed: u32,
    since_last_key: u32,
    key_divisor: u32,
}

impl ArenaProgress {
    pub fn new(total_hostiles: u32, key_divisor: u32) -> Self {
        Self {
            total_hostiles,
            killed: 0,
            since_last_key: 0,
            key_divisor: key_divisor.max(1),
        }
    }

    pub fn total_hostiles(&self) -> u32 {
        self.total_hostiles
    }

    pub fn killed(&self) -> u32 {
        self.killed
    }

    pub fn remaining(&self) -> u32 {
        self.total_hostiles - self.killed
    }

    pub fn is_cleared(&self) -> bool {
        self.killed == self.total_hostiles
    }

    /// Kills needed beyond which the next kill drops a key
    pub fn key_threshold(&self) -> u32 {
        self.total_hostiles / self.key_divisor
    }

    /// Count one hostile kill
    ///
    /// Returns `None` if every hostile is already dead.
    pub fn record_kill(&mut self) -> Option<KillOutcome> {
        if self.is_cleared() {
            warn!(
                "kill recorded after all {} hostiles were dead",
                self.total_hostiles
            );
            return None;
        }
        self.killed += 1;
        self.since_last_key += 1;

        let key_dropped = self.since_last_key > self.key_threshold();
        if key_dropped {
            self.since_last_key = 0;
        }
        Some(KillOutcome {
            key_dropped,
            cleared: self.is_cleared(),
        })
    }
}
