//! LinkLocks: per-link mutual exclusion via DashMap.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

/// Serializes work on the same link id. Different links never contend.
///
/// Entries are created on first use and pruned once no caller holds them.
#[derive(Debug, Default)]
pub struct LinkLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl LinkLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `link_id`.
    ///
    /// A panic in an earlier holder does not wedge the link: the poisoned
    /// guard is recovered since the lock protects no data of its own.
    pub fn with_lock<T>(&self, link_id: &str, f: impl FnOnce() -> T) -> T {
        let lock = Arc::clone(self.locks.entry(link_id.to_string()).or_default().value());

        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };

        drop(lock);
        self.locks
            .remove_if(link_id, |_, held| Arc::strong_count(held) == 1);
        result
    }

    /// Number of links with a live lock entry.
    pub fn active_count(&self) -> usize {
        self.locks.len()
    }
}
