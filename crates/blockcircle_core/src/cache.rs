//! # Block Cache
//!
//! Memoizes built coordinate sets by `(radius, mode)`.
//!
//! Preview and export both read from here, so they hand out the same
//! `Arc<CoordinateSet>` and cannot drift apart. The key space is tiny
//! (50 radii x 2 modes), so entries are never evicted.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::builder::build;
use crate::config::CircleConfig;
use crate::coords::CoordinateSet;

/// Cache hit/miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to build.
    pub misses: u64,
    /// Distinct configurations held.
    pub entries: usize,
}

#[derive(Default)]
struct CacheInner {
    sets: HashMap<CircleConfig, Arc<CoordinateSet>>,
    hits: u64,
    misses: u64,
}

/// Thread-safe memo of built block sets.
#[derive(Default)]
pub struct BlockCache {
    inner: Mutex<CacheInner>,
}

impl BlockCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the block set for `config`, building it on first request.
    pub fn get(&self, config: CircleConfig) -> Arc<CoordinateSet> {
        let mut inner = self.inner.lock();
        if let Some(set) = inner.sets.get(&config).cloned() {
            inner.hits += 1;
            return set;
        }

        inner.misses += 1;
        let set = Arc::new(build(config));
        inner.sets.insert(config, Arc::clone(&set));
        set
    }

    /// Drops every cached set and resets the counters.
    pub fn clear(&self) {
        *self.inner.lock() = CacheInner::default();
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.sets.len(),
        }
    }
}
