//! Bounded LRU cache for parsed descriptor trees
//!
//! The cache is the only mutable shared resource in this core. All state
//! lives behind a single mutex, because the composed sequence "check
//! membership, read, update recency, evict" is not safe to interleave.
//! Stored trees are immutable and shared via `Arc`, so a `get` returning
//! the same tree twice is safe without copying, and a reference already
//! handed to a caller stays valid after eviction.

pub mod key;

pub use key::CacheKey;

use indexmap::IndexMap;
use parking_lot::Mutex;
use sdui_core::types::Descriptor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Statistics for cache performance
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Total number of cache hits
    pub hits: u64,
    /// Total number of cache misses
    pub misses: u64,
    /// Total number of evictions
    pub evictions: u64,
}

impl CacheStats {
    /// Calculate cache hit rate
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Map order is recency order: index 0 is the least recently used entry
/// and the back is the most recent.
struct CacheInner {
    entries: IndexMap<CacheKey, Arc<Descriptor>>,
    stats: CacheStats,
}

/// Strict-LRU bounded store of descriptor trees
///
/// Both inserts and reads refresh recency; only eviction removes entries
/// involuntarily. The cache never holds more than `capacity` entries.
pub struct DescriptorCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl DescriptorCache {
    /// Create a cache bounded to `capacity` entries (at least 1)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: IndexMap::new(),
                stats: CacheStats::default(),
            }),
            capacity: capacity.max(1),
        }
    }

    /// The configured entry bound
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a tree and mark it most recently used
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Descriptor>> {
        let mut inner = self.inner.lock();
        match inner.entries.shift_remove(key) {
            Some(tree) => {
                inner.entries.insert(*key, Arc::clone(&tree));
                inner.stats.hits += 1;
                Some(tree)
            }
            None => {
                inner.stats.misses += 1;
                None
            }
        }
    }

    /// Insert or overwrite a tree and mark it most recently used
    ///
    /// Evicts the least recently used entry while the cache is over
    /// capacity.
    pub fn put(&self, key: CacheKey, tree: Arc<Descriptor>) {
        let mut inner = self.inner.lock();
        inner.entries.shift_remove(&key);
        inner.entries.insert(key, tree);
        while inner.entries.len() > self.capacity {
            if let Some((evicted, _)) = inner.entries.shift_remove_index(0) {
                inner.stats.evictions += 1;
                debug!(key = %evicted, "evicted least recently used descriptor");
            }
        }
    }

    /// Whether a key is present, without touching its recency
    #[must_use]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.inner.lock().entries.contains_key(key)
    }

    /// Number of cached trees
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    /// Get cache statistics
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }
}
