//! Parse-with-memoization facade
//!
//! Composes the parse orchestrator, the cache key generator, the LRU
//! cache, and the validation engine behind a single service. Parsing and
//! validation stay independent: callers validate cached or fresh trees
//! whenever they need to, and a tree is never validated as a side effect
//! of parsing.

use sdui_core::config::SduiConfig;
use sdui_core::error::Result;
use sdui_core::types::Descriptor;
use sdui_core::validation::ValidationResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, DescriptorCache};
use crate::parser::ParseOrchestrator;
use crate::validator::ValidationEngine;

/// Combined service counters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Number of real parser invocations (cache hits don't count)
    pub parses: u64,
    /// Cache statistics
    pub cache: CacheStats,
}

/// Descriptor compilation service with memoization
///
/// The cache key is a content hash of the raw input text, so two
/// byte-identical requests share one parsed tree while any textual
/// difference parses fresh. Concurrent misses for the same key are not
/// coalesced: both callers parse, and the second `put` overwrites with an
/// equivalent tree.
pub struct SduiService {
    orchestrator: ParseOrchestrator,
    engine: ValidationEngine,
    cache: DescriptorCache,
    parses: AtomicU64,
}

impl SduiService {
    /// Create a service from configuration
    #[must_use]
    pub fn new(config: SduiConfig) -> Self {
        Self {
            orchestrator: ParseOrchestrator::new(config.parser),
            engine: ValidationEngine::new(),
            cache: DescriptorCache::new(config.cache.capacity),
            parses: AtomicU64::new(0),
        }
    }

    /// Parse JSON text, serving byte-identical repeats from the cache
    ///
    /// On a miss the text is parsed and, only on success, stored under
    /// its content key before being returned. A failed parse is never
    /// cached: the next call with the same text re-attempts parsing from
    /// scratch.
    ///
    /// # Errors
    ///
    /// Returns the [`sdui_core::error::ParseError`] of the underlying
    /// parse on a cache miss with invalid input.
    pub fn parse_or_fetch(&self, text: &str) -> Result<Arc<Descriptor>> {
        let key = CacheKey::from_text(text);
        if let Some(tree) = self.cache.get(&key) {
            debug!(%key, "descriptor cache hit");
            return Ok(tree);
        }

        debug!(%key, "descriptor cache miss");
        self.parses.fetch_add(1, Ordering::Relaxed);
        let tree = Arc::new(self.orchestrator.parse_str(text)?);
        self.cache.put(key, Arc::clone(&tree));
        Ok(tree)
    }

    /// Parse JSON text without touching the cache
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`SduiService::parse_or_fetch`].
    pub fn parse(&self, text: &str) -> Result<Descriptor> {
        self.parses.fetch_add(1, Ordering::Relaxed);
        self.orchestrator.parse_str(text)
    }

    /// Validate a descriptor tree, cached or fresh
    #[must_use]
    pub fn validate(&self, descriptor: &Descriptor) -> ValidationResult {
        self.engine.validate(descriptor)
    }

    /// Number of trees currently cached
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached tree
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Combined service counters
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            parses: self.parses.load(Ordering::Relaxed),
            cache: self.cache.stats(),
        }
    }
}
