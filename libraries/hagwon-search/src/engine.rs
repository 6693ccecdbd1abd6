//! Query engine
//!
//! Linear substring scan over the loaded index with a bounded per-query
//! result cache. The index is small enough (a few thousand entries) that a
//! scan per uncached query is the whole strategy.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use hagwon_core::SectionKind;
use lru::LruCache;
use tracing::debug;

use crate::entry::{SearchEntry, SearchIndex};

/// Default number of cached queries
pub const DEFAULT_CACHE_SIZE: usize = 64;

/// Searches the loaded index with per-query caching
pub struct SearchEngine {
    index: SearchIndex,
    cache: Arc<Mutex<LruCache<String, Arc<Vec<SearchEntry>>>>>,
}

impl SearchEngine {
    /// Create an engine with the default cache size
    pub fn new(index: SearchIndex) -> Self {
        Self::with_cache_size(index, DEFAULT_CACHE_SIZE)
    }

    /// Create an engine with a specific cache size
    ///
    /// # Arguments
    /// * `cache_size` - Maximum number of query results to cache (0 caches
    ///   a single query)
    pub fn with_cache_size(index: SearchIndex, cache_size: usize) -> Self {
        let cache = if cache_size > 0 {
            LruCache::new(NonZeroUsize::new(cache_size).unwrap())
        } else {
            LruCache::new(NonZeroUsize::new(1).unwrap())
        };

        Self {
            index,
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// All entries whose content or preview contains the query
    ///
    /// An empty (after trimming) query matches nothing. Results are cached
    /// per query string, unfiltered, so the kind filter of [`search_kind`]
    /// shares one cached scan across every tab.
    ///
    /// [`search_kind`]: SearchEngine::search_kind
    pub fn search(&self, query: &str) -> Vec<SearchEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        // Check cache first
        {
            let mut cache = self.cache.lock().unwrap();
            if let Some(cached) = cache.get(query) {
                return (**cached).clone();
            }
        }

        let results: Vec<SearchEntry> = self
            .index
            .entries
            .iter()
            .filter(|entry| entry.content.contains(query) || entry.preview.contains(query))
            .cloned()
            .collect();
        debug!("Query {query:?} matched {} entries", results.len());

        let mut cache = self.cache.lock().unwrap();
        cache.put(query.to_string(), Arc::new(results.clone()));
        results
    }

    /// Search, keeping only entries of one section kind
    ///
    /// `None` keeps every kind (the viewer's 全部 tab).
    pub fn search_kind(&self, query: &str, kind: Option<SectionKind>) -> Vec<SearchEntry> {
        let results = self.search(query);
        match kind {
            Some(kind) => results
                .into_iter()
                .filter(|entry| entry.kind == kind)
                .collect(),
            None => results,
        }
    }

    /// Drop all cached query results
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock().unwrap();
        cache.clear();
    }

    /// Number of entries in the underlying index
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if the underlying index has no entries
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
