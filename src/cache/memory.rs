//! Process-lifetime cache tier

use super::traits::{CacheEntry, QuerySignature};
use dashmap::DashMap;

/// In-memory cache tier
///
/// Lives as long as the repository that owns it. Safe to share across
/// tasks; writes replace whole entries.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<QuerySignature, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get a copy of the entry stored under `signature`
    pub fn get(&self, signature: &QuerySignature) -> Option<CacheEntry> {
        self.entries.get(signature).map(|r| r.clone())
    }

    /// Store an entry, replacing any previous one with the same signature
    pub fn put(&self, entry: CacheEntry) {
        self.entries.insert(entry.signature.clone(), entry);
    }

    pub fn contains(&self, signature: &QuerySignature) -> bool {
        self.entries.contains_key(signature)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
