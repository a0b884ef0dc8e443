//! Cache tier types and trait definitions

use crate::graph::{Graph, NodeId};
use crate::remote::ConceptDetails;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur in a cache tier
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Cache connection lock poisoned")]
    LockPoisoned,
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Normalized cache key for a query
///
/// `graph:full`, `graph:{center}:{depth}` or `detail:{concept}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuerySignature(String);

impl QuerySignature {
    pub fn full_graph() -> Self {
        Self("graph:full".to_string())
    }

    /// Signature for a neighborhood query.
    ///
    /// Queries that extract to the whole graph share its signature.
    pub fn subgraph(center: Option<&NodeId>, depth: i32) -> Self {
        match center {
            Some(center) if depth > 0 => Self(format!("graph:{}:{}", center, depth)),
            _ => Self::full_graph(),
        }
    }

    pub fn concept_detail(id: &NodeId) -> Self {
        Self(format!("detail:{}", id))
    }

    pub fn from_string(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuerySignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a cache entry holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CachedPayload {
    Graph(Graph),
    ConceptDetail(ConceptDetails),
}

/// A resolved payload snapshot and when it was stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub signature: QuerySignature,
    pub payload: CachedPayload,
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Snapshot `payload` under `signature`, stamped now
    pub fn new(signature: QuerySignature, payload: CachedPayload) -> Self {
        Self {
            signature,
            payload,
            stored_at: Utc::now(),
        }
    }

    pub fn graph(signature: QuerySignature, graph: Graph) -> Self {
        Self::new(signature, CachedPayload::Graph(graph))
    }

    pub fn concept_detail(details: ConceptDetails) -> Self {
        Self::new(
            QuerySignature::concept_detail(&details.concept.id),
            CachedPayload::ConceptDetail(details),
        )
    }

    /// The graph, if this entry holds one
    pub fn into_graph(self) -> Option<Graph> {
        match self.payload {
            CachedPayload::Graph(graph) => Some(graph),
            CachedPayload::ConceptDetail(_) => None,
        }
    }

    /// The concept details, if this entry holds them
    pub fn into_concept_detail(self) -> Option<ConceptDetails> {
        match self.payload {
            CachedPayload::ConceptDetail(details) => Some(details),
            CachedPayload::Graph(_) => None,
        }
    }
}

/// Trait for the durable, cross-session cache tier
///
/// Entries are never expired or invalidated; `put` overwrites whatever
/// was stored under the same signature.
pub trait DurableCache: Send + Sync {
    /// Load the entry stored under `signature`
    fn get(&self, signature: &QuerySignature) -> CacheResult<Option<CacheEntry>>;

    /// Store an entry, replacing any previous one with the same signature
    fn put(&self, entry: &CacheEntry) -> CacheResult<()>;

    /// Number of stored entries
    fn len(&self) -> CacheResult<usize>;

    fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Extension trait for opening durable caches from paths
pub trait OpenCache: DurableCache + Sized {
    /// Open or create a cache at the given path
    fn open(path: impl AsRef<Path>) -> CacheResult<Self>;

    /// Create an in-memory cache (useful for testing)
    fn open_in_memory() -> CacheResult<Self>;
}
