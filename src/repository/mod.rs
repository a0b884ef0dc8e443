//! GraphRepository: the main entry point for concept graph data
//!
//! Resolves every query through an ordered chain of tiers (remote service,
//! memory cache, durable cache, bundled offline dataset) and never fails:
//! degraded results carry a provenance marker and a warning instead.

mod resolver;

pub use resolver::{
    DurableResolver, GraphQuery, MemoryResolver, OfflineResolver, Provenance, RemoteResolver,
    Resolver, Tier,
};

use crate::cache::{
    CacheEntry, CacheError, CachedPayload, DurableCache, MemoryCache, OpenCache, QuerySignature,
    SqliteCache,
};
use crate::config::{ConfigError, EngineConfig};
use crate::graph::{offline, ConceptNode, Graph, NodeId};
use crate::query::{self, PathStep};
use crate::remote::{
    ConceptDetails, ConceptRelation, ConceptService, HttpConceptService, RemoteError,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while setting up the engine
///
/// Resolution itself never errors; these only come from construction.
#[derive(Debug, Error)]
pub enum SageError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Remote service error: {0}")]
    Remote(#[from] RemoteError),
}

/// Result type for engine setup
pub type SageResult<T> = Result<T, SageError>;

/// A result together with where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub provenance: Provenance,
    /// Human-readable note when the result is degraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T> Resolved<T> {
    fn from_tier(value: T, tier: Tier) -> Self {
        let provenance = tier.provenance();
        let warning = match provenance {
            Provenance::Online => None,
            Provenance::Cache => {
                Some("Concept service unavailable; showing cached data".to_string())
            }
            Provenance::Offline => {
                Some("Concept service unavailable; showing bundled offline data".to_string())
            }
        };
        Self {
            value,
            provenance,
            warning,
        }
    }

    /// Transform the value, keeping provenance and warning
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            provenance: self.provenance,
            warning: self.warning,
        }
    }

    /// True unless the result came from the remote service
    pub fn is_degraded(&self) -> bool {
        self.provenance != Provenance::Online
    }
}

/// Builder for a [`GraphRepository`]
pub struct GraphRepositoryBuilder {
    service: Option<Arc<dyn ConceptService>>,
    memory: Arc<MemoryCache>,
    durable: Option<Arc<dyn DurableCache>>,
    offline: Arc<Graph>,
    chain: Option<Vec<Box<dyn Resolver>>>,
    default_depth: i32,
}

impl GraphRepositoryBuilder {
    fn new() -> Self {
        Self {
            service: None,
            memory: Arc::new(MemoryCache::new()),
            durable: None,
            offline: Arc::new(resolver::load_offline(offline::dataset())),
            chain: None,
            default_depth: crate::config::DEFAULT_DEPTH,
        }
    }

    /// Set the remote concept service
    pub fn service(mut self, service: Arc<dyn ConceptService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the durable cache tier
    pub fn durable(mut self, durable: Arc<dyn DurableCache>) -> Self {
        self.durable = Some(durable);
        self
    }

    /// Replace the bundled offline dataset
    pub fn offline_dataset(mut self, dataset: Graph) -> Self {
        self.offline = Arc::new(resolver::load_offline(dataset));
        self
    }

    /// Depth used by `get_subgraph` when none is given
    pub fn default_depth(mut self, depth: i32) -> Self {
        self.default_depth = depth;
        self
    }

    /// The memory tier the repository will own, for building custom chains
    pub fn memory(&self) -> Arc<MemoryCache> {
        self.memory.clone()
    }

    /// Use an explicit resolver chain instead of the default one
    pub fn chain(mut self, chain: Vec<Box<dyn Resolver>>) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn build(self) -> GraphRepository {
        let chain = match self.chain {
            Some(chain) => chain,
            None => {
                let mut chain: Vec<Box<dyn Resolver>> = Vec::new();
                if let Some(service) = &self.service {
                    chain.push(Box::new(RemoteResolver::new(service.clone())));
                }
                chain.push(Box::new(MemoryResolver::new(self.memory.clone())));
                if let Some(durable) = &self.durable {
                    chain.push(Box::new(DurableResolver::new(durable.clone())));
                }
                chain.push(Box::new(OfflineResolver::new(self.offline.clone())));
                chain
            }
        };

        GraphRepository {
            service: self.service,
            memory: self.memory,
            durable: self.durable,
            offline: self.offline,
            chain,
            default_depth: self.default_depth,
        }
    }
}

/// Owns the cache tiers and the offline dataset, and answers graph queries
///
/// Create one per session and share it by reference.
pub struct GraphRepository {
    service: Option<Arc<dyn ConceptService>>,
    memory: Arc<MemoryCache>,
    durable: Option<Arc<dyn DurableCache>>,
    offline: Arc<Graph>,
    chain: Vec<Box<dyn Resolver>>,
    default_depth: i32,
}

impl GraphRepository {
    pub fn builder() -> GraphRepositoryBuilder {
        GraphRepositoryBuilder::new()
    }

    /// Offline-only repository with a memory cache
    pub fn offline() -> Self {
        Self::builder().build()
    }

    /// Build the standard chain from configuration
    ///
    /// Opens the durable cache (creating its directory) when enabled.
    pub fn from_config(config: &EngineConfig) -> SageResult<Self> {
        let mut builder = Self::builder().default_depth(config.default_depth);

        if config.remote.enabled {
            builder = builder.service(Arc::new(HttpConceptService::new(&config.remote)?));
        }

        if config.cache.durable {
            let path = config.durable_cache_path();
            debug!(path = %path.display(), "Opening durable cache");
            builder = builder.durable(Arc::new(SqliteCache::open(&path)?));
        }

        Ok(builder.build())
    }

    /// The memory tier
    pub fn memory_cache(&self) -> &MemoryCache {
        &self.memory
    }

    /// Tiers in resolution order
    pub fn tiers(&self) -> Vec<Tier> {
        self.chain.iter().map(|r| r.tier()).collect()
    }

    /// Resolve a graph query through the chain. Never fails.
    pub async fn resolve(&self, query: &GraphQuery) -> Resolved<Graph> {
        self.resolve_with(query, true).await
    }

    /// Neighborhood of `center`; a missing depth uses the configured default
    pub async fn get_subgraph(&self, center: Option<NodeId>, depth: Option<i32>) -> Resolved<Graph> {
        let query = GraphQuery::Subgraph {
            center,
            depth: depth.unwrap_or(self.default_depth),
        };
        self.resolve(&query).await
    }

    pub async fn full_graph(&self) -> Resolved<Graph> {
        self.resolve(&GraphQuery::FullGraph).await
    }

    /// Connecting path between two concepts
    ///
    /// Asks the service first, then runs the path search over the best
    /// locally available full graph.
    pub async fn find_path(&self, from: &NodeId, to: &NodeId) -> Resolved<Vec<PathStep>> {
        if let Some(service) = self.remote() {
            match service.connection_path(from, to).await {
                Ok(path) => return Resolved::from_tier(path, Tier::Remote),
                Err(e) => warn!(from = %from, to = %to, error = %e, "Remote path lookup failed"),
            }
        }

        self.resolve_with(&GraphQuery::FullGraph, false)
            .await
            .map(|graph| query::find_path(&graph, from, to))
    }

    /// Concepts mentioning `text`
    pub async fn search(&self, text: &str) -> Resolved<Vec<ConceptNode>> {
        if let Some(service) = self.remote() {
            match service.search_concepts(text).await {
                Ok(results) => return Resolved::from_tier(results, Tier::Remote),
                Err(e) => warn!(query = %text, error = %e, "Remote search failed"),
            }
        }

        self.resolve_with(&GraphQuery::FullGraph, false)
            .await
            .map(|graph| query::search(&graph, text))
    }

    /// Detail view of one concept; `None` only if no tier knows it
    pub async fn concept_details(&self, id: &NodeId) -> Resolved<Option<ConceptDetails>> {
        let signature = QuerySignature::concept_detail(id);

        if let Some(service) = self.remote() {
            match service.concept_details(id).await {
                Ok(details) => {
                    // Keyed on the id asked for, which the service may canonicalize
                    self.write_through(CacheEntry::new(
                        signature.clone(),
                        CachedPayload::ConceptDetail(details.clone()),
                    ));
                    return Resolved::from_tier(Some(details), Tier::Remote);
                }
                Err(e) => warn!(concept = %id, error = %e, "Remote detail lookup failed"),
            }
        }

        if let Some((entry, tier)) = self.cached(&signature) {
            if let Some(details) = entry.into_concept_detail() {
                return Resolved::from_tier(Some(details), tier);
            }
        }

        self.resolve_with(&GraphQuery::FullGraph, false)
            .await
            .map(|graph| ConceptDetails::derive(&graph, id))
    }

    /// Relations touching one concept
    pub async fn concept_relations(&self, id: &NodeId) -> Resolved<Vec<ConceptRelation>> {
        if let Some(service) = self.remote() {
            match service.concept_relations(id).await {
                Ok(relations) => return Resolved::from_tier(relations, Tier::Remote),
                Err(e) => warn!(concept = %id, error = %e, "Remote relation lookup failed"),
            }
        }

        self.resolve_with(&GraphQuery::FullGraph, false)
            .await
            .map(|graph| ConceptRelation::derive_all(&graph, id))
    }

    /// The service, if one is configured with a credential
    fn remote(&self) -> Option<&Arc<dyn ConceptService>> {
        let service = self.service.as_ref()?;
        if !service.has_credential() {
            debug!("No API credential configured, skipping remote tier");
            return None;
        }
        Some(service)
    }

    async fn resolve_with(&self, query: &GraphQuery, include_remote: bool) -> Resolved<Graph> {
        let signature = query.signature();

        for resolver in &self.chain {
            let tier = resolver.tier();
            if tier == Tier::Remote && !include_remote {
                continue;
            }

            match resolver.try_resolve(query).await {
                Some(graph) => {
                    debug!(signature = %signature, tier = ?tier, "Resolved graph query");
                    self.record(tier, &signature, &graph);
                    return Resolved::from_tier(graph, tier);
                }
                None => debug!(signature = %signature, tier = ?tier, "Tier missed"),
            }
        }

        // Only reachable with a custom chain that has no offline tier
        warn!(signature = %signature, "Resolution chain exhausted, using offline dataset");
        Resolved::from_tier(query.apply(&self.offline), Tier::Offline)
    }

    /// Side effects of a hit: remote writes through, durable promotes
    fn record(&self, tier: Tier, signature: &QuerySignature, graph: &Graph) {
        match tier {
            Tier::Remote => {
                info!(
                    signature = %signature,
                    nodes = graph.node_count(),
                    links = graph.link_count(),
                    "Caching remote graph"
                );
                self.write_through(CacheEntry::graph(signature.clone(), graph.clone()));
            }
            Tier::DurableCache => {
                self.memory
                    .put(CacheEntry::graph(signature.clone(), graph.clone()));
            }
            Tier::MemoryCache | Tier::Offline => {}
        }
    }

    /// Overwrite both tiers unconditionally
    fn write_through(&self, entry: CacheEntry) {
        if let Some(durable) = &self.durable {
            if let Err(e) = durable.put(&entry) {
                warn!(signature = %entry.signature, error = %e, "Durable cache write failed");
            }
        }
        self.memory.put(entry);
    }

    /// Memory then durable lookup, promoting durable hits
    fn cached(&self, signature: &QuerySignature) -> Option<(CacheEntry, Tier)> {
        if let Some(entry) = self.memory.get(signature) {
            return Some((entry, Tier::MemoryCache));
        }

        let durable = self.durable.as_ref()?;
        match durable.get(signature) {
            Ok(Some(entry)) => {
                self.memory.put(entry.clone());
                Some((entry, Tier::DurableCache))
            }
            Ok(None) => None,
            Err(e) => {
                warn!(signature = %signature, error = %e, "Durable cache read failed");
                None
            }
        }
    }
}
