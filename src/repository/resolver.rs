//! Resolution tiers for graph queries
//!
//! Each tier implements [`Resolver`]. The repository walks them in order and
//! takes the first graph any of them produces.

use crate::cache::{CacheEntry, DurableCache, MemoryCache, QuerySignature};
use crate::graph::{offline, Graph, NodeId};
use crate::query;
use crate::remote::ConceptService;
use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// A graph query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQuery {
    /// Neighborhood of `center` within `depth` hops; no center means the
    /// whole graph
    Subgraph { center: Option<NodeId>, depth: i32 },
    /// The whole graph
    FullGraph,
}

impl GraphQuery {
    /// Neighborhood query. Callers without a depth go through
    /// `GraphRepository::get_subgraph`, which applies the configured default.
    pub fn subgraph(center: Option<NodeId>, depth: i32) -> Self {
        Self::Subgraph { center, depth }
    }

    pub fn full_graph() -> Self {
        Self::FullGraph
    }

    /// Normalized cache key
    pub fn signature(&self) -> QuerySignature {
        match self {
            Self::Subgraph { center, depth } => QuerySignature::subgraph(center.as_ref(), *depth),
            Self::FullGraph => QuerySignature::full_graph(),
        }
    }

    /// Apply this query to a full graph
    pub fn apply(&self, graph: &Graph) -> Graph {
        match self {
            Self::Subgraph { center, depth } => query::extract(graph, center.as_ref(), *depth),
            Self::FullGraph => graph.clone(),
        }
    }
}

/// Which source produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Remote,
    MemoryCache,
    DurableCache,
    Offline,
}

impl Tier {
    pub fn provenance(self) -> Provenance {
        match self {
            Tier::Remote => Provenance::Online,
            Tier::MemoryCache | Tier::DurableCache => Provenance::Cache,
            Tier::Offline => Provenance::Offline,
        }
    }
}

/// Provenance marker attached to every resolved result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Online,
    Cache,
    Offline,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Online => f.write_str("online"),
            Provenance::Cache => f.write_str("cache"),
            Provenance::Offline => f.write_str("offline"),
        }
    }
}

/// One source in the resolution chain.
///
/// `try_resolve` never fails loudly: a tier that cannot answer returns
/// `None` and the repository moves on to the next one.
#[async_trait]
pub trait Resolver: Send + Sync {
    fn tier(&self) -> Tier;

    async fn try_resolve(&self, query: &GraphQuery) -> Option<Graph>;
}

/// Sanitize a graph from an untrusted tier, logging anything dropped
pub(crate) fn sanitize_logged(graph: Graph, tier: Tier, signature: &QuerySignature) -> Graph {
    let (graph, report) = graph.sanitized();
    if !report.is_clean() {
        warn!(
            tier = ?tier,
            signature = %signature,
            duplicate_nodes = report.duplicate_nodes,
            dangling_links = report.dangling_links,
            "Dropped inconsistent graph data"
        );
    }
    graph
}

/// Remote tier: the concept service's `/knowledge-graph` endpoint.
///
/// Concurrent queries with the same signature share one round trip.
pub struct RemoteResolver {
    service: Arc<dyn ConceptService>,
    inflight: DashMap<QuerySignature, Arc<OnceCell<Option<Graph>>>>,
}

impl RemoteResolver {
    pub fn new(service: Arc<dyn ConceptService>) -> Self {
        Self {
            service,
            inflight: DashMap::new(),
        }
    }

    /// Number of fetches currently in flight
    pub fn in_flight(&self) -> usize {
        self.inflight.len()
    }

    /// Ask the service for exactly what `signature` names. Queries that
    /// normalize to the full graph are sent without center or depth, so the
    /// payload stored under `graph:full` is always the whole graph.
    async fn fetch(&self, query: &GraphQuery, signature: &QuerySignature) -> Option<Graph> {
        let response = match query {
            GraphQuery::Subgraph {
                center: Some(center),
                depth,
            } if *depth > 0 => self.service.knowledge_graph(Some(center), Some(*depth)).await,
            _ => self.service.knowledge_graph(None, None).await,
        };

        match response {
            Ok(graph) => Some(sanitize_logged(graph, Tier::Remote, signature)),
            Err(e) => {
                warn!(signature = %signature, error = %e, "Remote graph fetch failed");
                None
            }
        }
    }
}

#[async_trait]
impl Resolver for RemoteResolver {
    fn tier(&self) -> Tier {
        Tier::Remote
    }

    async fn try_resolve(&self, query: &GraphQuery) -> Option<Graph> {
        if !self.service.has_credential() {
            debug!("No API credential configured, skipping remote tier");
            return None;
        }

        let signature = query.signature();
        let cell = self
            .inflight
            .entry(signature.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        let result = cell.get_or_init(|| self.fetch(query, &signature)).await.clone();

        // Only the cell we waited on; a newer fetch may have replaced it
        self.inflight
            .remove_if(&signature, |_, current| Arc::ptr_eq(current, &cell));

        result
    }
}

/// Memory tier
pub struct MemoryResolver {
    cache: Arc<MemoryCache>,
}

impl MemoryResolver {
    pub fn new(cache: Arc<MemoryCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl Resolver for MemoryResolver {
    fn tier(&self) -> Tier {
        Tier::MemoryCache
    }

    async fn try_resolve(&self, query: &GraphQuery) -> Option<Graph> {
        self.cache
            .get(&query.signature())
            .and_then(CacheEntry::into_graph)
    }
}

/// Durable tier
pub struct DurableResolver {
    cache: Arc<dyn DurableCache>,
}

impl DurableResolver {
    pub fn new(cache: Arc<dyn DurableCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl Resolver for DurableResolver {
    fn tier(&self) -> Tier {
        Tier::DurableCache
    }

    async fn try_resolve(&self, query: &GraphQuery) -> Option<Graph> {
        let signature = query.signature();
        match self.cache.get(&signature) {
            Ok(entry) => entry
                .and_then(CacheEntry::into_graph)
                .map(|graph| sanitize_logged(graph, Tier::DurableCache, &signature)),
            Err(e) => {
                warn!(signature = %signature, error = %e, "Durable cache read failed");
                None
            }
        }
    }
}

/// Offline tier: the bundled dataset, filtered per query. Always answers.
pub struct OfflineResolver {
    dataset: Arc<Graph>,
}

impl OfflineResolver {
    pub fn new(dataset: Arc<Graph>) -> Self {
        Self { dataset }
    }

    /// Resolver over [`offline::dataset`]
    pub fn bundled() -> Self {
        Self::new(Arc::new(load_offline(offline::dataset())))
    }
}

/// Sanitize an offline dataset once at load time
pub(crate) fn load_offline(dataset: Graph) -> Graph {
    sanitize_logged(dataset, Tier::Offline, &QuerySignature::full_graph())
}

#[async_trait]
impl Resolver for OfflineResolver {
    fn tier(&self) -> Tier {
        Tier::Offline
    }

    async fn try_resolve(&self, query: &GraphQuery) -> Option<Graph> {
        Some(query.apply(&self.dataset))
    }
}
