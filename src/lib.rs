//! Sagegraph: an offline-capable explorer for a graph of philosophical concepts
//!
//! Concepts (virtues, ideals, principles) are nodes; named relationships
//! between them are links. The engine answers neighborhood, path, and search
//! queries against that graph, preferring a remote concept service and
//! falling back through a memory cache, a durable SQLite cache, and finally
//! a bundled offline dataset. Every answer says where it came from.
//!
//! # Example
//!
//! ```
//! use sagegraph::{GraphRepository, Provenance};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let repo = GraphRepository::offline();
//! let around_ren = runtime.block_on(repo.get_subgraph(Some("ren".into()), Some(1)));
//! assert_eq!(around_ren.provenance, Provenance::Offline);
//! ```

pub mod cache;
pub mod config;
pub mod graph;
pub mod logging;
pub mod query;
pub mod remote;
pub mod repository;

pub use cache::{CacheEntry, CacheError, DurableCache, MemoryCache, OpenCache, QuerySignature, SqliteCache};
pub use config::{ConfigError, EngineConfig};
pub use graph::{Category, ConceptNode, Graph, NodeId, Quote, RelationshipEdge};
pub use query::{PathQuery, PathStep, SearchQuery, SubgraphQuery};
pub use remote::{ConceptService, HttpConceptService, MockConceptService, RemoteError};
pub use repository::{
    GraphQuery, GraphRepository, GraphRepositoryBuilder, Provenance, Resolved, SageError,
    SageResult, Tier,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
