//! Concept service client
//!
//! Defines the client trait for the remote concept service and two
//! implementations:
//! - `HttpConceptService`: bearer-authenticated JSON over HTTP (production)
//! - `MockConceptService`: answers from an in-memory graph (testing)

use super::types::{
    ConceptDetails, ConceptRelation, ConnectionPathResponse, RelationsResponse, SearchResponse,
};
use crate::config::RemoteConfig;
use crate::graph::{ConceptNode, Graph, NodeId};
use crate::query::{self, PathStep};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Errors from concept service calls.
///
/// All of them mean "fall through to the next tier"; none reach the
/// repository's callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("{endpoint} returned HTTP {status}")]
    Status { status: u16, endpoint: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Client trait for the concept service.
///
/// Abstracts over transport so the repository does not depend on how
/// the service is reached.
#[async_trait]
pub trait ConceptService: Send + Sync {
    /// Whether a credential is configured; without one every call fails
    /// with [`RemoteError::MissingCredential`] before touching the network.
    fn has_credential(&self) -> bool;

    /// `GET /knowledge-graph?concept=&depth=`
    async fn knowledge_graph(
        &self,
        center: Option<&NodeId>,
        depth: Option<i32>,
    ) -> Result<Graph, RemoteError>;

    /// `GET /search-concepts?query=`
    async fn search_concepts(&self, query: &str) -> Result<Vec<ConceptNode>, RemoteError>;

    /// `GET /concept-details/{id}`
    async fn concept_details(&self, id: &NodeId) -> Result<ConceptDetails, RemoteError>;

    /// `GET /concept-relations/{id}`
    async fn concept_relations(&self, id: &NodeId) -> Result<Vec<ConceptRelation>, RemoteError>;

    /// `GET /connection-path?from=&to=`
    async fn connection_path(
        &self,
        from: &NodeId,
        to: &NodeId,
    ) -> Result<Vec<PathStep>, RemoteError>;
}

/// HTTP implementation of [`ConceptService`]
#[derive(Clone)]
pub struct HttpConceptService {
    http_client: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for HttpConceptService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConceptService")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.is_some())
            .finish()
    }
}

impl HttpConceptService {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL with `segments` appended, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| RemoteError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, RemoteError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(RemoteError::MissingCredential);
        };

        let url = self.endpoint(segments)?;
        let endpoint = format!("/{}", segments.join("/"));

        debug!(url = %url, "Requesting concept service");

        let response = self
            .http_client
            .get(url)
            .bearer_auth(api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| RemoteError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl ConceptService for HttpConceptService {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn knowledge_graph(
        &self,
        center: Option<&NodeId>,
        depth: Option<i32>,
    ) -> Result<Graph, RemoteError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(center) = center {
            query.push(("concept", center.to_string()));
        }
        if let Some(depth) = depth {
            query.push(("depth", depth.to_string()));
        }
        self.get_json(&["knowledge-graph"], &query).await
    }

    async fn search_concepts(&self, query: &str) -> Result<Vec<ConceptNode>, RemoteError> {
        let response: SearchResponse = self
            .get_json(&["search-concepts"], &[("query", query.to_string())])
            .await?;
        Ok(response.results)
    }

    async fn concept_details(&self, id: &NodeId) -> Result<ConceptDetails, RemoteError> {
        self.get_json(&["concept-details", id.as_str()], &[]).await
    }

    async fn concept_relations(&self, id: &NodeId) -> Result<Vec<ConceptRelation>, RemoteError> {
        let response: RelationsResponse =
            self.get_json(&["concept-relations", id.as_str()], &[]).await?;
        Ok(response.relations)
    }

    async fn connection_path(
        &self,
        from: &NodeId,
        to: &NodeId,
    ) -> Result<Vec<PathStep>, RemoteError> {
        let response: ConnectionPathResponse = self
            .get_json(
                &["connection-path"],
                &[("from", from.to_string()), ("to", to.to_string())],
            )
            .await?;
        Ok(response.into())
    }
}

/// Mock service for testing. Answers every endpoint from one graph, the
/// way the real service would.
pub struct MockConceptService {
    graph: Graph,
    credential: bool,
    failure: Option<RemoteError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockConceptService {
    /// A reachable service backed by `graph`
    pub fn serving(graph: Graph) -> Self {
        Self {
            graph,
            credential: true,
            failure: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A service that fails every call with a transport error
    pub fn unreachable() -> Self {
        Self::serving(Graph::default())
            .failing_with(RemoteError::Transport("connection refused".to_string()))
    }

    /// A service with no credential configured
    pub fn without_credential(graph: Graph) -> Self {
        Self {
            credential: false,
            ..Self::serving(graph)
        }
    }

    /// Fail every call with `error`
    pub fn failing_with(mut self, error: RemoteError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls that reached the service (credential checks excluded)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn begin(&self) -> Result<(), RemoteError> {
        if !self.credential {
            return Err(RemoteError::MissingCredential);
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn require(&self, id: &NodeId) -> Result<(), RemoteError> {
        if self.graph.contains(id) {
            Ok(())
        } else {
            Err(RemoteError::Status {
                status: 404,
                endpoint: format!("/concept/{}", id),
            })
        }
    }
}

#[async_trait]
impl ConceptService for MockConceptService {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn knowledge_graph(
        &self,
        center: Option<&NodeId>,
        depth: Option<i32>,
    ) -> Result<Graph, RemoteError> {
        self.begin().await?;
        Ok(query::extract(&self.graph, center, depth.unwrap_or(0)))
    }

    async fn search_concepts(&self, text: &str) -> Result<Vec<ConceptNode>, RemoteError> {
        self.begin().await?;
        Ok(query::search(&self.graph, text))
    }

    async fn concept_details(&self, id: &NodeId) -> Result<ConceptDetails, RemoteError> {
        self.begin().await?;
        self.require(id)?;
        let mut details = ConceptDetails::derive(&self.graph, id).ok_or_else(|| {
            RemoteError::Malformed(format!("no details for {}", id))
        })?;
        details
            .expanded_info
            .insert("source".to_string(), serde_json::Value::from("mock"));
        Ok(details)
    }

    async fn concept_relations(&self, id: &NodeId) -> Result<Vec<ConceptRelation>, RemoteError> {
        self.begin().await?;
        self.require(id)?;
        Ok(ConceptRelation::derive_all(&self.graph, id))
    }

    async fn connection_path(
        &self,
        from: &NodeId,
        to: &NodeId,
    ) -> Result<Vec<PathStep>, RemoteError> {
        self.begin().await?;
        Ok(query::find_path(&self.graph, from, to))
    }
}
