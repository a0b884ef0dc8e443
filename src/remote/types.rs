//! Wire types for the concept service endpoints

use crate::graph::{ConceptNode, Graph, NodeId, RelationshipEdge};
use crate::query::{AdjacencyIndex, PathStep};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// `GET /search-concepts` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<ConceptNode>,
}

/// A concept mentioned alongside another in its detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedConcept {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub relationship: String,
}

/// `GET /concept-details/{id}` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDetails {
    #[serde(flatten)]
    pub concept: ConceptNode,
    #[serde(default)]
    pub related_concepts: Vec<RelatedConcept>,
    /// Free-form extra material (historical background, commentary, ...)
    #[serde(default)]
    pub expanded_info: serde_json::Map<String, serde_json::Value>,
}

/// Which way a relation points, seen from the concept that was asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationDirection {
    Incoming,
    Outgoing,
}

/// One entry of `GET /concept-relations/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRelation {
    /// The concept on the other end
    pub id: NodeId,
    pub name: String,
    pub relationship: String,
    #[serde(default)]
    pub description: String,
    pub direction: RelationDirection,
}

/// `GET /concept-relations/{id}` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationsResponse {
    #[serde(default)]
    pub relations: Vec<ConceptRelation>,
}

/// One element of a `/connection-path` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePathStep {
    pub node: ConceptNode,
    #[serde(default)]
    pub link: Option<RelationshipEdge>,
}

/// `GET /connection-path` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionPathResponse {
    #[serde(default)]
    pub path: Vec<WirePathStep>,
}

impl ConceptDetails {
    /// Build a detail view from a graph: the node plus its neighbors in
    /// link order. `None` if the concept is not in the graph.
    pub fn derive(graph: &Graph, id: &NodeId) -> Option<Self> {
        let concept = graph.node(id)?.clone();
        let index = AdjacencyIndex::build(graph);

        let mut seen: HashSet<&NodeId> = HashSet::new();
        let related_concepts = index
            .neighbors(id)
            .filter(|(other, _)| *other != id && seen.insert(*other))
            .filter_map(|(other, link)| {
                graph.node(other).map(|node| RelatedConcept {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    relationship: link.relationship.clone(),
                })
            })
            .collect();

        Some(Self {
            concept,
            related_concepts,
            expanded_info: serde_json::Map::new(),
        })
    }
}

impl ConceptRelation {
    /// Every relation touching `id` in a graph, in link order
    pub fn derive_all(graph: &Graph, id: &NodeId) -> Vec<Self> {
        let index = AdjacencyIndex::build(graph);

        index
            .neighbors(id)
            .filter_map(|(other, link)| {
                let direction = if &link.source == id {
                    RelationDirection::Outgoing
                } else {
                    RelationDirection::Incoming
                };
                graph.node(other).map(|node| ConceptRelation {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    relationship: link.relationship.clone(),
                    description: link.description.clone(),
                    direction,
                })
            })
            .collect()
    }
}

impl From<ConnectionPathResponse> for Vec<PathStep> {
    fn from(response: ConnectionPathResponse) -> Self {
        response
            .path
            .into_iter()
            .map(|step| PathStep {
                node: step.node,
                via_edge: step.link,
            })
            .collect()
    }
}
