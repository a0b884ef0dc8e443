//! Graph: the ordered node and link lists every tier hands around

use super::edge::RelationshipEdge;
use super::node::{ConceptNode, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A concept graph
///
/// Node and link order is significant: traversal ties and search result
/// order both follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<ConceptNode>,
    #[serde(default)]
    pub links: Vec<RelationshipEdge>,
}

/// What [`Graph::sanitize`] had to throw away
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Nodes dropped because an earlier node had the same id
    pub duplicate_nodes: usize,
    /// Links dropped because an endpoint is not in the graph
    pub dangling_links: usize,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_nodes == 0 && self.dangling_links == 0
    }
}

impl Graph {
    pub fn new(nodes: Vec<ConceptNode>, links: Vec<RelationshipEdge>) -> Self {
        Self { nodes, links }
    }

    /// Look up a node by id
    pub fn node(&self, id: &NodeId) -> Option<&ConceptNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Make the graph self-consistent in place.
    ///
    /// Keeps the first node for each id and drops every link that points at
    /// a node not in the graph. Relative order of survivors is preserved.
    pub fn sanitize(&mut self) -> SanitizeReport {
        let mut report = SanitizeReport::default();

        let mut seen: HashSet<NodeId> = HashSet::with_capacity(self.nodes.len());
        let before = self.nodes.len();
        self.nodes.retain(|node| seen.insert(node.id.clone()));
        report.duplicate_nodes = before - self.nodes.len();

        let before = self.links.len();
        self.links
            .retain(|link| seen.contains(&link.source) && seen.contains(&link.target));
        report.dangling_links = before - self.links.len();

        report
    }

    /// Consume and return a sanitized copy, along with the report
    pub fn sanitized(mut self) -> (Self, SanitizeReport) {
        let report = self.sanitize();
        (self, report)
    }
}
