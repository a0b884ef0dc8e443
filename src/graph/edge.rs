//! Labeled relationship between two concepts

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// A relationship edge between two concepts
///
/// `source` and `target` carry the authored reading direction of the
/// label ("仁 is the root of 义"). Traversal ignores it; see
/// [`crate::query::AdjacencyIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Source node
    pub source: NodeId,
    /// Target node
    pub target: NodeId,
    /// Relationship label (e.g. "grounds", "expresses", "opposes")
    pub relationship: String,
    /// Free-text explanation of the relationship
    #[serde(default)]
    pub description: String,
}

impl RelationshipEdge {
    /// Create a new edge with an empty description
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship: relationship.into(),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether `id` is either endpoint
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint at all
    pub fn other_end(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}
