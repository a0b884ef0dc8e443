//! Query result structures

use crate::graph::{ConceptNode, RelationshipEdge};
use serde::{Deserialize, Serialize};

/// One hop of a connecting path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    /// The concept reached at this step
    pub node: ConceptNode,
    /// Link used to arrive here; `None` for the starting concept
    pub via_edge: Option<RelationshipEdge>,
}

impl PathStep {
    pub fn start(node: ConceptNode) -> Self {
        Self {
            node,
            via_edge: None,
        }
    }

    pub fn via(node: ConceptNode, edge: RelationshipEdge) -> Self {
        Self {
            node,
            via_edge: Some(edge),
        }
    }
}

/// Number of hops in a path (steps minus the start)
pub fn hop_count(path: &[PathStep]) -> usize {
    path.len().saturating_sub(1)
}
