//! Undirected adjacency over a graph's links

use crate::graph::{Graph, NodeId, RelationshipEdge};
use std::collections::HashMap;

/// Edge lookup that ignores link direction
///
/// Each node's incident links are kept in the order they appear in
/// `graph.links`, which is what makes traversal ties deterministic.
pub struct AdjacencyIndex<'a> {
    incident: HashMap<&'a NodeId, Vec<&'a RelationshipEdge>>,
}

impl<'a> AdjacencyIndex<'a> {
    pub fn build(graph: &'a Graph) -> Self {
        let mut incident: HashMap<&NodeId, Vec<&RelationshipEdge>> = HashMap::new();

        for link in &graph.links {
            incident.entry(&link.source).or_default().push(link);
            if link.target != link.source {
                incident.entry(&link.target).or_default().push(link);
            }
        }

        Self { incident }
    }

    /// Links touching `id`, in link-list order
    pub fn incident(&self, id: &NodeId) -> &[&'a RelationshipEdge] {
        self.incident.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Neighbors of `id` paired with the link that reaches them
    pub fn neighbors<'s>(
        &'s self,
        id: &'s NodeId,
    ) -> impl Iterator<Item = (&'a NodeId, &'a RelationshipEdge)> + 's {
        self.incident(id)
            .iter()
            .filter_map(move |&link| link.other_end(id).map(|other| (other, link)))
    }
}
