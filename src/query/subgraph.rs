//! Bounded neighborhood extraction

use super::index::AdjacencyIndex;
use crate::graph::{Graph, NodeId};
use std::collections::HashSet;

/// Query for the induced subgraph around a center concept
#[derive(Debug, Clone)]
pub struct SubgraphQuery {
    /// Center node; `None` means the whole graph
    pub center: Option<NodeId>,
    /// Number of hops to expand (`<= 0` means the whole graph)
    pub depth: i32,
}

impl SubgraphQuery {
    /// Neighborhood of `center`, one hop by default
    pub fn around(center: impl Into<NodeId>) -> Self {
        Self {
            center: Some(center.into()),
            depth: 1,
        }
    }

    /// Set the number of hops
    pub fn depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Execute the extraction against a graph
    ///
    /// Returns the graph unchanged when there is no center, when
    /// `depth <= 0`, or when the center is not in the graph.
    pub fn execute(&self, graph: &Graph) -> Graph {
        let Some(center) = self.center.as_ref() else {
            return graph.clone();
        };
        if self.depth <= 0 || !graph.contains(center) {
            return graph.clone();
        }

        let reached = self.reach(graph, center);

        // Induced subgraph: original order, every link with both ends reached
        let nodes = graph
            .nodes
            .iter()
            .filter(|node| reached.contains(&node.id))
            .cloned()
            .collect();
        let links = graph
            .links
            .iter()
            .filter(|link| reached.contains(&link.source) && reached.contains(&link.target))
            .cloned()
            .collect();

        Graph::new(nodes, links)
    }

    /// Level-by-level BFS; a level only expands from nodes reached before it.
    fn reach<'a>(&self, graph: &'a Graph, center: &'a NodeId) -> HashSet<&'a NodeId> {
        let index = AdjacencyIndex::build(graph);

        let mut reached: HashSet<&NodeId> = HashSet::new();
        reached.insert(center);
        let mut frontier: Vec<&NodeId> = vec![center];

        for _ in 0..self.depth {
            if frontier.is_empty() {
                break;
            }

            let mut next: Vec<&NodeId> = Vec::new();
            for node_id in &frontier {
                for (neighbor, _) in index.neighbors(node_id) {
                    if reached.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            frontier = next;
        }

        reached
    }
}

/// Induced subgraph within `depth` hops of `center`.
///
/// See [`SubgraphQuery::execute`] for the pass-through cases.
pub fn extract(graph: &Graph, center: Option<&NodeId>, depth: i32) -> Graph {
    SubgraphQuery {
        center: center.cloned(),
        depth,
    }
    .execute(graph)
}
