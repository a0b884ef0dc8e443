//! Connecting-path search between two concepts

use super::index::AdjacencyIndex;
use super::types::PathStep;
use crate::graph::{Graph, NodeId, RelationshipEdge};
use std::collections::{HashMap, HashSet, VecDeque};

/// Query for the shortest (by hop count) path between two concepts
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Starting concept
    pub start: NodeId,
    /// Destination concept
    pub end: NodeId,
}

impl PathQuery {
    /// Create a new path query between two concepts
    pub fn between(start: impl Into<NodeId>, end: impl Into<NodeId>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Execute the path query (unbounded BFS over undirected links)
    ///
    /// Returns an empty path when either endpoint is missing or the two
    /// are not connected.
    pub fn execute(&self, graph: &Graph) -> Vec<PathStep> {
        let (Some(start_node), Some(_)) = (graph.node(&self.start), graph.node(&self.end)) else {
            return Vec::new();
        };

        if self.start == self.end {
            return vec![PathStep::start(start_node.clone())];
        }

        let index = AdjacencyIndex::build(graph);

        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        let mut predecessors: HashMap<&NodeId, (&NodeId, &RelationshipEdge)> = HashMap::new();

        visited.insert(&self.start);
        queue.push_back(&self.start);

        let mut found = false;

        'search: while let Some(current) = queue.pop_front() {
            for (neighbor, link) in index.neighbors(current) {
                if !visited.insert(neighbor) {
                    continue;
                }
                predecessors.insert(neighbor, (current, link));

                if neighbor == &self.end {
                    found = true;
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }

        if !found {
            return Vec::new();
        }

        self.reconstruct_path(graph, &predecessors)
    }

    /// Walk predecessors back from the end, then reverse
    fn reconstruct_path(
        &self,
        graph: &Graph,
        predecessors: &HashMap<&NodeId, (&NodeId, &RelationshipEdge)>,
    ) -> Vec<PathStep> {
        let mut steps: Vec<PathStep> = Vec::new();
        let mut current = &self.end;

        while let Some((pred, link)) = predecessors.get(current) {
            if let Some(node) = graph.node(current) {
                steps.push(PathStep::via(node.clone(), (*link).clone()));
            }
            current = *pred;
        }

        if let Some(start_node) = graph.node(&self.start) {
            steps.push(PathStep::start(start_node.clone()));
        }

        steps.reverse();
        steps
    }
}

/// Shortest connecting path from `start` to `end`, or empty.
pub fn find_path(graph: &Graph, start: &NodeId, end: &NodeId) -> Vec<PathStep> {
    PathQuery::between(start.clone(), end.clone()).execute(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Category, ConceptNode};
    use crate::query::hop_count;

    fn ids(path: &[PathStep]) -> Vec<&str> {
        path.iter().map(|s| s.node.id.as_str()).collect()
    }

    fn create_test_graph() -> Graph {
        // A - B - C - D
        //      \
        //       E - F        G (isolated)
        Graph::new(
            ["A", "B", "C", "D", "E", "F", "G"]
                .iter()
                .map(|id| ConceptNode::new(*id, *id, Category::Concept))
                .collect(),
            vec![
                RelationshipEdge::new("A", "B", "r"),
                RelationshipEdge::new("B", "C", "r"),
                RelationshipEdge::new("C", "D", "r"),
                RelationshipEdge::new("B", "E", "r"),
                RelationshipEdge::new("E", "F", "r"),
            ],
        )
    }

    #[test]
    fn test_path_same_node() {
        let graph = create_test_graph();
        let path = PathQuery::between("A", "A").execute(&graph);

        assert_eq!(path.len(), 1);
        assert_eq!(path[0].node.id, NodeId::from("A"));
        assert!(path[0].via_edge.is_none());
    }

    #[test]
    fn test_path_three_hops() {
        let graph = create_test_graph();
        let path = PathQuery::between("A", "D").execute(&graph);

        assert_eq!(ids(&path), vec!["A", "B", "C", "D"]);
        assert_eq!(hop_count(&path), 3);
        assert!(path[0].via_edge.is_none());
        assert_eq!(
            path[3].via_edge.as_ref().unwrap(),
            &RelationshipEdge::new("C", "D", "r")
        );
    }

    #[test]
    fn test_path_against_link_direction() {
        let graph = create_test_graph();
        let path = PathQuery::between("F", "A").execute(&graph);

        assert_eq!(ids(&path), vec!["F", "E", "B", "A"]);
        assert_eq!(
            path[1].via_edge.as_ref().unwrap(),
            &RelationshipEdge::new("E", "F", "r")
        );
    }

    #[test]
    fn test_path_not_connected() {
        let graph = create_test_graph();
        assert!(PathQuery::between("A", "G").execute(&graph).is_empty());
    }

    #[test]
    fn test_path_nonexistent_endpoint() {
        let graph = create_test_graph();
        assert!(find_path(&graph, &"nope".into(), &"A".into()).is_empty());
        assert!(find_path(&graph, &"A".into(), &"nope".into()).is_empty());
        assert!(find_path(&graph, &"nope".into(), &"nope".into()).is_empty());
    }

    #[test]
    fn test_shortest_path_preferred_over_first_found_branch() {
        // A-B-C-D plus a shortcut A-D listed last
        let mut graph = create_test_graph();
        graph.links.push(RelationshipEdge::new("D", "A", "shortcut"));

        let path = find_path(&graph, &"A".into(), &"D".into());

        assert_eq!(ids(&path), vec!["A", "D"]);
        assert_eq!(path[1].via_edge.as_ref().unwrap().relationship, "shortcut");
    }

    #[test]
    fn test_tie_broken_by_link_order() {
        // Two 2-hop routes A-X-Z and A-Y-Z; A-X is listed first
        let graph = Graph::new(
            ["A", "X", "Y", "Z"]
                .iter()
                .map(|id| ConceptNode::new(*id, *id, Category::Concept))
                .collect(),
            vec![
                RelationshipEdge::new("A", "X", "r"),
                RelationshipEdge::new("A", "Y", "r"),
                RelationshipEdge::new("Y", "Z", "r"),
                RelationshipEdge::new("X", "Z", "r"),
            ],
        );

        let path = find_path(&graph, &"A".into(), &"Z".into());

        assert_eq!(ids(&path), vec!["A", "X", "Z"]);
    }
}
