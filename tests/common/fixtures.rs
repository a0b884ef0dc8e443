//! Graph fixtures

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sagegraph::{Category, ConceptNode, Graph, RelationshipEdge};

/// A concept with a name derived from its id
pub fn concept(id: &str) -> ConceptNode {
    ConceptNode::new(id, id.to_uppercase(), Category::Concept)
        .with_description(format!("The concept {}", id))
}

/// `ids[0] - ids[1] - ... - ids[n-1]`, each link pointing forward
pub fn chain(ids: &[&str]) -> Graph {
    let nodes = ids.iter().map(|id| concept(id)).collect();
    let links = ids
        .windows(2)
        .map(|pair| RelationshipEdge::new(pair[0], pair[1], "next"))
        .collect();
    Graph::new(nodes, links)
}

/// Seeded random graph over `n0..n{node_count}`. May be disconnected and
/// may contain self-loops and parallel links.
pub fn random_graph(seed: u64, node_count: usize, link_count: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);

    let nodes: Vec<ConceptNode> = (0..node_count).map(|i| concept(&format!("n{}", i))).collect();
    let links = (0..link_count)
        .map(|i| {
            let source = rng.gen_range(0..node_count);
            let target = rng.gen_range(0..node_count);
            RelationshipEdge::new(
                format!("n{}", source),
                format!("n{}", target),
                format!("r{}", i % 4),
            )
        })
        .collect();

    Graph::new(nodes, links)
}
