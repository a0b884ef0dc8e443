//! Property checks for the query functions over seeded random graphs and
//! the bundled offline dataset.

mod common;

use common::{chain, random_graph};
use sagegraph::graph::offline;
use sagegraph::query::{extract, find_path, hop_count, search};
use sagegraph::{Graph, NodeId};
use std::collections::HashSet;

const SEEDS: [u64; 5] = [1, 7, 42, 1234, 98765];

fn node_ids(graph: &Graph) -> HashSet<NodeId> {
    graph.nodes.iter().map(|n| n.id.clone()).collect()
}

#[test]
fn neighborhood_of_b_in_a_chain() {
    let graph = chain(&["a", "b", "c", "d"]);

    let sub = extract(&graph, Some(&"b".into()), 1);

    let ids: Vec<&str> = sub.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    let links: Vec<(&str, &str)> = sub
        .links
        .iter()
        .map(|l| (l.source.as_str(), l.target.as_str()))
        .collect();
    assert_eq!(links, vec![("a", "b"), ("b", "c")]);
}

#[test]
fn neighborhoods_grow_with_depth() {
    for seed in SEEDS {
        let graph = random_graph(seed, 30, 40);
        for center in ["n0", "n5", "n17"] {
            let center = NodeId::from(center);
            let mut previous = node_ids(&extract(&graph, Some(&center), 1));
            assert!(previous.contains(&center));
            for depth in 2..6 {
                let current = node_ids(&extract(&graph, Some(&center), depth));
                assert!(
                    previous.is_subset(&current),
                    "seed {} center {} depth {} shrank",
                    seed,
                    center,
                    depth
                );
                previous = current;
            }
        }
    }
}

#[test]
fn neighborhoods_are_induced_subgraphs() {
    for seed in SEEDS {
        let graph = random_graph(seed, 25, 35);
        let sub = extract(&graph, Some(&"n3".into()), 2);
        let ids = node_ids(&sub);

        let expected: Vec<_> = graph
            .links
            .iter()
            .filter(|l| ids.contains(&l.source) && ids.contains(&l.target))
            .cloned()
            .collect();
        assert_eq!(sub.links, expected, "seed {}", seed);
    }
}

#[test]
fn non_positive_depth_or_unknown_center_is_the_whole_graph() {
    let graph = random_graph(3, 10, 12);

    assert_eq!(extract(&graph, Some(&"n1".into()), 0), graph);
    assert_eq!(extract(&graph, Some(&"n1".into()), -3), graph);
    assert_eq!(extract(&graph, Some(&"nowhere".into()), 2), graph);
    assert_eq!(extract(&graph, None, 2), graph);
}

#[test]
fn path_lengths_are_symmetric() {
    for seed in SEEDS {
        let graph = random_graph(seed, 20, 24);
        for (a, b) in [("n0", "n9"), ("n3", "n14"), ("n7", "n19")] {
            let forward = find_path(&graph, &a.into(), &b.into());
            let backward = find_path(&graph, &b.into(), &a.into());
            assert_eq!(forward.len(), backward.len(), "seed {} {}->{}", seed, a, b);
        }
    }
}

#[test]
fn paths_are_walkable() {
    for seed in SEEDS {
        let graph = random_graph(seed, 20, 30);
        let path = find_path(&graph, &"n2".into(), &"n11".into());
        if path.is_empty() {
            continue;
        }

        assert_eq!(path[0].node.id.as_str(), "n2");
        assert!(path[0].via_edge.is_none());
        assert_eq!(path[path.len() - 1].node.id.as_str(), "n11");
        for pair in path.windows(2) {
            let edge = pair[1].via_edge.as_ref().unwrap();
            assert!(edge.touches(&pair[0].node.id));
            assert!(edge.touches(&pair[1].node.id));
        }
    }
}

#[test]
fn path_is_never_longer_than_the_neighborhood_radius() {
    for seed in SEEDS {
        let graph = random_graph(seed, 20, 30);
        let path = find_path(&graph, &"n4".into(), &"n13".into());
        if path.is_empty() {
            continue;
        }
        let hops = hop_count(&path) as i32;

        let reach = node_ids(&extract(&graph, Some(&"n4".into()), hops));
        assert!(reach.contains(&NodeId::from("n13")));
        if hops > 1 {
            let short = node_ids(&extract(&graph, Some(&"n4".into()), hops - 1));
            assert!(!short.contains(&NodeId::from("n13")));
        }
    }
}

#[test]
fn self_path_and_unreachable_targets() {
    let mut graph = chain(&["a", "b"]);
    graph.nodes.push(common::concept("island"));

    let own = find_path(&graph, &"a".into(), &"a".into());
    assert_eq!(own.len(), 1);
    assert!(own[0].via_edge.is_none());

    assert!(find_path(&graph, &"a".into(), &"island".into()).is_empty());
    assert!(find_path(&graph, &"a".into(), &"ghost".into()).is_empty());
}

#[test]
fn search_is_idempotent_and_order_preserving() {
    let graph = offline::dataset();

    let first = search(&graph, "virtue");
    let second = search(&graph, "virtue");
    assert_eq!(first, second);
    assert!(!first.is_empty());

    let positions: Vec<usize> = first
        .iter()
        .map(|hit| graph.nodes.iter().position(|n| n.id == hit.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn search_is_case_sensitive() {
    let graph = offline::dataset();
    let lower = search(&graph, "virtue");
    let upper = search(&graph, "VIRTUE");
    assert!(!lower.is_empty());
    assert!(upper.is_empty());
}

#[test]
fn offline_path_from_petty_person_to_harmony() {
    let graph = offline::dataset();

    let path = find_path(&graph, &"xiaoren".into(), &"he".into());

    let ids: Vec<&str> = path.iter().map(|s| s.node.id.as_str()).collect();
    assert_eq!(ids, vec!["xiaoren", "junzi", "zhongyong", "he"]);
}
