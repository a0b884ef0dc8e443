//! Serialization tests against the knowledge-graph wire format

use serde_json::{json, Value};

/// Fixture: a `/knowledge-graph` response body
fn knowledge_graph_fixture() -> Value {
    json!({
        "nodes": [
            {
                "id": "ren",
                "name": "仁",
                "category": "core",
                "description": "Benevolence",
                "quotes": [
                    { "text": "樊迟问仁。子曰：爱人。", "source": "《论语·颜渊》" }
                ]
            },
            {
                "id": "yi",
                "name": "义",
                "category": "virtue",
                "description": "Righteousness",
                "quotes": []
            }
        ],
        "links": [
            {
                "source": "ren",
                "target": "yi",
                "relationship": "grounds",
                "description": "Righteousness grows out of benevolence."
            }
        ]
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::graph::{Category, Graph, NodeId, RelationshipEdge};

    #[test]
    fn graph_deserializes_from_wire_format() {
        let graph: Graph = serde_json::from_value(knowledge_graph_fixture()).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes[0].category, Category::Core);
        assert_eq!(graph.nodes[0].quotes[0].source, "《论语·颜渊》");
        assert_eq!(
            graph.links[0],
            RelationshipEdge::new("ren", "yi", "grounds")
                .with_description("Righteousness grows out of benevolence.")
        );
    }

    #[test]
    fn graph_serializes_back_to_same_shape() {
        let graph: Graph = serde_json::from_value(knowledge_graph_fixture()).unwrap();
        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(value, knowledge_graph_fixture());
    }

    #[test]
    fn link_endpoints_are_plain_strings() {
        let graph: Graph = serde_json::from_value(knowledge_graph_fixture()).unwrap();
        let value = serde_json::to_value(&graph.links[0]).unwrap();
        assert_eq!(value["source"], "ren");
        assert_eq!(graph.links[0].target, NodeId::from("yi"));
    }

    #[test]
    fn missing_category_is_malformed() {
        let result: Result<Graph, _> = serde_json::from_value(json!({
            "nodes": [{ "id": "ren", "name": "仁" }],
            "links": []
        }));
        assert!(result.is_err());
    }
}
