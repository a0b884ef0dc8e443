//! Substring search over concept names, descriptions and quotes

use crate::graph::{ConceptNode, Graph};

/// Query for concepts mentioning a string
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Text to look for (case-sensitive)
    pub text: String,
    /// Maximum number of results
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: None,
        }
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Execute the search; results keep the graph's node order.
    ///
    /// The empty query matches nothing; any other text, whitespace
    /// included, is matched literally.
    pub fn execute(&self, graph: &Graph) -> Vec<ConceptNode> {
        if self.text.is_empty() {
            return Vec::new();
        }

        let matches = graph.nodes.iter().filter(|node| self.matches(node)).cloned();

        match self.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }

    fn matches(&self, node: &ConceptNode) -> bool {
        let needle = self.text.as_str();
        node.name.contains(needle)
            || node.description.contains(needle)
            || node.quotes.iter().any(|q| q.text.contains(needle))
    }
}

/// Concepts whose name, description or quote text contains `text`.
pub fn search(graph: &Graph, text: &str) -> Vec<ConceptNode> {
    SearchQuery::new(text).execute(graph)
}
