//! Concept node representation in the knowledge graph

use serde::{Deserialize, Serialize};

/// Unique identifier for a concept node
///
/// Serializes as a plain string (e.g. `"ren"`, `"junzi"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Category of a concept
///
/// Unknown categories from a remote source land in `Other` rather than
/// failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Virtue,
    Ideal,
    Principle,
    Concept,
    School,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Core => "core",
            Category::Virtue => "virtue",
            Category::Ideal => "ideal",
            Category::Principle => "principle",
            Category::Concept => "concept",
            Category::School => "school",
            Category::Other(other) => other.as_str(),
        };
        f.write_str(label)
    }
}

/// A supporting quotation attached to a concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub source: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// A concept in the knowledge graph
///
/// Never mutated once it is part of a resolved graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptNode {
    /// Unique identifier
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// Concept category
    pub category: Category,
    /// Free-text explanation
    #[serde(default)]
    pub description: String,
    /// Supporting quotations, in authored order
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

impl ConceptNode {
    /// Create a new concept with no description or quotes
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            quotes: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a quotation
    pub fn with_quote(mut self, text: impl Into<String>, source: impl Into<String>) -> Self {
        self.quotes.push(Quote::new(text, source));
        self
    }
}
