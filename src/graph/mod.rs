//! Core graph data structures

mod dataset;
mod edge;
mod node;
pub mod offline;

#[cfg(test)]
mod tests;

pub use dataset::{Graph, SanitizeReport};
pub use edge::RelationshipEdge;
pub use node::{Category, ConceptNode, NodeId, Quote};
