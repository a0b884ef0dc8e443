//! Remote concept service
//!
//! The authoritative source for graph data when it is reachable. Every
//! endpoint returns JSON and requires a bearer credential.

mod client;
mod types;

pub use client::{ConceptService, HttpConceptService, MockConceptService, RemoteError};
pub use types::{
    ConceptDetails, ConceptRelation, ConnectionPathResponse, RelatedConcept, RelationDirection,
    RelationsResponse, SearchResponse, WirePathStep,
};
