//! Shared helpers for the integration tests

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{chain, concept, random_graph};
