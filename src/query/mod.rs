//! Query system for concept graphs
//!
//! Pure functions over a [`Graph`](crate::graph::Graph) value: bounded
//! neighborhood extraction, connecting paths, and substring search. None of
//! them own or mutate the graph they are given.

mod index;
mod path;
mod search;
mod subgraph;
mod types;

pub use index::AdjacencyIndex;
pub use path::{find_path, PathQuery};
pub use search::{search, SearchQuery};
pub use subgraph::{extract, SubgraphQuery};
pub use types::{hop_count, PathStep};
