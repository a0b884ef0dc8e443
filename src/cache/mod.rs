//! Cache tiers for resolved query results
//!
//! Two tiers: [`MemoryCache`] for the life of the process and a
//! [`DurableCache`] (normally [`SqliteCache`]) that survives restarts. Both
//! are written only by the repository after a successful remote resolution.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryCache;
pub use sqlite::SqliteCache;
pub use traits::{
    CacheEntry, CacheError, CacheResult, CachedPayload, DurableCache, OpenCache, QuerySignature,
};
