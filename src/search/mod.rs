//! Federated search aggregation.
//!
//! Fans one normalized query out across every registered collection, merges
//! the per-collection scored matches into a single globally ranked list, and
//! projects each survivor into a presentation-ready result.

pub mod aggregator;
pub mod collection;
pub mod merge;
pub mod query;
pub mod snippet;
pub mod url;

pub use aggregator::{DEFAULT_LIMIT, LIMIT_CAP, SearchAggregator};
pub use query::{MAX_QUERY_LEN, MIN_QUERY_LEN, normalize_query};
pub use snippet::FALLBACK_SNIPPET;
