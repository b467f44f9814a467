//! Backing document store abstraction.
//!
//! The aggregation core never talks to an index directly; it depends on a
//! single per-collection capability: run a relevance-ranked text search and
//! hand back scored field subsets. [`MemoryStore`] is the in-process
//! implementation used by the binary and the tests.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::document::RawDocument;
use crate::error::StoreError;

/// The field subset requested per matched document. The relevance score is
/// returned alongside the fields, never as one of them.
pub const FETCH_FIELDS: &[&str] = &[
    "id",
    "headline",
    "description",
    "content",
    "canonicalUrl",
    "shortName",
];

/// One matched document with its store-computed relevance score.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    /// The matched fields, restricted to [`FETCH_FIELDS`].
    pub fields: RawDocument,
    /// Relevance of the match; comparable only within one search call.
    pub score: f64,
}

/// A text-search-capable document store.
///
/// Implementations manage named collections of loosely-typed documents and
/// answer relevance-ranked queries against one collection at a time.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Search `collection` for `query`, returning up to `cap` hits ordered by
    /// descending relevance. Tie order among equal scores is unspecified.
    async fn text_search(
        &self,
        collection: &str,
        query: &str,
        cap: usize,
    ) -> Result<Vec<ScoredHit>, StoreError>;
}
