//! Shared result types for the search pipeline.

use serde::{Deserialize, Serialize};

use crate::document::RawDocument;

/// A raw document paired with the category of its source collection and the
/// store-reported relevance score.
///
/// Created per search and discarded after projection; never persisted.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    /// The matched document, restricted to the fetchable field subset.
    pub document: RawDocument,
    /// Category slug of the collection that produced the match.
    pub category: String,
    /// Store-computed relevance; `0.0` when the store reports none.
    pub score: f64,
}

/// A presentation-ready search result.
///
/// `snippet` is bounded to 160 characters and free of HTML; `url` is always a
/// root-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub headline: String,
    pub url: String,
    pub category: String,
    pub snippet: String,
}
