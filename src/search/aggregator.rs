//! Search orchestration: normalize, fan out, merge, project.

use std::sync::Arc;

use futures::future;

use super::collection::search_collection;
use super::merge::merge_ranked;
use super::query::{MIN_QUERY_LEN, normalize_query};
use super::snippet::extract_snippet;
use super::url::resolve_url;
use crate::registry::CollectionRegistry;
use crate::store::DocumentStore;
use crate::types::{ScoredDocument, SearchResult};

/// Hard cap on the effective result limit, regardless of what was requested.
pub const LIMIT_CAP: usize = 20;

/// Effective limit when the caller does not supply one.
pub const DEFAULT_LIMIT: usize = 10;

/// Stateless per-request orchestrator over an injected store and registry.
///
/// Each invocation of [`search`](Self::search) is independent; the only
/// shared state is the immutable registry and the store handle.
pub struct SearchAggregator {
    store: Arc<dyn DocumentStore>,
    registry: Arc<CollectionRegistry>,
}

impl SearchAggregator {
    pub fn new(store: Arc<dyn DocumentStore>, registry: Arc<CollectionRegistry>) -> Self {
        Self { store, registry }
    }

    /// Run a federated search and return results in merged score order.
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] after normalization return an
    /// empty list without touching the store. The effective limit is
    /// `limit.unwrap_or(DEFAULT_LIMIT)` capped at [`LIMIT_CAP`]. Collections
    /// are searched concurrently; a failing collection contributes nothing.
    pub async fn search(&self, query_text: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let normalized = normalize_query(query_text);
        if normalized.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let effective_limit = limit.unwrap_or(DEFAULT_LIMIT).min(LIMIT_CAP);

        let searches = self.registry.descriptors().iter().map(|descriptor| {
            search_collection(self.store.as_ref(), descriptor, &normalized, effective_limit)
        });
        let per_collection = future::join_all(searches).await;

        let merged = merge_ranked(
            per_collection.into_iter().flatten().collect(),
            effective_limit,
        );

        tracing::info!(
            query = %normalized,
            limit = effective_limit,
            results = merged.len(),
            "search complete"
        );

        merged
            .iter()
            .map(|scored| self.project(scored))
            .collect()
    }

    /// Project one merged document into the output shape.
    ///
    /// Total by construction: missing `id`/`headline` become empty strings,
    /// and snippet/URL derivation model their fallbacks as values.
    fn project(&self, scored: &ScoredDocument) -> SearchResult {
        let document = &scored.document;
        SearchResult {
            id: document.text("id").unwrap_or_default().to_string(),
            headline: document.text("headline").unwrap_or_default().to_string(),
            url: resolve_url(document, &scored.category, &self.registry),
            category: scored.category.clone(),
            snippet: extract_snippet(document, &scored.category),
        }
    }
}
