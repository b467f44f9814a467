//! Per-collection search with failure containment.

use crate::registry::CollectionDescriptor;
use crate::store::DocumentStore;
use crate::types::ScoredDocument;

/// Search one collection and tag each hit with the collection's category.
///
/// Any store fault is caught here: the failure is logged and that collection
/// contributes nothing, leaving the rest of the aggregation untouched. One
/// broken category degrades result completeness, not search availability.
pub async fn search_collection(
    store: &dyn DocumentStore,
    descriptor: &CollectionDescriptor,
    query: &str,
    cap: usize,
) -> Vec<ScoredDocument> {
    match store.text_search(descriptor.collection, query, cap).await {
        Ok(hits) => hits
            .into_iter()
            .map(|hit| ScoredDocument {
                document: hit.fields,
                category: descriptor.category.to_string(),
                score: hit.score,
            })
            .collect(),
        Err(err) => {
            tracing::warn!(
                collection = descriptor.collection,
                query,
                error = %err,
                "collection search failed, contributing no results"
            );
            Vec::new()
        }
    }
}
