//! Global result merging.

use crate::types::ScoredDocument;

/// Merge the union of all collections' scored documents into one sequence
/// ordered by score descending, truncated to `cap`.
///
/// The sort is a total order on score only. Relative order among equal scores
/// is unspecified (the sort happens to be stable with respect to input order,
/// but callers must not rely on that). No category fairness: one high-scoring
/// category may take every slot.
pub fn merge_ranked(mut documents: Vec<ScoredDocument>, cap: usize) -> Vec<ScoredDocument> {
    documents.sort_by(|a, b| b.score.total_cmp(&a.score));
    documents.truncate(cap);
    documents
}
