//! Query normalization.

/// Normalized queries shorter than this return no results and touch no store.
pub const MIN_QUERY_LEN: usize = 2;

/// Normalized queries longer than this are truncated before use, not rejected.
pub const MAX_QUERY_LEN: usize = 60;

/// Trim leading/trailing whitespace and collapse internal whitespace runs to
/// a single space.
pub fn normalize_query(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clamp a normalized query to [`MAX_QUERY_LEN`] characters.
pub fn clamp_query(normalized: &str) -> &str {
    match normalized.char_indices().nth(MAX_QUERY_LEN) {
        Some((byte_index, _)) => &normalized[..byte_index],
        None => normalized,
    }
}
