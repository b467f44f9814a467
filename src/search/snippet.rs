//! Snippet derivation.
//!
//! Turns an inconsistently shaped stored document into a clean, bounded
//! preview string. The candidate chain is category-aware and every step is
//! total: a malformed shape is an absent candidate, and the extractor always
//! produces a non-empty, HTML-free string of at most [`SNIPPET_MAX`]
//! characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::RawDocument;

/// Maximum snippet length in characters.
pub const SNIPPET_MAX: usize = 160;

/// Returned when no candidate field yields usable text.
pub const FALLBACK_SNIPPET: &str = "No description available";

/// Category whose documents prefer `shortName` over article content.
const SHOPPING_CATEGORY: &str = "shopping-deals";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]*>").expect("tag pattern is valid"));

/// Derive a snippet for a document.
///
/// Candidate chains, first non-empty wins (empty string counts as absent):
/// - `shopping-deals`: `description` → `shortName` → `headline`
/// - everything else: `description` → `content[0].text` → `headline`
///
/// The winning candidate is stripped of HTML tags and truncated to
/// [`SNIPPET_MAX`] characters with a `...` suffix. If stripping leaves
/// nothing, or no candidate exists, the fixed fallback string is returned.
pub fn extract_snippet(document: &RawDocument, category: &str) -> String {
    let candidate = if category == SHOPPING_CATEGORY {
        document
            .text("description")
            .or_else(|| document.text("shortName"))
            .or_else(|| document.text("headline"))
    } else {
        document
            .text("description")
            .or_else(|| document.first_content_text())
            .or_else(|| document.text("headline"))
    };

    let Some(raw) = candidate else {
        return FALLBACK_SNIPPET.to_string();
    };

    let stripped = strip_html(raw);
    if stripped.is_empty() {
        tracing::debug!(category, "snippet candidate stripped to nothing, using fallback");
        return FALLBACK_SNIPPET.to_string();
    }
    truncate_snippet(&stripped)
}

/// Remove every tag-like `<...>` span and trim the remainder.
fn strip_html(text: &str) -> String {
    TAG_RE.replace_all(text, "").trim().to_string()
}

/// Bound `text` to [`SNIPPET_MAX`] characters.
///
/// Over-long text is cut to `SNIPPET_MAX - 3` characters, trimmed, stripped
/// of trailing periods (so the suffix never produces `....`), and terminated
/// with `...`.
fn truncate_snippet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= SNIPPET_MAX {
        return trimmed.to_string();
    }

    let mut cut: String = trimmed.chars().take(SNIPPET_MAX - 3).collect();
    let kept = cut.trim_end().len();
    cut.truncate(kept);
    while cut.ends_with('.') {
        cut.pop();
        let kept = cut.trim_end().len();
        cut.truncate(kept);
    }
    cut.push_str("...");
    cut
}
