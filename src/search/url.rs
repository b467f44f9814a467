//! Outbound URL resolution.

use url::Url;

use crate::document::RawDocument;
use crate::registry::CollectionRegistry;

/// Resolve the root-relative URL for a document.
///
/// Priority order:
/// 1. A non-empty `canonicalUrl`: absolute URLs are reduced to their path
///    component; root-relative values pass through unchanged. A value that is
///    neither falls through.
/// 2. The category's registered URL pattern, concatenated with the document id.
/// 3. `"/" + id`.
pub fn resolve_url(document: &RawDocument, category: &str, registry: &CollectionRegistry) -> String {
    if let Some(canonical) = document.text("canonicalUrl") {
        if canonical.starts_with("http://") || canonical.starts_with("https://") {
            match Url::parse(canonical) {
                Ok(parsed) => return parsed.path().to_string(),
                Err(err) => {
                    tracing::debug!(canonical, error = %err, "unparseable canonical URL");
                    if canonical.starts_with('/') {
                        return canonical.to_string();
                    }
                }
            }
        } else if canonical.starts_with('/') {
            return canonical.to_string();
        }
    }

    let id = document.text("id").unwrap_or_default();
    match registry.url_pattern(category) {
        Some(pattern) => format!("{pattern}{id}"),
        None => format!("/{id}"),
    }
}
