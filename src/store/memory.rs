//! In-process document store with term-frequency scoring.
//!
//! Holds each collection's documents in memory and scores a match as the
//! total number of query-term occurrences across its text-bearing fields.
//! Good enough for serving seeded content and for exercising the aggregation
//! pipeline; anything smarter belongs in a real index.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;

use super::{DocumentStore, FETCH_FIELDS, ScoredHit};
use crate::document::RawDocument;
use crate::error::{Result, StoreError};
use crate::registry::CollectionRegistry;

/// In-memory [`DocumentStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<RawDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection with its documents, replacing any existing one.
    pub fn insert_collection(&mut self, name: impl Into<String>, documents: Vec<RawDocument>) {
        self.collections.insert(name.into(), documents);
    }

    /// Seed a store from a directory of `<collection>.json` array files, one
    /// per registered collection.
    ///
    /// A missing seed file is logged and leaves that collection empty rather
    /// than failing startup; a present but unparseable file is an error.
    pub fn load_dir(registry: &CollectionRegistry, dir: &Path) -> Result<Self> {
        let mut store = Self::new();
        for descriptor in registry.descriptors() {
            let path = dir.join(format!("{}.json", descriptor.collection));
            if !path.exists() {
                tracing::warn!(
                    collection = descriptor.collection,
                    path = %path.display(),
                    "seed file missing, collection starts empty"
                );
                store.insert_collection(descriptor.collection, Vec::new());
                continue;
            }
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading seed file {}", path.display()))?;
            let values: Vec<Value> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing seed file {}", path.display()))?;
            let documents: Vec<RawDocument> = values
                .into_iter()
                .filter_map(RawDocument::from_value)
                .collect();
            tracing::info!(
                collection = descriptor.collection,
                documents = documents.len(),
                "seeded collection"
            );
            store.insert_collection(descriptor.collection, documents);
        }
        Ok(store)
    }

    /// Term-frequency relevance of one document against the query terms.
    fn score(document: &RawDocument, terms: &[String]) -> f64 {
        let mut haystack: Vec<&str> = ["headline", "description", "shortName"]
            .iter()
            .filter_map(|field| document.text(field))
            .collect();
        if let Some(Value::Array(entries)) = document.get("content") {
            for entry in entries {
                if let Some(text) = entry.as_object().and_then(|o| o.get("text")).and_then(Value::as_str) {
                    haystack.push(text);
                }
            }
        }

        let mut hits = 0usize;
        for part in haystack {
            for token in tokenize(part) {
                if terms.iter().any(|t| *t == token) {
                    hits += 1;
                }
            }
        }
        hits as f64
    }
}

/// Lowercased alphanumeric tokens of a text.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn text_search(
        &self,
        collection: &str,
        query: &str,
        cap: usize,
    ) -> std::result::Result<Vec<ScoredHit>, StoreError> {
        let documents = self
            .collections
            .get(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;

        let terms: Vec<String> = tokenize(query).collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<ScoredHit> = documents
            .iter()
            .filter_map(|document| {
                let score = Self::score(document, &terms);
                (score > 0.0).then(|| ScoredHit {
                    fields: document.project(FETCH_FIELDS),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(cap);
        Ok(hits)
    }
}
