//! Shared test fixtures and utilities for integration tests.
//!
//! Each test gets its own seeded [`MemoryStore`] and a fresh
//! [`SearchAggregator`] over the standard registry, so tests never share
//! state. The spy stores wrap the seeded store to observe or sabotage
//! per-collection calls:
//!
//! - [`RecordingStore`] records every `(collection, query, cap)` triple.
//! - [`FlakyStore`] fails one named collection and delegates the rest.

#![allow(dead_code)] // Fixtures are shared across integration test crates.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use content_search::error::StoreError;
use content_search::registry::CollectionRegistry;
use content_search::search::SearchAggregator;
use content_search::store::{DocumentStore, MemoryStore, ScoredHit};
use content_search::RawDocument;
use rstest::fixture;
use serde_json::{Value, json};

pub fn doc(value: Value) -> RawDocument {
    RawDocument::from_value(value).expect("seed document must be an object")
}

/// A store seeded with a representative document per category quirk:
/// explicit canonical URLs (absolute and root-relative), shopping documents
/// that only carry a `shortName`, article content lists, tag-only
/// descriptions, and an over-long description.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert_collection(
        "budget_data",
        vec![
            doc(json!({
                "id": "meal-prep-budget",
                "headline": "Meal Prep on a Budget",
                "description": "Cut your grocery bill with weekly meal prep plans and a simple budget template."
            })),
            doc(json!({
                "id": "zero-based-budget",
                "headline": "Zero-Based Budgeting Explained",
                "description": "",
                "content": [{"text": "Zero-based budgeting assigns every dollar a job before the month begins."}]
            })),
        ],
    );

    store.insert_collection(
        "freelance_jobs",
        vec![
            doc(json!({
                "id": "freelance-writing-gigs",
                "headline": "Freelance Writing Gigs That Pay Weekly",
                "description": "Freelance writing marketplaces that pay weekly, with rates and entry requirements for new freelance writers."
            })),
            doc(json!({
                "id": "freelance-editing",
                "headline": "Freelance Editing and Proofreading",
                "description": "",
                "content": [{"text": "Editing and proofreading are natural next steps for freelance writing veterans."}]
            })),
            doc(json!({
                "id": "cold-pitching",
                "headline": "Cold Pitching for Freelance Writers",
                "description": "How to land freelance clients by pitching cold.",
                "canonicalUrl": "/extra-income/freelance-jobs/cold-pitching"
            })),
        ],
    );

    store.insert_collection(
        "money_making_apps",
        vec![doc(json!({
            "id": "cashback-apps",
            "headline": "Best Cashback Apps",
            "description": "Apps that pay you cashback on everyday purchases.",
            "canonicalUrl": "https://www.dollarsandlife.com/extra-income/money-making-apps/cashback-apps?ref=nav"
        }))],
    );

    store.insert_collection(
        "products_list",
        vec![
            doc(json!({
                "id": "air-fryer-deal",
                "headline": "Air Fryer Flash Sale",
                "description": "",
                "shortName": "Crispy-Pro Air Fryer 5qt"
            })),
            doc(json!({
                "id": "mystery-deal",
                "headline": "Mystery Deal of the Day",
                "description": "<b></b>",
                "shortName": ""
            })),
        ],
    );

    store.insert_collection(
        "remote_jobs",
        vec![doc(json!({
            "id": "remote-writing-jobs",
            "headline": "Remote Writing Jobs",
            "description": "Companies hiring remote writers for blogs, docs, and marketing copy."
        }))],
    );

    store.insert_collection(
        "start_a_blog",
        vec![doc(json!({
            "id": "start-blog-checklist",
            "headline": "Launch Checklist",
            "description": "",
            "content": [{"text": "Hello world"}]
        }))],
    );

    store.insert_collection(
        "breaking_news",
        vec![
            doc(json!({
                "id": "rate-cut-news",
                "headline": "Fed Rate Cut: What It Means for Savers",
                "description": "A breaking look at how the rate cut affects savings accounts and CDs."
            })),
            doc(json!({
                "id": "markets-rally",
                "headline": "Markets Rally",
                "description": format!(
                    "Markets rallied across the board today. {}",
                    "Analysts point to cooling inflation, resilient earnings, and renewed appetite for risk assets among retail investors. ".repeat(3)
                )
            })),
        ],
    );

    store
}

/// Aggregator over the seeded store and the standard registry.
#[fixture]
pub fn aggregator() -> SearchAggregator {
    let registry = Arc::new(CollectionRegistry::standard());
    SearchAggregator::new(Arc::new(seeded_store()), registry)
}

/// Records every store call; delegates to the seeded store.
pub struct RecordingStore {
    inner: MemoryStore,
    pub calls: Mutex<Vec<(String, String, usize)>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: seeded_store(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn text_search(
        &self,
        collection: &str,
        query: &str,
        cap: usize,
    ) -> Result<Vec<ScoredHit>, StoreError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((collection.to_string(), query.to_string(), cap));
        self.inner.text_search(collection, query, cap).await
    }
}

/// Fails one named collection; delegates the rest to the seeded store.
pub struct FlakyStore {
    inner: MemoryStore,
    failing: &'static str,
}

impl FlakyStore {
    pub fn failing(collection: &'static str) -> Self {
        Self {
            inner: seeded_store(),
            failing: collection,
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn text_search(
        &self,
        collection: &str,
        query: &str,
        cap: usize,
    ) -> Result<Vec<ScoredHit>, StoreError> {
        if collection == self.failing {
            return Err(StoreError::Backend {
                collection: collection.to_string(),
                message: "simulated store fault".to_string(),
            });
        }
        self.inner.text_search(collection, query, cap).await
    }
}
