//! Federated content search service.
//!
//! Fans a free-text query out across several independently-indexed content
//! collections, merges the scored matches into one globally ranked list, and
//! projects each match into a uniform `{id, headline, url, category,
//! snippet}` shape. Served over a small axum HTTP surface.

pub mod config;
pub mod document;
pub mod error;
pub mod registry;
pub mod search;
pub mod server;
pub mod store;
pub mod trace;
pub mod types;

pub use config::Config;
pub use document::RawDocument;
pub use registry::{CollectionDescriptor, CollectionRegistry};
pub use search::SearchAggregator;
pub use store::{DocumentStore, MemoryStore, ScoredHit};
pub use types::{ScoredDocument, SearchResult};
