//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for content-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned by a backing [`DocumentStore`](crate::store::DocumentStore).
///
/// Store faults are contained at the per-collection search boundary: one
/// failing collection contributes an empty result and the aggregation
/// continues with the remaining collections.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The requested collection is not known to the store.
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    /// The store backend failed while searching a collection.
    #[error("store fault in collection '{collection}': {message}")]
    Backend {
        /// The collection being searched when the fault occurred.
        collection: String,
        /// A description of the failure.
        message: String,
    },
}
