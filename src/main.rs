use std::sync::Arc;

use content_search::config::Config;
use content_search::registry::CollectionRegistry;
use content_search::search::SearchAggregator;
use content_search::store::MemoryStore;
use content_search::{server, trace};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trace::init();

    let config = Config::from_env()?;
    let registry = Arc::new(CollectionRegistry::standard());

    let store = MemoryStore::load_dir(&registry, &config.data_dir)?;
    let aggregator = Arc::new(SearchAggregator::new(Arc::new(store), Arc::clone(&registry)));

    tracing::info!(
        collections = registry.descriptors().len(),
        data_dir = %config.data_dir.display(),
        "starting content-search"
    );

    server::run(config, aggregator).await
}
