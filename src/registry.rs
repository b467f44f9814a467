//! Static collection registry: which backing collections exist, which
//! client-facing category each one maps to, and how to synthesize a URL for a
//! document that does not carry one.

/// Maps one backing collection to its category slug and URL path prefix.
///
/// Every registered collection has exactly one category and exactly one URL
/// pattern. Descriptors are fixed at startup and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionDescriptor {
    /// Name of the backing document collection.
    pub collection: &'static str,
    /// Logical category slug presented to clients.
    pub category: &'static str,
    /// Path prefix used to synthesize a URL from a document id.
    pub url_pattern: &'static str,
}

/// Immutable table of registered collections, built once at process start
/// and injected by reference into the components that need it.
#[derive(Debug, Clone)]
pub struct CollectionRegistry {
    descriptors: Vec<CollectionDescriptor>,
}

impl CollectionRegistry {
    /// Build a registry from an explicit descriptor list.
    pub fn new(descriptors: Vec<CollectionDescriptor>) -> Self {
        Self { descriptors }
    }

    /// The production registry: the seven content categories.
    pub fn standard() -> Self {
        Self::new(vec![
            CollectionDescriptor {
                collection: "budget_data",
                category: "budget-data",
                url_pattern: "/extra-income/budget/",
            },
            CollectionDescriptor {
                collection: "freelance_jobs",
                category: "freelance-jobs",
                url_pattern: "/extra-income/freelance-jobs/",
            },
            CollectionDescriptor {
                collection: "money_making_apps",
                category: "money-making-apps",
                url_pattern: "/extra-income/money-making-apps/",
            },
            CollectionDescriptor {
                collection: "products_list",
                category: "shopping-deals",
                url_pattern: "/shopping-deals/",
            },
            CollectionDescriptor {
                collection: "remote_jobs",
                category: "remote-jobs",
                url_pattern: "/extra-income/remote-online-jobs/",
            },
            CollectionDescriptor {
                collection: "start_a_blog",
                category: "start-blog",
                url_pattern: "/start-a-blog/",
            },
            CollectionDescriptor {
                collection: "breaking_news",
                category: "breaking-news",
                url_pattern: "/breaking-news/",
            },
        ])
    }

    /// All registered descriptors.
    pub fn descriptors(&self) -> &[CollectionDescriptor] {
        &self.descriptors
    }

    /// Look up the URL pattern registered for a category, if any.
    pub fn url_pattern(&self, category: &str) -> Option<&'static str> {
        self.descriptors
            .iter()
            .find(|d| d.category == category)
            .map(|d| d.url_pattern)
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
