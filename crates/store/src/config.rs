//! Store configuration.

/// Tunables for one [`crate::RecordsStore`] instance.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Page size for the paginated list.
    pub page_size: usize,

    /// Result limit for search (a suggestions surface, deliberately smaller
    /// than `page_size`).
    pub search_limit: usize,

    /// Queries shorter than this never reach the repository.
    pub min_search_length: usize,

    /// Fetch size for the legacy unpaginated collection load.
    pub collection_limit: usize,

    /// Detail cache entry cap. `None` leaves the cache unbounded, which is
    /// acceptable for short-lived client sessions; long-running processes
    /// should set a cap.
    pub detail_cache_cap: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: 25,
            search_limit: 10,
            min_search_length: 2,
            collection_limit: 100,
            detail_cache_cap: None,
        }
    }
}

impl StoreConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    pub fn with_min_search_length(mut self, min_search_length: usize) -> Self {
        self.min_search_length = min_search_length;
        self
    }

    pub fn with_collection_limit(mut self, collection_limit: usize) -> Self {
        self.collection_limit = collection_limit;
        self
    }

    pub fn with_detail_cache_cap(mut self, cap: usize) -> Self {
        self.detail_cache_cap = Some(cap);
        self
    }
}
