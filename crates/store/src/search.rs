//! Search controller: debounce-friendly record search.
//!
//! Debouncing itself is the caller's concern; `set_search_query` is a pure
//! state write precisely so a UI-level debounce can feed `search_records`
//! at its own cadence.

use tracing::{debug, warn};

use siteline_client::{RecordRepository, SearchQuery};
use siteline_core::RecordTypeId;

use crate::state::RecordSearchState;
use crate::store::RecordsStore;

impl<R> RecordsStore<R>
where
    R: RecordRepository,
{
    /// Record the query text. No network effect.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.with_state(|s| s.search.query = query.into());
    }

    /// Run a bounded search and replace the results wholesale.
    ///
    /// Queries below the configured minimum length yield empty results
    /// without touching the repository. A completion from an older call is
    /// dropped, so a slow early search can never overwrite fresher results.
    pub async fn search_records(&self, query: &str, record_type_id: Option<RecordTypeId>) {
        if query.chars().count() < self.config.min_search_length {
            self.with_state(|s| {
                s.bump_search_generation();
                s.search.results = Vec::new();
                s.search.is_searching = false;
            });
            return;
        }

        let generation = self.with_state(|s| {
            s.search.is_searching = true;
            s.bump_search_generation()
        });

        debug!(query, "searching records");
        let result = self
            .repo
            .search_records(SearchQuery {
                query: query.to_string(),
                record_type_id,
                limit: self.config.search_limit,
            })
            .await;

        self.with_state(|s| {
            if s.search_generation != generation {
                debug!("dropping stale search completion");
                return;
            }
            match result {
                Ok(hits) => s.search.results = hits,
                Err(err) => {
                    warn!(%err, "record search failed");
                    s.search.results = Vec::new();
                }
            }
            s.search.is_searching = false;
        });
    }

    /// Reset to the initial empty search state.
    pub fn clear_search(&self) {
        self.with_state(|s| {
            s.bump_search_generation();
            s.search = RecordSearchState::default();
        });
    }
}
