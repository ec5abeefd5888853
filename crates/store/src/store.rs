//! The records store: construction and state access.

use std::sync::{PoisonError, RwLock};

use siteline_client::RecordRepository;
use siteline_core::{InspectionTemplate, RecordId, RecordType, RecordTypeId, RecordWithType};

use crate::config::StoreConfig;
use crate::state::{RecordDetailState, RecordSearchState, RecordsListState, StoreState};

/// Client-side store for record list/detail state.
///
/// One instance per process (or per signed-in session). All actions take
/// `&self`: interior state lives behind an `RwLock` that is only ever held
/// for short synchronous sections, never across an await point, so
/// concurrent actions interleave exactly at their network boundaries.
pub struct RecordsStore<R> {
    pub(crate) repo: R,
    pub(crate) config: StoreConfig,
    state: RwLock<StoreState>,
}

impl<R> RecordsStore<R>
where
    R: RecordRepository,
{
    /// Create a store with default configuration.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, StoreConfig::default())
    }

    pub fn with_config(repo: R, config: StoreConfig) -> Self {
        Self {
            repo,
            config,
            state: RwLock::new(StoreState::default()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Run a mutation inside the write lock.
    ///
    /// The state is plain data, so a poisoned lock still holds a coherent
    /// snapshot; recover it rather than unwinding every caller.
    pub(crate) fn with_state<T>(&self, f: impl FnOnce(&mut StoreState) -> T) -> T {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub(crate) fn read_state<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    // --- snapshot accessors -------------------------------------------------

    /// The unpaginated collection, in its current (sorted-after-create or
    /// network) order.
    pub fn records(&self) -> Vec<RecordWithType> {
        self.read_state(|s| s.records.clone())
    }

    pub fn record_types(&self) -> Vec<RecordType> {
        self.read_state(|s| s.record_types.clone())
    }

    pub fn current_record(&self) -> Option<RecordWithType> {
        self.read_state(|s| s.current_record.clone())
    }

    pub fn record_templates(&self) -> Vec<InspectionTemplate> {
        self.read_state(|s| s.record_templates.clone())
    }

    /// Loading flag for collection loads and mutations.
    pub fn is_loading(&self) -> bool {
        self.read_state(|s| s.is_loading)
    }

    /// Last collection/mutation error, if any.
    pub fn error(&self) -> Option<String> {
        self.read_state(|s| s.error.clone())
    }

    /// Snapshot of the paginated list slice.
    pub fn list(&self) -> RecordsListState {
        self.read_state(|s| s.list.clone())
    }

    /// Snapshot of the search slice.
    pub fn search(&self) -> RecordSearchState {
        self.read_state(|s| s.search.clone())
    }

    /// The type filter used by subsequent paginated fetches.
    pub fn current_record_type_id(&self) -> Option<RecordTypeId> {
        self.read_state(|s| s.current_record_type_id)
    }

    /// Which detail screen is active, if any.
    pub fn current_record_id(&self) -> Option<RecordId> {
        self.read_state(|s| s.current_record_id)
    }

    /// Pure read of a detail cache entry.
    ///
    /// `None` means the key was never fetched, distinct from an
    /// existing-but-loading entry.
    pub fn get_record_detail(&self, id: RecordId) -> Option<RecordDetailState> {
        self.read_state(|s| s.detail_cache.get(&id).cloned())
    }

    /// Number of detail cache entries (loading placeholders included).
    pub fn detail_cache_len(&self) -> usize {
        self.read_state(|s| s.detail_cache.len())
    }
}
