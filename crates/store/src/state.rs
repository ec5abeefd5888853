//! Store state slices.

use std::collections::HashMap;

use siteline_core::{
    InspectionTemplate, PageInfo, RecordId, RecordSearchHit, RecordType, RecordTypeId,
    RecordWithType, ReportSummary,
};

/// State of the cursor-paginated record list.
///
/// `is_loading` and `is_loading_more` are never simultaneously true for the
/// same fetch generation: the first-page load resets the whole slice and
/// `fetch_more` refuses to start while another append is pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsListState {
    pub records: Vec<RecordWithType>,
    pub page_info: PageInfo,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub error: Option<String>,
}

/// State of the debounce-friendly search surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSearchState {
    pub query: String,
    pub results: Vec<RecordSearchHit>,
    pub is_searching: bool,
}

/// One detail cache entry: the record plus its best-effort aggregates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDetailState {
    pub record: Option<RecordWithType>,
    pub reports: Vec<ReportSummary>,
    pub templates: Vec<InspectionTemplate>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl RecordDetailState {
    /// Placeholder written while the fan-out is in flight.
    pub(crate) fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// A populated, error-free entry suppresses refetching. A failed entry
    /// does not count: retrying after an error must hit the network again.
    pub fn is_hit(&self) -> bool {
        self.record.is_some() && self.error.is_none()
    }
}

/// Canonical store state.
///
/// The legacy "site" naming is served by accessors over these same fields;
/// nothing is stored twice.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    // Unpaginated collection (legacy surface) and its mutation status.
    pub record_types: Vec<RecordType>,
    pub records: Vec<RecordWithType>,
    pub current_record: Option<RecordWithType>,
    pub record_templates: Vec<InspectionTemplate>,
    pub is_loading: bool,
    pub error: Option<String>,

    // Paginated list.
    pub list: RecordsListState,
    pub list_generation: u64,
    pub current_record_type_id: Option<RecordTypeId>,

    // Search.
    pub search: RecordSearchState,
    pub search_generation: u64,

    // Detail cache. `detail_order` tracks first insertion for the optional
    // cap; keys are otherwise never removed.
    pub current_record_id: Option<RecordId>,
    pub detail_cache: HashMap<RecordId, RecordDetailState>,
    pub detail_order: Vec<RecordId>,
}

impl StoreState {
    /// Invalidate every in-flight list completion and return the new token.
    pub fn bump_list_generation(&mut self) -> u64 {
        self.list_generation += 1;
        self.list_generation
    }

    /// Invalidate every in-flight search completion and return the new token.
    pub fn bump_search_generation(&mut self) -> u64 {
        self.search_generation += 1;
        self.search_generation
    }

    pub fn track_detail_insertion(&mut self, id: RecordId) {
        if !self.detail_order.contains(&id) {
            self.detail_order.push(id);
        }
    }

    /// Drop oldest finalized entries until the cache fits `cap`.
    ///
    /// The active record's entry and in-flight placeholders are never
    /// evicted.
    pub fn evict_detail_overflow(&mut self, cap: usize) {
        while self.detail_cache.len() > cap {
            let evictable = self.detail_order.iter().position(|id| {
                Some(*id) != self.current_record_id
                    && self
                        .detail_cache
                        .get(id)
                        .is_some_and(|entry| !entry.is_loading)
            });
            let Some(pos) = evictable else {
                break;
            };
            let id = self.detail_order.remove(pos);
            self.detail_cache.remove(&id);
        }
    }
}
