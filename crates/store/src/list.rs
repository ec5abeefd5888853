//! List controller: the cursor-paginated record collection.

use tracing::{debug, warn};

use siteline_client::{RecordRepository, RecordsQuery};
use siteline_core::{PageRequest, RecordTypeId};

use crate::state::RecordsListState;
use crate::store::RecordsStore;

impl<R> RecordsStore<R>
where
    R: RecordRepository,
{
    /// Load the first page for `record_type_id`, resetting the list.
    ///
    /// Always a wholesale reset, never a merge: prior records and page info
    /// are discarded before the request goes out. The active filter is
    /// recorded so `refresh_records`/`fetch_more_records` keep using it. A
    /// completion from an older reset (previous filter still in flight) is
    /// dropped instead of overwriting the newer list.
    pub async fn fetch_records_paginated(&self, record_type_id: Option<RecordTypeId>) {
        let generation = self.with_state(|s| {
            s.current_record_type_id = record_type_id;
            s.list = RecordsListState {
                is_loading: true,
                ..RecordsListState::default()
            };
            s.bump_list_generation()
        });

        debug!(filter = ?record_type_id, "loading first records page");
        let query = RecordsQuery::list(record_type_id, PageRequest::first(self.config.page_size));
        let result = self.repo.fetch_records_paginated(query).await;

        self.with_state(|s| {
            if s.list_generation != generation {
                debug!("dropping stale first-page completion");
                return;
            }
            match result {
                Ok(page) => {
                    s.list.records = page.data;
                    s.list.page_info = page.page_info;
                }
                Err(err) => {
                    warn!(%err, "records page load failed");
                    s.list.error = Some(err.to_string());
                }
            }
            s.list.is_loading = false;
        });
    }

    /// Append the next page to the list.
    ///
    /// No-op when the current page info reports no next page, or while a
    /// previous append is still pending (rapid repeated calls trigger one
    /// repository call). Order-preserving, forward cursor only.
    pub async fn fetch_more_records(&self) {
        let pending = self.with_state(|s| {
            if !s.list.page_info.has_next_page || s.list.is_loading_more {
                return None;
            }
            // Non-empty page implies an end cursor; an absent one means
            // there is nothing to continue from.
            let cursor = s.list.page_info.end_cursor.clone()?;
            s.list.is_loading_more = true;
            Some((cursor, s.current_record_type_id, s.list_generation))
        });
        let Some((cursor, filter, generation)) = pending else {
            return;
        };

        debug!("loading next records page");
        let query = RecordsQuery::list(filter, PageRequest::after(cursor, self.config.page_size));
        let result = self.repo.fetch_records_paginated(query).await;

        self.with_state(|s| {
            if s.list_generation != generation {
                // The list was reset while this page was in flight; the
                // reset already reinitialized the slice.
                debug!("dropping stale page append");
                return;
            }
            match result {
                Ok(page) => {
                    s.list.records.extend(page.data);
                    s.list.page_info = page.page_info;
                }
                Err(err) => {
                    warn!(%err, "records page append failed");
                    s.list.error = Some(err.to_string());
                }
            }
            s.list.is_loading_more = false;
        });
    }

    /// Cold reload of the list with the currently active filter.
    pub async fn refresh_records(&self) {
        let filter = self.read_state(|s| s.current_record_type_id);
        self.fetch_records_paginated(filter).await;
    }

    /// Record the filter used by subsequent fetches. Pure state write; does
    /// not trigger a fetch.
    pub fn set_current_record_type_filter(&self, record_type_id: Option<RecordTypeId>) {
        self.with_state(|s| s.current_record_type_id = record_type_id);
    }
}
