//! Detail cache: per-record aggregate views.

use tracing::{debug, warn};

use siteline_client::RecordRepository;
use siteline_core::RecordId;

use crate::state::RecordDetailState;
use crate::store::RecordsStore;

enum FetchPlan {
    /// Populated, error-free entry: serve from cache.
    Hit,
    /// A fan-out for this key is already running; let it finish.
    InFlight,
    /// Placeholder written; caller performs the fan-out.
    Fetch,
}

impl<R> RecordsStore<R>
where
    R: RecordRepository,
{
    /// Load the aggregate detail view for `id`.
    ///
    /// `current_record_id` is set unconditionally (it drives which detail
    /// screen is active). A populated, error-free cache entry suppresses the
    /// fetch entirely; staleness is accepted, and `clear_record_detail` plus
    /// a fresh fetch is the only refresh path. Otherwise the record, its
    /// report summaries, and its templates are fetched concurrently and the
    /// entry is finalized only after all three settle: the record itself is
    /// required, the summaries and templates are best-effort and collapse to
    /// empty on failure. A failed entry is refetched on the next call.
    pub async fn fetch_record_detail(&self, id: RecordId) {
        let plan = self.with_state(|s| {
            s.current_record_id = Some(id);
            match s.detail_cache.get(&id) {
                Some(entry) if entry.is_loading => FetchPlan::InFlight,
                Some(entry) if entry.is_hit() => FetchPlan::Hit,
                _ => {
                    s.detail_cache.insert(id, RecordDetailState::loading());
                    s.track_detail_insertion(id);
                    FetchPlan::Fetch
                }
            }
        });

        match plan {
            FetchPlan::Hit => {
                debug!(%id, "record detail cache hit");
                return;
            }
            FetchPlan::InFlight => {
                debug!(%id, "record detail fetch already in flight");
                return;
            }
            FetchPlan::Fetch => {}
        }

        debug!(%id, "loading record detail");
        let (record, reports, templates) = tokio::join!(
            self.repo.fetch_record_with_type(id),
            self.repo.fetch_record_reports_summary(id),
            self.repo.fetch_record_templates(id),
        );

        let entry = match record {
            Ok(record) => RecordDetailState {
                record: Some(record),
                reports: reports.unwrap_or_else(|err| {
                    warn!(%id, %err, "reports summary failed; showing none");
                    Vec::new()
                }),
                templates: templates.unwrap_or_else(|err| {
                    warn!(%id, %err, "templates fetch failed; showing none");
                    Vec::new()
                }),
                is_loading: false,
                error: None,
            },
            Err(err) => {
                warn!(%id, %err, "record detail load failed");
                RecordDetailState {
                    error: Some(err.to_string()),
                    ..RecordDetailState::default()
                }
            }
        };

        let cap = self.config.detail_cache_cap;
        self.with_state(|s| {
            s.detail_cache.insert(id, entry);
            if let Some(cap) = cap {
                s.evict_detail_overflow(cap);
            }
        });
    }

    /// Deactivate the detail screen.
    ///
    /// Resets only `current_record_id`; cache entries stay. A later fetch
    /// for the same record is still a cache hit.
    pub fn clear_record_detail(&self) {
        self.with_state(|s| s.current_record_id = None);
    }
}
