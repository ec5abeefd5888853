//! Shared test fixtures: seeded repositories and an instrumented wrapper.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use siteline_client::{
    ClientError, ClientResult, InMemoryRepository, RecordRepository, RecordsQuery, SearchQuery,
};
use siteline_core::{
    InspectionTemplate, NewRecord, Paginated, Record, RecordId, RecordPatch, RecordSearchHit,
    RecordType, RecordTypeId, RecordWithType, ReportId, ReportStatus, ReportSummary, TemplateId,
};
use siteline_store::RecordsStore;

pub type TestStore = RecordsStore<Arc<RecordingRepository>>;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

pub fn record_type(name: &str) -> RecordType {
    RecordType {
        id: RecordTypeId::new(),
        name: name.to_string(),
        plural_name: format!("{name}s"),
        icon: "building".to_string(),
        color: "#2d6cdf".to_string(),
        is_default: false,
    }
}

pub fn record(name: &str, type_id: RecordTypeId) -> Record {
    let now = Utc::now();
    Record {
        id: RecordId::new(),
        record_type_id: type_id,
        name: name.to_string(),
        address: Some(format!("{name} road 7")),
        archived: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn report(title: &str) -> ReportSummary {
    ReportSummary {
        id: ReportId::new(),
        title: title.to_string(),
        status: ReportStatus::Draft,
        updated_at: Utc::now(),
    }
}

pub fn template(name: &str) -> InspectionTemplate {
    InspectionTemplate {
        id: TemplateId::new(),
        name: name.to_string(),
        version: 1,
    }
}

/// Per-method call counters.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub fetch_record_types: AtomicUsize,
    pub fetch_records_paginated: AtomicUsize,
    pub search_records: AtomicUsize,
    pub fetch_record_with_type: AtomicUsize,
    pub fetch_record_reports_summary: AtomicUsize,
    pub fetch_record_templates: AtomicUsize,
    pub create_record: AtomicUsize,
    pub update_record: AtomicUsize,
    pub archive_record: AtomicUsize,
    pub delete_record: AtomicUsize,
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

pub fn loaded(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// [`InMemoryRepository`] wrapper that counts calls, captures list queries,
/// and injects failures or delays per method.
#[derive(Debug)]
pub struct RecordingRepository {
    inner: InMemoryRepository,
    pub counts: CallCounts,
    pub list_queries: Mutex<Vec<RecordsQuery>>,
    failures: Mutex<HashMap<&'static str, ClientError>>,
    delays: Mutex<HashMap<&'static str, Duration>>,
    search_delays: Mutex<HashMap<String, Duration>>,
    paginated_delays: Mutex<HashMap<Option<RecordTypeId>, Duration>>,
}

impl RecordingRepository {
    pub fn new(inner: InMemoryRepository) -> Arc<Self> {
        Arc::new(Self {
            inner,
            counts: CallCounts::default(),
            list_queries: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            search_delays: Mutex::new(HashMap::new()),
            paginated_delays: Mutex::new(HashMap::new()),
        })
    }

    pub fn inner(&self) -> &InMemoryRepository {
        &self.inner
    }

    /// Fail every subsequent call of `method` until cleared.
    pub fn fail(&self, method: &'static str, err: ClientError) {
        self.failures.lock().unwrap().insert(method, err);
    }

    pub fn clear_fail(&self, method: &'static str) {
        self.failures.lock().unwrap().remove(method);
    }

    /// Delay every subsequent call of `method`.
    pub fn delay(&self, method: &'static str, delay: Duration) {
        self.delays.lock().unwrap().insert(method, delay);
    }

    /// Delay search calls carrying exactly this query string.
    pub fn delay_search_for(&self, query: &str, delay: Duration) {
        self.search_delays
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
    }

    /// Delay paginated list calls carrying exactly this type filter.
    pub fn delay_paginated_for(&self, filter: Option<RecordTypeId>, delay: Duration) {
        self.paginated_delays.lock().unwrap().insert(filter, delay);
    }

    async fn gate(&self, method: &'static str, extra_delay: Option<Duration>) -> ClientResult<()> {
        let delay = self.delays.lock().unwrap().get(method).copied();
        if let Some(delay) = delay.or(extra_delay) {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.failures.lock().unwrap().get(method) {
            return Err(err.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl RecordRepository for RecordingRepository {
    async fn fetch_record_types(&self) -> ClientResult<Vec<RecordType>> {
        bump(&self.counts.fetch_record_types);
        self.gate("fetch_record_types", None).await?;
        self.inner.fetch_record_types().await
    }

    async fn fetch_records_paginated(
        &self,
        query: RecordsQuery,
    ) -> ClientResult<Paginated<RecordWithType>> {
        bump(&self.counts.fetch_records_paginated);
        self.list_queries.lock().unwrap().push(query.clone());
        let extra = self
            .paginated_delays
            .lock()
            .unwrap()
            .get(&query.record_type_id)
            .copied();
        self.gate("fetch_records_paginated", extra).await?;
        self.inner.fetch_records_paginated(query).await
    }

    async fn search_records(&self, query: SearchQuery) -> ClientResult<Vec<RecordSearchHit>> {
        bump(&self.counts.search_records);
        let extra = self.search_delays.lock().unwrap().get(&query.query).copied();
        self.gate("search_records", extra).await?;
        self.inner.search_records(query).await
    }

    async fn fetch_record_with_type(&self, id: RecordId) -> ClientResult<RecordWithType> {
        bump(&self.counts.fetch_record_with_type);
        self.gate("fetch_record_with_type", None).await?;
        self.inner.fetch_record_with_type(id).await
    }

    async fn fetch_record_reports_summary(
        &self,
        id: RecordId,
    ) -> ClientResult<Vec<ReportSummary>> {
        bump(&self.counts.fetch_record_reports_summary);
        self.gate("fetch_record_reports_summary", None).await?;
        self.inner.fetch_record_reports_summary(id).await
    }

    async fn fetch_record_templates(
        &self,
        id: RecordId,
    ) -> ClientResult<Vec<InspectionTemplate>> {
        bump(&self.counts.fetch_record_templates);
        self.gate("fetch_record_templates", None).await?;
        self.inner.fetch_record_templates(id).await
    }

    async fn create_record(&self, input: NewRecord) -> ClientResult<RecordWithType> {
        bump(&self.counts.create_record);
        self.gate("create_record", None).await?;
        self.inner.create_record(input).await
    }

    async fn update_record(
        &self,
        id: RecordId,
        patch: RecordPatch,
    ) -> ClientResult<RecordWithType> {
        bump(&self.counts.update_record);
        self.gate("update_record", None).await?;
        self.inner.update_record(id, patch).await
    }

    async fn archive_record(&self, id: RecordId) -> ClientResult<()> {
        bump(&self.counts.archive_record);
        self.gate("archive_record", None).await?;
        self.inner.archive_record(id).await
    }

    async fn delete_record(&self, id: RecordId) -> ClientResult<()> {
        bump(&self.counts.delete_record);
        self.gate("delete_record", None).await?;
        self.inner.delete_record(id).await
    }
}

/// A seeded repository plus the ids it was seeded with.
pub struct Seeded {
    pub repo: Arc<RecordingRepository>,
    pub type_id: RecordTypeId,
    pub record_ids: Vec<RecordId>,
}

/// Seed one record type and the given record names, in network order.
pub fn seeded_repo(names: &[&str]) -> Seeded {
    let inner = InMemoryRepository::new();
    let rt = record_type("Property");
    let type_id = rt.id;
    inner.seed_record_type(rt);

    let mut record_ids = Vec::new();
    for name in names {
        let r = record(name, type_id);
        record_ids.push(r.id);
        inner.seed_record(r);
    }

    Seeded {
        repo: RecordingRepository::new(inner),
        type_id,
        record_ids,
    }
}

/// A default-config store over a seeded repository.
pub fn seeded_store(names: &[&str]) -> (TestStore, Seeded) {
    init_tracing();
    let seeded = seeded_repo(names);
    let store = RecordsStore::new(Arc::clone(&seeded.repo));
    (store, seeded)
}

/// Names of the unpaginated collection, in current order.
pub fn collection_names(store: &TestStore) -> Vec<String> {
    store
        .records()
        .iter()
        .map(|r| r.name().to_string())
        .collect()
}

/// Names of the paginated list, in current order.
pub fn list_names(store: &TestStore) -> Vec<String> {
    store
        .list()
        .records
        .iter()
        .map(|r| r.name().to_string())
        .collect()
}
