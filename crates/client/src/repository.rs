//! Repository trait definitions.

use async_trait::async_trait;
use std::sync::Arc;

use siteline_core::{
    InspectionTemplate, NewRecord, PageRequest, Paginated, Record, RecordId, RecordPatch,
    RecordSearchHit, RecordType, RecordTypeId, RecordWithType, ReportSummary,
};

use crate::error::ClientResult;

/// Parameters for a paginated record list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsQuery {
    pub record_type_id: Option<RecordTypeId>,
    pub search: Option<String>,
    pub page: PageRequest,
}

impl RecordsQuery {
    /// Plain list query: optional type filter, no search term.
    pub fn list(record_type_id: Option<RecordTypeId>, page: PageRequest) -> Self {
        Self {
            record_type_id,
            search: None,
            page,
        }
    }
}

/// Parameters for a bounded record search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub record_type_id: Option<RecordTypeId>,
    pub limit: usize,
}

/// The record repository contract the store consumes.
///
/// Implementations own transport, authentication, and retries; the store
/// owns orchestration and local state. All fetch results are point-in-time
/// snapshots with no change notification.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn fetch_record_types(&self) -> ClientResult<Vec<RecordType>>;

    async fn fetch_records_paginated(
        &self,
        query: RecordsQuery,
    ) -> ClientResult<Paginated<RecordWithType>>;

    async fn search_records(&self, query: SearchQuery) -> ClientResult<Vec<RecordSearchHit>>;

    async fn fetch_record_with_type(&self, id: RecordId) -> ClientResult<RecordWithType>;

    async fn fetch_record_reports_summary(&self, id: RecordId)
        -> ClientResult<Vec<ReportSummary>>;

    async fn fetch_record_templates(&self, id: RecordId)
        -> ClientResult<Vec<InspectionTemplate>>;

    async fn create_record(&self, input: NewRecord) -> ClientResult<RecordWithType>;

    async fn update_record(&self, id: RecordId, patch: RecordPatch)
        -> ClientResult<RecordWithType>;

    async fn archive_record(&self, id: RecordId) -> ClientResult<()>;

    async fn delete_record(&self, id: RecordId) -> ClientResult<()>;
}

#[async_trait]
impl<R> RecordRepository for Arc<R>
where
    R: RecordRepository + ?Sized,
{
    async fn fetch_record_types(&self) -> ClientResult<Vec<RecordType>> {
        (**self).fetch_record_types().await
    }

    async fn fetch_records_paginated(
        &self,
        query: RecordsQuery,
    ) -> ClientResult<Paginated<RecordWithType>> {
        (**self).fetch_records_paginated(query).await
    }

    async fn search_records(&self, query: SearchQuery) -> ClientResult<Vec<RecordSearchHit>> {
        (**self).search_records(query).await
    }

    async fn fetch_record_with_type(&self, id: RecordId) -> ClientResult<RecordWithType> {
        (**self).fetch_record_with_type(id).await
    }

    async fn fetch_record_reports_summary(
        &self,
        id: RecordId,
    ) -> ClientResult<Vec<ReportSummary>> {
        (**self).fetch_record_reports_summary(id).await
    }

    async fn fetch_record_templates(
        &self,
        id: RecordId,
    ) -> ClientResult<Vec<InspectionTemplate>> {
        (**self).fetch_record_templates(id).await
    }

    async fn create_record(&self, input: NewRecord) -> ClientResult<RecordWithType> {
        (**self).create_record(input).await
    }

    async fn update_record(
        &self,
        id: RecordId,
        patch: RecordPatch,
    ) -> ClientResult<RecordWithType> {
        (**self).update_record(id, patch).await
    }

    async fn archive_record(&self, id: RecordId) -> ClientResult<()> {
        (**self).archive_record(id).await
    }

    async fn delete_record(&self, id: RecordId) -> ClientResult<()> {
        (**self).delete_record(id).await
    }
}

/// Join a record with its resolved type.
pub fn with_type(record: Record, record_type: Option<RecordType>) -> RecordWithType {
    RecordWithType {
        record,
        record_type,
    }
}
