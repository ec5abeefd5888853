//! Legacy "site" naming surface.
//!
//! Records were called sites before the rename; old call sites still use
//! the site-named API. Every method here is a pure delegation to its
//! record-named counterpart and the accessors read the same canonical
//! fields, so both namings observe identical state at every instant.
//! No independent logic or storage lives here.

use siteline_core::{
    InspectionTemplate, NewRecord, RecordId, RecordPatch, RecordTypeId, RecordWithType,
};

use siteline_client::RecordRepository;

use crate::store::RecordsStore;

impl<R> RecordsStore<R>
where
    R: RecordRepository,
{
    pub async fn fetch_sites(&self, site_type_id: Option<RecordTypeId>) {
        self.fetch_records(site_type_id).await;
    }

    pub async fn fetch_sites_paginated(&self, site_type_id: Option<RecordTypeId>) {
        self.fetch_records_paginated(site_type_id).await;
    }

    pub async fn fetch_more_sites(&self) {
        self.fetch_more_records().await;
    }

    pub async fn fetch_site_by_id(&self, id: RecordId) {
        self.fetch_record_by_id(id).await;
    }

    pub async fn fetch_site_templates(&self, id: RecordId) {
        self.fetch_record_templates(id).await;
    }

    pub async fn search_sites(&self, query: &str, site_type_id: Option<RecordTypeId>) {
        self.search_records(query, site_type_id).await;
    }

    pub async fn create_site(&self, input: NewRecord) -> Option<RecordWithType> {
        self.create_record(input).await
    }

    pub async fn update_site(&self, id: RecordId, patch: RecordPatch) -> Option<RecordWithType> {
        self.update_record(id, patch).await
    }

    pub async fn archive_site(&self, id: RecordId) -> bool {
        self.archive_record(id).await
    }

    pub async fn delete_site(&self, id: RecordId) -> bool {
        self.delete_record(id).await
    }

    /// Alias of [`RecordsStore::records`].
    pub fn sites(&self) -> Vec<RecordWithType> {
        self.records()
    }

    /// Alias of [`RecordsStore::current_record`].
    pub fn current_site(&self) -> Option<RecordWithType> {
        self.current_record()
    }

    /// Alias of [`RecordsStore::record_templates`].
    pub fn site_templates(&self) -> Vec<InspectionTemplate> {
        self.record_templates()
    }
}
