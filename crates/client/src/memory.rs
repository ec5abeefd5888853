//! In-memory repository for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use siteline_core::{
    Cursor, InspectionTemplate, NewRecord, PageDirection, PageInfo, Paginated, Record, RecordId,
    RecordPatch, RecordSearchHit, RecordType, RecordWithType, ReportSummary,
};

use crate::error::{ClientError, ClientResult};
use crate::repository::{RecordRepository, RecordsQuery, SearchQuery};

/// In-memory [`RecordRepository`] for tests/dev.
///
/// Records keep insertion ("network") order; cursors are opaque offset
/// tokens into the filtered sequence, so pages stay stable as long as the
/// underlying data does not change between fetches.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    record_types: Vec<RecordType>,
    records: Vec<Record>,
    reports: HashMap<RecordId, Vec<ReportSummary>>,
    templates: HashMap<RecordId, Vec<InspectionTemplate>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record type.
    pub fn seed_record_type(&self, record_type: RecordType) {
        if let Ok(mut inner) = self.inner.write() {
            inner.record_types.push(record_type);
        }
    }

    /// Seed a record (appended in network order).
    pub fn seed_record(&self, record: Record) {
        if let Ok(mut inner) = self.inner.write() {
            inner.records.push(record);
        }
    }

    /// Seed report summaries for a record.
    pub fn seed_reports(&self, id: RecordId, reports: Vec<ReportSummary>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.reports.insert(id, reports);
        }
    }

    /// Seed inspection templates for a record.
    pub fn seed_templates(&self, id: RecordId, templates: Vec<InspectionTemplate>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.templates.insert(id, templates);
        }
    }

    fn read(&self) -> ClientResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| ClientError::network("repository lock poisoned"))
    }

    fn write(&self) -> ClientResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| ClientError::network("repository lock poisoned"))
    }
}

impl Inner {
    fn resolve_type(&self, record: &Record) -> RecordWithType {
        let record_type = self
            .record_types
            .iter()
            .find(|t| t.id == record.record_type_id)
            .cloned();
        RecordWithType {
            record: record.clone(),
            record_type,
        }
    }

    /// Listable records for a query: live, optionally type-filtered,
    /// optionally name/address-matched, in insertion order.
    fn listable<'a>(
        &'a self,
        record_type_id: Option<siteline_core::RecordTypeId>,
        search: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        let needle = search.map(str::to_lowercase);
        self.records.iter().filter(move |r| {
            if r.archived {
                return false;
            }
            if let Some(type_id) = record_type_id {
                if r.record_type_id != type_id {
                    return false;
                }
            }
            match &needle {
                Some(q) => {
                    r.name.to_lowercase().contains(q)
                        || r.address
                            .as_deref()
                            .is_some_and(|a| a.to_lowercase().contains(q))
                }
                None => true,
            }
        })
    }
}

/// Offset cursors: `offset:<n>` where `n` is the index of the first item of
/// the next page within the filtered sequence. Opaque to callers.
fn encode_cursor(offset: usize) -> Cursor {
    Cursor::new(format!("offset:{offset}"))
}

fn decode_cursor(cursor: &Cursor) -> ClientResult<usize> {
    cursor
        .as_str()
        .strip_prefix("offset:")
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| ClientError::api(format!("invalid cursor: {}", cursor.as_str())))
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn fetch_record_types(&self) -> ClientResult<Vec<RecordType>> {
        Ok(self.read()?.record_types.clone())
    }

    async fn fetch_records_paginated(
        &self,
        query: RecordsQuery,
    ) -> ClientResult<Paginated<RecordWithType>> {
        if query.page.direction == PageDirection::Backward {
            return Err(ClientError::api("backward pagination not supported"));
        }

        let inner = self.read()?;
        let filtered: Vec<&Record> = inner
            .listable(query.record_type_id, query.search.as_deref())
            .collect();

        let start = match &query.page.cursor {
            Some(cursor) => decode_cursor(cursor)?,
            None => 0,
        };
        let page: Vec<RecordWithType> = filtered
            .iter()
            .skip(start)
            .take(query.page.limit)
            .map(|r| inner.resolve_type(r))
            .collect();

        let end = start + page.len();
        let page_info = PageInfo {
            has_next_page: end < filtered.len(),
            has_previous_page: start > 0,
            start_cursor: (!page.is_empty()).then(|| encode_cursor(start)),
            end_cursor: (!page.is_empty()).then(|| encode_cursor(end)),
        };

        Ok(Paginated {
            data: page,
            page_info,
        })
    }

    async fn search_records(&self, query: SearchQuery) -> ClientResult<Vec<RecordSearchHit>> {
        let inner = self.read()?;
        Ok(inner
            .listable(query.record_type_id, Some(query.query.as_str()))
            .take(query.limit)
            .map(|r| RecordSearchHit {
                id: r.id,
                name: r.name.clone(),
                address: r.address.clone(),
                record_type_id: r.record_type_id,
            })
            .collect())
    }

    async fn fetch_record_with_type(&self, id: RecordId) -> ClientResult<RecordWithType> {
        let inner = self.read()?;
        inner
            .records
            .iter()
            .find(|r| r.id == id)
            .map(|r| inner.resolve_type(r))
            .ok_or(ClientError::NotFound)
    }

    async fn fetch_record_reports_summary(
        &self,
        id: RecordId,
    ) -> ClientResult<Vec<ReportSummary>> {
        Ok(self.read()?.reports.get(&id).cloned().unwrap_or_default())
    }

    async fn fetch_record_templates(
        &self,
        id: RecordId,
    ) -> ClientResult<Vec<InspectionTemplate>> {
        Ok(self.read()?.templates.get(&id).cloned().unwrap_or_default())
    }

    async fn create_record(&self, input: NewRecord) -> ClientResult<RecordWithType> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ClientError::api("record name cannot be empty"));
        }

        let now = Utc::now();
        let record = Record {
            id: RecordId::new(),
            record_type_id: input.record_type_id,
            name: name.to_string(),
            address: input.address,
            archived: false,
            created_at: now,
            updated_at: now,
        };

        let mut inner = self.write()?;
        inner.records.push(record.clone());
        Ok(inner.resolve_type(&record))
    }

    async fn update_record(
        &self,
        id: RecordId,
        patch: RecordPatch,
    ) -> ClientResult<RecordWithType> {
        let mut inner = self.write()?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ClientError::NotFound)?;

        if let Some(name) = patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ClientError::api("record name cannot be empty"));
            }
            record.name = name.to_string();
        }
        if let Some(address) = patch.address {
            record.address = Some(address);
        }
        if let Some(type_id) = patch.record_type_id {
            record.record_type_id = type_id;
        }
        record.updated_at = Utc::now();

        let record = record.clone();
        Ok(inner.resolve_type(&record))
    }

    async fn archive_record(&self, id: RecordId) -> ClientResult<()> {
        let mut inner = self.write()?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ClientError::NotFound)?;
        record.archived = true;
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_record(&self, id: RecordId) -> ClientResult<()> {
        let mut inner = self.write()?;
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        if inner.records.len() == before {
            return Err(ClientError::NotFound);
        }
        inner.reports.remove(&id);
        inner.templates.remove(&id);
        Ok(())
    }
}
