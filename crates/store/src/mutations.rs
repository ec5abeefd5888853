//! Collection loads and mutations.
//!
//! These act on the legacy unpaginated collection (`records`,
//! `current_record`, `record_templates`): loads replace it wholesale,
//! mutations apply minimal optimistic patches instead of refetching. The
//! paginated list slice is deliberately left untouched by mutations; the
//! two views are reconciled by the next paginated reload.

use tracing::{debug, warn};

use siteline_client::{RecordRepository, RecordsQuery};
use siteline_core::{NewRecord, PageRequest, RecordId, RecordPatch, RecordTypeId, RecordWithType};

use crate::store::RecordsStore;

/// The list entry keeps its resolved type when the server response omits
/// the join; everything else comes from the server.
fn merge_updated(existing: &RecordWithType, updated: &RecordWithType) -> RecordWithType {
    RecordWithType {
        record: updated.record.clone(),
        record_type: updated
            .record_type
            .clone()
            .or_else(|| existing.record_type.clone()),
    }
}

impl<R> RecordsStore<R>
where
    R: RecordRepository,
{
    /// Load all record types.
    pub async fn fetch_record_types(&self) {
        self.with_state(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let result = self.repo.fetch_record_types().await;
        self.with_state(|s| {
            match result {
                Ok(types) => s.record_types = types,
                Err(err) => {
                    warn!(%err, "record types load failed");
                    s.error = Some(err.to_string());
                }
            }
            s.is_loading = false;
        });
    }

    /// Load the unpaginated collection in network order.
    ///
    /// The repository only exposes paginated fetches, so this issues one
    /// forward page at the configured collection limit and keeps the data
    /// as returned; no client-side sorting until a create re-sorts it.
    pub async fn fetch_records(&self, record_type_id: Option<RecordTypeId>) {
        self.with_state(|s| {
            s.is_loading = true;
            s.error = None;
        });

        debug!(filter = ?record_type_id, "loading record collection");
        let query = RecordsQuery::list(
            record_type_id,
            PageRequest::first(self.config.collection_limit),
        );
        let result = self.repo.fetch_records_paginated(query).await;

        self.with_state(|s| {
            match result {
                Ok(page) => s.records = page.data,
                Err(err) => {
                    warn!(%err, "record collection load failed");
                    s.error = Some(err.to_string());
                }
            }
            s.is_loading = false;
        });
    }

    /// Load one record into `current_record`.
    pub async fn fetch_record_by_id(&self, id: RecordId) {
        self.with_state(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let result = self.repo.fetch_record_with_type(id).await;
        self.with_state(|s| {
            match result {
                Ok(record) => s.current_record = Some(record),
                Err(err) => {
                    warn!(%id, %err, "record load failed");
                    s.error = Some(err.to_string());
                }
            }
            s.is_loading = false;
        });
    }

    /// Load the templates slice for `id`. Best-effort: a failure leaves the
    /// slice empty rather than surfacing an error.
    pub async fn fetch_record_templates(&self, id: RecordId) {
        let result = self.repo.fetch_record_templates(id).await;
        self.with_state(|s| match result {
            Ok(templates) => s.record_templates = templates,
            Err(err) => {
                warn!(%id, %err, "templates load failed; showing none");
                s.record_templates = Vec::new();
            }
        });
    }

    /// Create a record and insert it locally, re-sorting the whole
    /// collection by name.
    pub async fn create_record(&self, input: NewRecord) -> Option<RecordWithType> {
        self.with_state(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.repo.create_record(input).await {
            Ok(created) => {
                self.with_state(|s| {
                    s.records.push(created.clone());
                    s.records.sort_by(|a, b| a.record.name.cmp(&b.record.name));
                    s.is_loading = false;
                });
                Some(created)
            }
            Err(err) => {
                warn!(%err, "record create failed");
                self.with_state(|s| {
                    s.error = Some(err.to_string());
                    s.is_loading = false;
                });
                None
            }
        }
    }

    /// Update a record and patch the local collection.
    ///
    /// The collection entry is a shallow merge (server fields over the
    /// existing entry); `current_record`, when affected, is replaced with
    /// the fresh object outright.
    pub async fn update_record(&self, id: RecordId, patch: RecordPatch) -> Option<RecordWithType> {
        self.with_state(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.repo.update_record(id, patch).await {
            Ok(updated) => {
                self.with_state(|s| {
                    for entry in &mut s.records {
                        if entry.id() == id {
                            *entry = merge_updated(entry, &updated);
                        }
                    }
                    if s.current_record.as_ref().is_some_and(|c| c.id() == id) {
                        s.current_record = Some(updated.clone());
                    }
                    s.is_loading = false;
                });
                Some(updated)
            }
            Err(err) => {
                warn!(%id, %err, "record update failed");
                self.with_state(|s| {
                    s.error = Some(err.to_string());
                    s.is_loading = false;
                });
                None
            }
        }
    }

    /// Archive a record and drop it from the local collection.
    ///
    /// `current_record` is always cleared, whether or not it was the
    /// archived one: a stale "current" reference to a removed entity is
    /// worse than an extra reload.
    pub async fn archive_record(&self, id: RecordId) -> bool {
        self.remove_locally(id, Removal::Archive).await
    }

    /// Delete a record and drop it from the local collection. Clears
    /// `current_record` like `archive_record`.
    pub async fn delete_record(&self, id: RecordId) -> bool {
        self.remove_locally(id, Removal::Delete).await
    }

    async fn remove_locally(&self, id: RecordId, removal: Removal) -> bool {
        self.with_state(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let result = match removal {
            Removal::Archive => self.repo.archive_record(id).await,
            Removal::Delete => self.repo.delete_record(id).await,
        };

        match result {
            Ok(()) => {
                self.with_state(|s| {
                    s.records.retain(|r| r.id() != id);
                    s.current_record = None;
                    s.is_loading = false;
                });
                true
            }
            Err(err) => {
                warn!(%id, %err, "record removal failed");
                self.with_state(|s| {
                    s.error = Some(err.to_string());
                    s.is_loading = false;
                });
                false
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Removal {
    Archive,
    Delete,
}
