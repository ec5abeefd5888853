use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{RecordId, RecordTypeId, ReportId, TemplateId};

/// A record: the primary inspected entity (property/asset).
///
/// Called "site" in the legacy naming scheme; the store exposes both names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub record_type_id: RecordTypeId,
    pub name: String,
    pub address: Option<String>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named classification of records.
///
/// Independent lifecycle from [`Record`]: archiving a type does not cascade
/// to its records in this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    pub id: RecordTypeId,
    pub name: String,
    pub plural_name: String,
    pub icon: String,
    pub color: String,
    pub is_default: bool,
}

/// A record joined with its (optional) record type.
///
/// The type is optional because list endpoints may omit the join; readers
/// must not assume it is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordWithType {
    pub record: Record,
    pub record_type: Option<RecordType>,
}

impl RecordWithType {
    pub fn id(&self) -> RecordId {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Lifecycle status of an inspection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    InProgress,
    Completed,
}

/// Compact report view used on the record detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: ReportId,
    pub title: String,
    pub status: ReportStatus,
    pub updated_at: DateTime<Utc>,
}

/// An inspection template assignable to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionTemplate {
    pub id: TemplateId,
    pub name: String,
    pub version: u32,
}

/// Input for creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub record_type_id: RecordTypeId,
    pub name: String,
    pub address: Option<String>,
}

/// Partial update for a record; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub record_type_id: Option<RecordTypeId>,
}

/// A bounded search suggestion.
///
/// Deliberately thinner than [`RecordWithType`]: search is a suggestions
/// surface, not a paginated browse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSearchHit {
    pub id: RecordId,
    pub name: String,
    pub address: Option<String>,
    pub record_type_id: RecordTypeId,
}
