//! `siteline-store` — the record list/detail synchronization layer.
//!
//! One store instance owns four cooperating slices of client state:
//!
//! - a cursor-paginated **list** of records for the active type filter,
//! - a bounded, cancel-safe **search** surface decoupled from the list,
//! - a keyed **detail cache** of per-record aggregate views filled by a
//!   concurrent three-way fan-out,
//! - the legacy unpaginated **collection** (`records`/`current_record`)
//!   that mutations patch optimistically.
//!
//! The legacy "site" naming (`sites`, `current_site`, `site_templates` and
//! the `*_site` actions) is a delegation layer over the same canonical
//! state, so both namings always observe the same data.
//!
//! All network access goes through the [`siteline_client::RecordRepository`]
//! contract; the store owns orchestration and local state only. Actions are
//! async and surface repository failures as strings on the affected slice;
//! they never return errors.

pub mod config;
pub mod state;
pub mod store;

mod detail;
mod list;
mod mutations;
mod search;
mod sites;

pub use config::StoreConfig;
pub use state::{RecordDetailState, RecordSearchState, RecordsListState};
pub use store::RecordsStore;
