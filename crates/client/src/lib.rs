//! `siteline-client` — the record repository contract.
//!
//! The store consumes this contract and nothing else: no component above it
//! talks to the transport directly. The crate ships the [`RecordRepository`]
//! trait, its error model, and an in-memory implementation for tests and
//! local development. Transport implementations (HTTP, RPC) live outside
//! this workspace.

pub mod error;
pub mod memory;
pub mod repository;

pub use error::{ClientError, ClientResult};
pub use memory::InMemoryRepository;
pub use repository::{RecordRepository, RecordsQuery, SearchQuery};
