//! Cursor pagination primitive shared by all list fetches.

use serde::{Deserialize, Serialize};

/// An opaque pagination token marking a position in an ordered result set.
///
/// Backend-specific; the store never parses or modifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Position information for one fetched page.
///
/// Invariant: `end_cursor` is present whenever the page is non-empty, and
/// `has_next_page == false` means no further forward fetch is attempted
/// regardless of caller behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
}

/// Generic paginated-result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Direction of a page fetch relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    Forward,
    Backward,
}

/// One page request: limit, optional cursor, direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: usize,
    pub cursor: Option<Cursor>,
    pub direction: PageDirection,
}

impl PageRequest {
    /// First page: no cursor, forward.
    pub fn first(limit: usize) -> Self {
        Self {
            limit,
            cursor: None,
            direction: PageDirection::Forward,
        }
    }

    /// Page following `cursor`.
    pub fn after(cursor: Cursor, limit: usize) -> Self {
        Self {
            limit,
            cursor: Some(cursor),
            direction: PageDirection::Forward,
        }
    }
}
