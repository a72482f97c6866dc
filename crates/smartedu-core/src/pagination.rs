//! Pagination utilities for list endpoints.
//!
//! List endpoints take page-based parameters and answer with a [`PaginationMeta`]
//! block next to the items:
//!
//! - `page`: Page number (1-indexed, default: 1)
//! - `limit`: Items per page (1-100, default: 10)
//!
//! The metadata is always taken from the server response. The client never
//! computes `total_pages` or the `has_*` flags itself.
//!
//! # Example JSON Response
//!
//! ```json
//! {
//!   "data": [...],
//!   "meta": {
//!     "page": 2,
//!     "limit": 10,
//!     "total": 45,
//!     "totalPages": 5,
//!     "hasNext": true,
//!     "hasPrevious": true
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Metadata about a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of items across all pages
    pub total: u64,
    /// Number of pages
    pub total_pages: u32,
    /// Whether a page exists after this one
    pub has_next: bool,
    /// Whether a page exists before this one
    pub has_previous: bool,
}

impl PaginationMeta {
    /// Metadata for an empty first page.
    pub fn empty(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            total_pages: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

/// A page of items with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(alias = "items")]
    pub data: Vec<T>,
    #[serde(alias = "pagination")]
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Page-based query parameters.
///
/// # Limits
///
/// - `limit` is clamped to the range [1, 100]
/// - `page` is clamped to a minimum of 1
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Returns the effective page, never below 1.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the effective limit, clamped to [1, 100].
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Query string pairs for the request.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page().to_string()),
            ("limit", self.limit().to_string()),
        ]
    }
}
