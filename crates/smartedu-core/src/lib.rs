//! # SmartEdu Core
//!
//! Core types, errors, and utilities shared by every SmartEdu client crate.
//!
//! This crate provides foundational types used throughout the client:
//!
//! - [`envelope`]: The `{ success, data, message, statusCode }` wrapper every backend
//!   response uses
//! - [`errors`]: The typed [`ApiError`] raised by the API client and surfaced by queries
//! - [`pagination`]: Pagination metadata and request parameters for list endpoints
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use smartedu_core::errors::ApiError;
//! use smartedu_core::pagination::PaginationParams;
//!
//! let error = ApiError::from_status(401, None);
//! assert_eq!(error.user_message(), "Your session has expired. Please login again.");
//!
//! let params = PaginationParams::default();
//! let limit = params.limit();
//! ```

pub mod envelope;
pub mod errors;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use envelope::Envelope;
pub use errors::{ApiError, ApiErrorKind};
pub use pagination::{Paginated, PaginationMeta, PaginationParams};
