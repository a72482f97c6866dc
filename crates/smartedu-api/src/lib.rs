//! # SmartEdu API
//!
//! Typed client for the SmartEdu REST backend.
//!
//! Every endpoint answers with the `{ success, data?, message?, statusCode? }`
//! envelope. [`ApiClient`] unwraps it and turns failures into
//! [`ApiError`](smartedu_core::ApiError):
//!
//! - non-2xx status or `success: false`: the status (or the envelope's
//!   `statusCode` inside a 2xx response) and the raw envelope
//! - no response at all: a network error with status 0
//! - no configured backend: a configuration error, no request is sent
//!
//! The client never retries. Retrying is a decision of the query layer.
//!
//! # Example
//!
//! ```ignore
//! use smartedu_api::ApiClient;
//! use smartedu_config::ApiConfig;
//!
//! let api = ApiClient::new(ApiConfig::from_env()).with_token("access-token");
//! let subjects: Vec<Subject> = api.get_data("/director/dashboard/subjects").await?;
//! ```

pub mod client;
pub mod multipart;

pub use client::{ApiClient, require_data};
pub use multipart::{FileUpload, MultipartBody};
