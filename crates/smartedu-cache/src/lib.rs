//! # SmartEdu Cache
//!
//! In-memory query cache shared by every query and mutation in the client.
//!
//! This crate provides:
//! - [`QueryKey`]: ordered `(domain, resource, parameters...)` cache keys with prefix matching
//! - [`QueryCache`]: the process-wide entry store with freshness and retention windows
//! - [`keys`]: key builders for every backend resource
//! - [`EntryOptions`]: per-entry freshness, retention and refetch flags
//!
//! # Example
//!
//! ```ignore
//! use smartedu_cache::{EntryOptions, Lookup, QueryCache, keys};
//!
//! let cache = QueryCache::new();
//! let key = keys::subjects::list();
//!
//! if let Lookup::Fresh(snapshot) = cache.lookup(&key) {
//!     // serve without a network call
//! }
//!
//! let ticket = cache.begin_fetch(&key, EntryOptions::default());
//! cache.complete_fetch(&ticket, serde_json::json!([]));
//!
//! // After a write, mark every subject entry stale
//! cache.invalidate_prefixes(&[keys::subjects::all()]);
//! ```

pub mod config;
pub mod keys;
pub mod query_key;
pub mod store;

pub use config::EntryOptions;
pub use keys::hash_filters;
pub use query_key::QueryKey;
pub use store::{CacheError, EntrySnapshot, EntryStatus, FetchTicket, Lookup, QueryCache};
