//! # SmartEdu Config
//!
//! Configuration types for the SmartEdu client.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`api`]: Backend origin, request timeout, log forwarding endpoint
//! - [`query`]: Query cache freshness, retention and retry defaults
//! - [`logging`]: Console log level and optional log directory
//!
//! Every config type also has a `from_lookup` constructor taking a key lookup
//! closure, which `from_env` delegates to.
//!
//! # Example
//!
//! ```ignore
//! use smartedu_config::{ApiConfig, QueryConfig};
//!
//! dotenvy::dotenv().ok();
//! let api_config = ApiConfig::from_env();
//! let query_config = QueryConfig::from_env();
//! ```

pub mod api;
pub mod logging;
pub mod query;

// Re-export commonly used types at crate root
pub use api::{ApiConfig, ConfigError};
pub use logging::LoggingConfig;
pub use query::QueryConfig;

/// Parses a numeric variable, falling back to `default` when absent or malformed.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
