//! Query cache defaults.
//!
//! # Environment Variables
//!
//! - `QUERY_STALE_TIME_SECONDS`: Freshness window (default: `300`, 5 minutes)
//! - `QUERY_GC_TIME_SECONDS`: Retention window for unused entries (default: `600`, 10 minutes)
//! - `QUERY_RETRY`: Extra attempts after a failed read (default: `1`)

use std::time::Duration;

use crate::parse_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    /// How long fetched data is served without a network call.
    pub stale_time: Duration,

    /// How long an unused entry stays in memory.
    pub gc_time: Duration,

    /// Additional attempts after a failed read.
    pub retry: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(300),
            gc_time: Duration::from_secs(600),
            retry: 1,
        }
    }
}

impl QueryConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let stale_time = parse_or(
            &lookup,
            "QUERY_STALE_TIME_SECONDS",
            defaults.stale_time.as_secs(),
        );
        let gc_time = parse_or(&lookup, "QUERY_GC_TIME_SECONDS", defaults.gc_time.as_secs());

        Self {
            stale_time: Duration::from_secs(stale_time),
            // retention never shorter than freshness
            gc_time: Duration::from_secs(gc_time.max(stale_time)),
            retry: parse_or(&lookup, "QUERY_RETRY", defaults.retry).min(5),
        }
    }
}
