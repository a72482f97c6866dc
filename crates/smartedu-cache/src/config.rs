//! Per-entry cache policy.

use std::time::Duration;

use smartedu_config::QueryConfig;

/// Freshness, retention and refetch flags recorded on a cache entry.
///
/// # Defaults
///
/// - `stale_time`: 5 minutes
/// - `gc_time`: 10 minutes
/// - `refetch_on_window_focus` / `refetch_on_reconnect`: `true`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryOptions {
    /// How long data is served without a network call.
    pub stale_time: Duration,

    /// How long an unused entry is kept before eviction.
    pub gc_time: Duration,

    /// Refetch when the user returns to the client, if stale.
    pub refetch_on_window_focus: bool,

    /// Refetch when connectivity is restored, if stale.
    pub refetch_on_reconnect: bool,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self::from(&QueryConfig::default())
    }
}

impl From<&QueryConfig> for EntryOptions {
    fn from(config: &QueryConfig) -> Self {
        Self {
            stale_time: config.stale_time,
            gc_time: config.gc_time,
            refetch_on_window_focus: true,
            refetch_on_reconnect: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = EntryOptions::default();
        assert_eq!(options.stale_time, Duration::from_secs(300));
        assert_eq!(options.gc_time, Duration::from_secs(600));
        assert!(options.refetch_on_window_focus);
        assert!(options.refetch_on_reconnect);
    }
}
