use std::time::Duration;

use smartedu_cache::EntryOptions;
use smartedu_config::QueryConfig;

/// Per-query behavior.
///
/// # Defaults
///
/// Taken from [`QueryConfig`]: 5 minute freshness, 10 minute retention, one
/// retry with a 1 second base delay, refetch on focus and reconnect, enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub stale_time: Duration,
    pub gc_time: Duration,
    /// Additional attempts after a retryable failure.
    pub retry: u32,
    /// Delay before the first retry; doubles per attempt, capped at 30 seconds.
    pub retry_delay: Duration,
    pub refetch_on_window_focus: bool,
    pub refetch_on_reconnect: bool,
    /// A disabled query never touches the network and reports `Disabled`.
    pub enabled: bool,
}

const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

impl Default for QueryOptions {
    fn default() -> Self {
        Self::from(&QueryConfig::default())
    }
}

impl From<&QueryConfig> for QueryOptions {
    fn from(config: &QueryConfig) -> Self {
        Self {
            stale_time: config.stale_time,
            gc_time: config.gc_time,
            retry: config.retry,
            retry_delay: Duration::from_secs(1),
            refetch_on_window_focus: true,
            refetch_on_reconnect: true,
            enabled: true,
        }
    }
}

impl QueryOptions {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self.gc_time = self.gc_time.max(stale_time);
        self
    }

    pub fn retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn refetch_on_window_focus(mut self, refetch: bool) -> Self {
        self.refetch_on_window_focus = refetch;
        self
    }

    pub fn refetch_on_reconnect(mut self, refetch: bool) -> Self {
        self.refetch_on_reconnect = refetch;
        self
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.retry_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(MAX_RETRY_DELAY)
    }

    pub(crate) fn entry_options(&self) -> EntryOptions {
        EntryOptions {
            stale_time: self.stale_time,
            gc_time: self.gc_time,
            refetch_on_window_focus: self.refetch_on_window_focus,
            refetch_on_reconnect: self.refetch_on_reconnect,
        }
    }
}
