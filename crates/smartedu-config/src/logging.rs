//! Logging configuration.
//!
//! - `LOG_LEVEL`: Console level for SmartEdu crates (default: `info`)
//! - `LOG_DIR`: Directory for rolling log files written by the log sink (default: `storage/logs`)

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            log_dir: "storage/logs".into(),
        }
    }
}

impl LoggingConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            level: lookup("LOG_LEVEL")
                .map(|l| l.trim().to_lowercase())
                .filter(|l| matches!(l.as_str(), "trace" | "debug" | "info" | "warn" | "error"))
                .unwrap_or(defaults.level),
            log_dir: lookup("LOG_DIR")
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(defaults.log_dir),
        }
    }
}
