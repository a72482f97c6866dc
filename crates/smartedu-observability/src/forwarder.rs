//! Best-effort forwarding of client log entries to a remote endpoint.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

/// One forwarded entry: `{ level, message, data? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Posts log entries to the configured endpoint in detached tasks.
///
/// Forwarding never fails from the caller's point of view: errors are logged
/// at debug and dropped. Without an endpoint every call is a no-op.
#[derive(Clone, Debug)]
pub struct LogForwarder {
    http: reqwest::Client,
    endpoint: Option<Arc<str>>,
}

impl LogForwarder {
    pub fn new(endpoint: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();

        Self {
            http,
            endpoint: endpoint.map(Arc::from),
        }
    }

    /// A forwarder that drops everything.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Sends `entry` in the background. Returns the task handle, if one was spawned.
    ///
    /// Must be called within a tokio runtime.
    pub fn forward(&self, entry: LogEntry) -> Option<JoinHandle<()>> {
        let endpoint = self.endpoint.clone()?;
        let http = self.http.clone();

        Some(tokio::spawn(async move {
            let result = http
                .post(endpoint.as_ref())
                .json(&entry)
                .send()
                .await
                .and_then(|response| response.error_for_status());

            match result {
                Ok(_) => {
                    counter!("client_logs_forwarded_total", "status" => "success").increment(1);
                }
                Err(e) => {
                    counter!("client_logs_forwarded_total", "status" => "failure").increment(1);
                    debug!(error = %e, "Failed to forward client log entry");
                }
            }
        }))
    }

    pub fn info(&self, message: impl Into<String>) -> Option<JoinHandle<()>> {
        self.forward(LogEntry::new(LogLevel::Info, message))
    }

    pub fn warn(&self, message: impl Into<String>) -> Option<JoinHandle<()>> {
        self.forward(LogEntry::new(LogLevel::Warn, message))
    }

    pub fn error(&self, message: impl Into<String>, data: Option<Value>) -> Option<JoinHandle<()>> {
        let entry = LogEntry::new(LogLevel::Error, message);
        self.forward(match data {
            Some(data) => entry.with_data(data),
            None => entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_wire_format() {
        let entry = LogEntry::new(LogLevel::Warn, "slow response").with_data(json!({"ms": 900}));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"level": "warn", "message": "slow response", "data": {"ms": 900}})
        );
    }

    #[test]
    fn test_warning_alias() {
        let entry: LogEntry =
            serde_json::from_value(json!({"level": "warning", "message": "m"})).unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert!(entry.data.is_none());
    }

    #[tokio::test]
    async fn test_disabled_forwarder_spawns_nothing() {
        let forwarder = LogForwarder::disabled();
        assert!(!forwarder.is_enabled());
        assert!(forwarder.info("hello").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_swallowed() {
        let forwarder = LogForwarder::new(Some("http://127.0.0.1:1/api/log".into()));
        let handle = forwarder.error("boom", None).unwrap();
        assert!(handle.await.is_ok());
    }
}
