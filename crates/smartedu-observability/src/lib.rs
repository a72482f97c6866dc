//! SmartEdu Observability Module
//!
//! Provides:
//! - Console logging for the CLI, and console plus rolling file logging for the log sink
//! - [`LogForwarder`]: best-effort forwarding of client log entries to a remote endpoint
//! - [`log_sink`]: the axum endpoint receiving those entries
//!
//! # Examples
//!
//! ```no_run
//! use smartedu_config::LoggingConfig;
//! use smartedu_observability::init_basic_console_logging;
//!
//! init_basic_console_logging(&LoggingConfig::from_env());
//! tracing::info!("ready");
//! ```

pub mod forwarder;
pub mod log_sink;
pub mod logging;

pub use forwarder::{LogEntry, LogForwarder, LogLevel};
pub use logging::{init_basic_console_logging, init_file_logging};
