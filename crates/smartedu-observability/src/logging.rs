use smartedu_config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const SMARTEDU_TARGETS: &[&str] = &[
    "smartedu",
    "smartedu_api",
    "smartedu_auth",
    "smartedu_cache",
    "smartedu_observability",
    "client_log",
];

/// Builds the filter for SmartEdu crates at `level`, with noisy dependencies at warn.
///
/// `RUST_LOG` takes precedence when set.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut directives: Vec<String> = SMARTEDU_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect();
        directives.extend(["hyper=warn", "reqwest=warn", "h2=warn"].map(String::from));
        EnvFilter::new(directives.join(","))
    })
}

/// Initialize console logging for the CLI.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` (default: "info"), applied to SmartEdu crates
/// - **Filtering**: HTTP client internals filtered to warn
/// - **Format**: Compact, with targets and ANSI colors
///
/// Safe to call more than once; later calls are ignored.
pub fn init_basic_console_logging(config: &LoggingConfig) {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(&config.level));

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

/// Initialize console logging plus a daily rolling JSON log file under `config.log_dir`.
///
/// Used by the log sink so forwarded client logs are persisted. The returned
/// guard flushes the file writer on drop; keep it alive for the process lifetime.
pub fn init_file_logging(config: &LoggingConfig) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "smartedu-client.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(&config.level));

    let file_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(env_filter(&config.level));

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LoggingConfig::default();
        init_basic_console_logging(&config);
        init_basic_console_logging(&config);
    }
}
