//! Tracing subscriber setup for the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Set `PLAYGROUND_TRACE_JSON` to get JSON log lines
pub const JSON_LOG_ENV: &str = "PLAYGROUND_TRACE_JSON";

/// Filter used when `RUST_LOG` is not set
pub fn fallback_filter(level: &str) -> String {
    format!("trace_cli={level},source_resolver={level}")
}

/// Install the global subscriber, logging to stderr
pub fn initialize_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter(level).into());

    if std::env::var(JSON_LOG_ENV).is_ok() {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
