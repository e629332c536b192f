//! Structured logging configuration.
//!
//! Sets up the `tracing` subscriber with a configurable level and either
//! plain text or JSON output.

use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Tracing configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Initialize tracing with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set. Logs go to stderr so
/// that stdout stays free for command output.
///
/// # Panics
///
/// Panics if a tracing subscriber has already been initialized in this process.
pub fn init_tracing(config: &TracingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);

        Registry::default().with(env_filter).with(fmt_layer).init();
    }

    tracing::debug!(
        "Tracing initialized: level={}, json={}",
        config.level,
        config.json
    );
}

/// Span helpers.
pub mod spans {
    use tracing::{info_span, Span};

    /// Create a span covering construction of analysis settings.
    ///
    /// `source` is `"file"` or `"content"`.
    #[must_use]
    pub fn settings_span(source: &str, format: &str) -> Span {
        info_span!(
            "analysis_settings",
            source = %source,
            format = %format,
        )
    }
}
