//! Tracing subscriber setup for the CLI binary.

use tracing_subscriber::{prelude::*, util::SubscriberInitExt, EnvFilter};

/// Initializes the global subscriber. Diagnostics go to stderr so the
/// generated package can flow through stdout untouched; `RUST_LOG`
/// overrides the default `info` filter.
pub fn init() {
    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .init();
}
