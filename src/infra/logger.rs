// src/infra/logger.rs — Structured logging with tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber. `MINDMATE_LOG` wins over `RUST_LOG`,
/// and `fallback` applies when neither is set.
pub fn init_logging(fallback: &str) {
    let filter = std::env::var("MINDMATE_LOG")
        .ok()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
