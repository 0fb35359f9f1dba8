use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize tracing with JSON output for structured logging.
/// Respects RUST_LOG; defaults to warn so normal CLI output stays clean.
pub fn init_telemetry() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    Ok(())
}

/// Generate a correlation ID for linking log lines of one invocation
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common computation attributes
pub fn create_compute_span(
    operation: &str,
    input: Option<&str>,
    correlation_id: Option<&str>,
) -> tracing::Span {
    tracing::info_span!(
        "metrics_computation",
        operation = operation,
        input.path = input,
        correlation.id = correlation_id,
    )
}
