//! CLI timing and latency profiling utilities.
//!
//! Uses `tracing` spans with automatic duration tracking via
//! `FmtSpan::CLOSE`: commands annotated with `#[instrument]` log their
//! execution time when the span closes and `--timing` is set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Initialize the tracing subscriber with optional timing output.
///
/// `verbose` enables debug-level logging; `timing` logs span close events
/// with their duration.
pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = if verbose {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::DEBUG.into())
            .from_env_lossy()
    } else if timing {
        // Span close events are logged at INFO level.
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    let span_events = if timing { FmtSpan::CLOSE } else { FmtSpan::NONE };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
