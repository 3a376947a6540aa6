//! Diagnostic tracing for the quiz binary.
//!
//! The quiz protocol (prompts, score line) owns stdout, so diagnostics are
//! written to stderr and stay out of the way of anyone piping answers in or
//! scores out.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber.
///
/// `RUST_LOG` picks the level; without it only warnings (closed input, read
/// failures) are shown. Use `RUST_LOG=quiz=debug` to see each answer and the
/// moment the deadline fires.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
        .init();
}
