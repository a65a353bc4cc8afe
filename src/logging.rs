use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// The level comes from `RUST_LOG` (default `info`). Output goes to stderr
/// so that stdout stays free for the JSON report.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Subscriber for tests: debug level, captured by the test harness. Safe to
/// call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
