use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

// `RUST_LOG` wins over the configured filter; with neither, only warnings.
fn env_filter(filter: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a fmt subscriber writing through the test harness so output is
/// captured per test. Calling this again is a no-op.
pub fn init_test_logging(filter: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_test_writer()
        .try_init();
}

/// Install a fmt subscriber writing to stderr, for the helper binary.
pub fn init_logging(filter: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
