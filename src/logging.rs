use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Diagnostics go to stderr so stdout stays
/// reserved for the pass listing; `RUST_LOG` overrides the configured level.
pub fn init(level: &str) {
    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "info",
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.parse().unwrap())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}
