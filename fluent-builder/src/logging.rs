//! Tracing setup for the demo binary.
//!
//! The library only emits events through `tracing`; installing a subscriber
//! is left to the embedding application.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise `verbosity` (the number of
/// `-v` flags) raises this crate's level above the `warn` baseline.
///
/// # Example
/// ```bash
/// cargo run -- -vv point --x 3
/// RUST_LOG=fluent_builder=trace cargo run -- unconstructible
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,fluent_builder=info",
        _ => "warn,fluent_builder=debug",
    }
}
