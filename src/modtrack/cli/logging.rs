//! Logging setup for the binary.
//!
//! The library only emits `tracing` events; this is where they get a
//! subscriber. Output goes to stderr so it never mixes with command results.

use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps `-v` occurrences to a level. Default shows warnings only.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    // RUST_LOG wins over -v.
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,modtrack={}",
            level.as_str().to_lowercase()
        ))
    })
}

pub fn init_logging(verbosity: u8) {
    let filter = build_env_filter(level_for(verbosity));
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
