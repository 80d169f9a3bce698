//! `tracing-subscriber` initialisation for binaries.

pub mod spans;

use sage_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Resolve the log filter: `RUST_LOG` wins, then verbosity flags, then config.
pub fn env_filter(config: &ObservabilityConfig, verbosity: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbosity {
        0 => EnvFilter::new(&config.log_level),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(config: &ObservabilityConfig, verbosity: u8) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, verbosity))
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
