//! Logging setup.
//!
//! The library itself only emits `tracing` events. Hosts call
//! [`init_logging`] once to route them to stderr.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.log_level` is used as the
/// filter. Returns `false` if a global subscriber was already installed.
pub fn init_logging(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
