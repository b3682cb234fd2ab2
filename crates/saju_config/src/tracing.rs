//! Global `tracing` subscriber for binaries.
//!
//! `RUST_LOG` wins over the configured filter. Output goes to stderr so
//! stdout stays clean for JSON.

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ConfigError;

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Builds the filter: `RUST_LOG` when set and valid, else `fallback`.
pub fn env_filter(fallback: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).map_err(|e| ConfigError::LogFilter {
        filter: fallback.to_string(),
        message: e.to_string(),
    })
}

/// Installs the global subscriber. A second call fails with
/// [`ConfigError::TracingAlreadyInitialised`].
pub fn init_tracing(fallback_filter: &str) -> Result<(), ConfigError> {
    let filter = env_filter(fallback_filter)?;
    INITIALISED
        .set(())
        .map_err(|_| ConfigError::TracingAlreadyInitialised)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| ConfigError::TracingAlreadyInitialised)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filters() {
        // only meaningful when RUST_LOG is unset
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter("info").is_ok());
            assert!(matches!(
                env_filter("saju=loudest"),
                Err(ConfigError::LogFilter { .. })
            ));
        }
    }

    #[test]
    fn second_init_fails() {
        let first = init_tracing("warn");
        let second = init_tracing("warn");
        assert!(first.is_ok() || matches!(first, Err(ConfigError::TracingAlreadyInitialised)));
        assert!(matches!(second, Err(ConfigError::TracingAlreadyInitialised)));
    }
}
