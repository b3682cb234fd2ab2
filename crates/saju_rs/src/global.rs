//! Process-wide engine configuration.
//!
//! [`init`] is optional: until it is called every function runs with
//! [`EngineConfig::default`].

use std::sync::OnceLock;

use chrono::{Datelike, Local};
use saju_config::EngineConfig;
use tracing::debug;

use crate::error::SajuRsError;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Validates and installs `config`. Fails if a configuration is already set.
pub fn init(config: EngineConfig) -> Result<(), SajuRsError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| SajuRsError::AlreadyInitialized)?;
    debug!("engine configuration installed");
    Ok(())
}

pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// The installed configuration, or the defaults.
pub fn config() -> EngineConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// The configured reference year, else the current local calendar year.
pub fn reference_year() -> i32 {
    config()
        .reference_year
        .unwrap_or_else(|| Local::now().year())
}
