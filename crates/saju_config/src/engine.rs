//! The resolved engine settings.

use serde::{Deserialize, Serialize};

use astro_base::AspectSet;
use saju_synthesis::QueryType;
use saju_time::GeoLocation;

use crate::error::ConfigError;

/// Default `tracing` filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings shared by the facade and the CLI. Every field has a default, so
/// a layer only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Birth location used when a request gives none.
    pub location: GeoLocation,
    /// Year read as "now" by yearly fortunes and the current luck pillar.
    /// `None` means the local calendar year.
    pub reference_year: Option<i32>,
    pub aspect_set: AspectSet,
    pub query_type: QueryType,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            location: GeoLocation::SEOUL,
            reference_year: None,
            aspect_set: AspectSet::Major,
            query_type: QueryType::General,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Range checks on the location and the reference year.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location.validate()?;
        if let Some(year) = self.reference_year {
            if !(1..=9999).contains(&year) {
                return Err(ConfigError::ReferenceYear(year));
            }
        }
        Ok(())
    }
}
