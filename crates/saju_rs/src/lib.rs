//! Convenience wrapper for the saju, Western chart and synthesis engines.
//!
//! Provides a global engine configuration and high-level functions that
//! take one [`BirthInput`] and return finished results, removing the need
//! to build charts, pick a reference year or wire the engines together by
//! hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let birth: BirthInput = "1990-05-15T14:00 male".parse().unwrap();
//! let reading = synthesize(&birth, QueryType::General).unwrap();
//! println!("{} ({})", reading.overall_grade.grade.score, reading.overall_grade.grade.grade);
//! ```

pub mod convenience;
pub mod date;
pub mod error;
pub mod global;
pub mod input;

// Primary re-exports; users should only need `use saju_rs::*`
pub use convenience::{
    Analysis, analyze, astro, compatibility, daily, monthly, pillars, saju, saju_for_year,
    synthesize, themed, themed_all, transit,
};
pub use date::BirthDateTime;
pub use error::SajuRsError;
pub use global::{config, init, is_initialized, reference_year};
pub use input::BirthInput;

// Re-export engine types so callers don't need the engine crates directly.
pub use astro_base::{AspectSet, AstroChart, YearlyTransit};
pub use saju_base::{
    Compatibility, DailyFortune, FourPillars, Gender, MonthlyFortune, SajuResult, Theme,
    ThemedFortune,
};
pub use saju_config::{ConfigLayering, EngineConfig, load_config};
pub use saju_synthesis::{QueryType, SynthesisResult};
pub use saju_time::{CivilDate, GeoLocation};
