//! Engine configuration.
//!
//! This crate provides:
//! - [`EngineConfig`]: reference location, reference year, aspect set,
//!   default query type and log filter
//! - Layered loading: built-in defaults, then a base JSON file, then a run
//!   JSON file, deep-merged key by key
//! - A once-only `tracing` subscriber for binaries
//!
//! The engine crates never read configuration themselves; callers pass the
//! resolved values in.

pub mod engine;
pub mod error;
pub mod layered;
pub mod tracing;

pub use engine::EngineConfig;
pub use error::ConfigError;
pub use layered::{ConfigLayering, LayeredConfig, load_config};
pub use self::tracing::init_tracing;
