//! Calendar arithmetic shared by the Saju and Western chart engines.
//!
//! This crate provides:
//! - Proleptic Gregorian day counts and JavaScript-`Date`-style overflow
//!   normalisation (`CivilDate`)
//! - Julian Day and days-since-J2000 for the mean-motion formulas
//! - A mean local sidereal time approximation for the ascendant
//! - The fixed 12-term solar-term table that bounds Saju months
//! - `GeoLocation` with range validation

pub mod civil;
pub mod error;
pub mod geo;
pub mod julian;
pub mod sidereal;
pub mod solar_term;

pub use civil::{
    CivilDate, DAY_COUNT_EPOCH, civil_from_days, days_from_civil, days_in_month,
    days_since_day_count_epoch, is_leap_year,
};
pub use error::TimeError;
pub use geo::GeoLocation;
pub use julian::{J2000_JD, calendar_to_jd, days_since_j2000};
pub use sidereal::local_sidereal_deg;
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, solar_term_month, term_starting_in};
