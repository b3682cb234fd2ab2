//! Simplified Western natal chart.
//!
//! This crate provides:
//! - The twelve tropical signs with element, quality and ruler tables
//! - Mean-motion longitudes for the Sun, Moon and eight planets
//! - Ascendant from mean local sidereal time and equal houses
//! - Major and minor aspects with orb-based strength
//! - Element/quality tally, essential dignities and a graded chart score
//! - Yearly transits against the natal positions
//!
//! Positions are indicative only; retrograde flags come from a
//! deterministic date hash, not from planetary motion.

pub mod aspect;
pub mod chart;
pub mod dignity;
pub mod elements;
pub mod error;
pub mod house;
pub mod planet;
pub mod position;
pub mod retrograde;
pub mod score;
pub mod transit;
pub mod zodiac;

pub use aspect::{
    ALL_ASPECTS, Aspect, AspectEffect, AspectKind, AspectSet, AspectStrength, effect_counts,
    find_aspects, match_aspect,
};
pub use chart::{AstroChart, AstroInput, PlanetPosition, calculate};
pub use dignity::{Dignities, Dignity, DignityEntry, dignities_of, essential_dignities};
pub use elements::{ElementCounts, ElementTally, QualityCounts, tally_elements};
pub use error::AstroError;
pub use house::{HouseCusp, HouseInfo, OBLIQUITY_DEG, ascendant_longitude, equal_houses, house_of};
pub use planet::{ALL_PLANETS, Planet, PlanetKind};
pub use position::{moon_longitude, planet_longitude, sun_longitude};
pub use retrograde::{is_retrograde, retrograde_hash};
pub use score::astro_score;
pub use transit::{Transit, TransitHighlight, YearlyTransit, yearly_transit};
pub use zodiac::{
    ALL_ASTRO_ELEMENTS, ALL_QUALITIES, ALL_SIGNS, AstroElement, Quality, SignPosition,
    ZodiacSign, sign_position, sun_sign,
};
