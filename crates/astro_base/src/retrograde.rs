//! Retrograde flag.
//!
//! This is not an astronomical computation: the flag comes from a
//! deterministic hash of the date and the planet's initial, compared with
//! the average fraction of the year each body spends retrograde. The same
//! date and planet always give the same answer.

use crate::planet::Planet;

/// Average share of time spent retrograde. The luminaries never are.
pub const fn retrograde_share(planet: Planet) -> f64 {
    match planet {
        Planet::Sun | Planet::Moon => 0.0,
        Planet::Mercury => 0.19,
        Planet::Venus => 0.07,
        Planet::Mars => 0.09,
        Planet::Jupiter => 0.30,
        Planet::Saturn => 0.36,
        Planet::Uranus => 0.40,
        Planet::Neptune => 0.41,
        Planet::Pluto => 0.44,
    }
}

/// Pseudo-random value in [0, 1) seeded by date and planet.
///
/// seed = year·10000 + month·100 + day + (ASCII code of the name's first
/// letter); value = fractional part of 10000·sin(seed).
pub fn retrograde_hash(planet: Planet, year: i32, month: u32, day: u32) -> f64 {
    let initial = planet.name().as_bytes().first().copied().unwrap_or(0);
    let seed = i64::from(year) * 10_000 + i64::from(month) * 100 + i64::from(day)
        + i64::from(initial);
    let spread = (seed as f64).sin() * 10_000.0;
    spread - spread.floor()
}

/// Whether `planet` is flagged retrograde on the date.
pub fn is_retrograde(planet: Planet, year: i32, month: u32, day: u32) -> bool {
    retrograde_hash(planet, year, month, day) < retrograde_share(planet)
}
