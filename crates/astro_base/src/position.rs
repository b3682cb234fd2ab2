//! Low-precision geocentric ecliptic longitudes.
//!
//! Sun: mean longitude plus the two-term equation of centre.
//! Moon: mean longitude plus the leading anomaly term.
//! Planets: mean longitude advanced linearly from J2000.0.
//!
//! These are mean-motion estimates good to a few degrees for the Sun and
//! Moon and only indicative for the planets. All positions are taken at
//! 12:00 of the civil date unless an hour is supplied.

use saju_math::normalize_360;
use saju_time::days_since_j2000;

use crate::planet::Planet;

/// Hour of day at which chart longitudes are evaluated.
pub const CHART_HOUR: f64 = 12.0;

/// Mean longitude at J2000.0 (deg) and daily motion (deg/day) for the
/// planets proper. The Sun and Moon have dedicated series.
const fn mean_elements(planet: Planet) -> Option<(f64, f64)> {
    match planet {
        Planet::Mercury => Some((252.25, 4.092317)),
        Planet::Venus => Some((181.98, 1.602136)),
        Planet::Mars => Some((355.43, 0.524039)),
        Planet::Jupiter => Some((34.40, 0.083056)),
        Planet::Saturn => Some((50.08, 0.033371)),
        Planet::Uranus => Some((314.06, 0.011698)),
        Planet::Neptune => Some((304.35, 0.005965)),
        Planet::Pluto => Some((238.96, 0.003964)),
        Planet::Sun | Planet::Moon => None,
    }
}

/// Apparent solar longitude for `d` days since J2000.0.
pub fn sun_longitude_at(d: f64) -> f64 {
    let l = (280.46 + 0.9856474 * d).rem_euclid(360.0);
    let g = (357.528 + 0.9856003 * d).rem_euclid(360.0).to_radians();
    normalize_360(l + 1.915 * g.sin() + 0.02 * (2.0 * g).sin())
}

/// Lunar longitude for `d` days since J2000.0.
pub fn moon_longitude_at(d: f64) -> f64 {
    let l = (218.316 + 13.176396 * d).rem_euclid(360.0);
    let m = (134.963 + 13.064993 * d).rem_euclid(360.0).to_radians();
    normalize_360(l + 6.289 * m.sin())
}

/// Mean longitude of `planet` for `d` days since J2000.0.
pub fn longitude_at(planet: Planet, d: f64) -> f64 {
    match mean_elements(planet) {
        Some((l0, n)) => normalize_360(l0 + n * d),
        None if planet == Planet::Moon => moon_longitude_at(d),
        None => sun_longitude_at(d),
    }
}

/// Solar longitude at noon on a civil date.
pub fn sun_longitude(year: i32, month: u32, day: u32) -> f64 {
    sun_longitude_at(days_since_j2000(year, month, day, CHART_HOUR))
}

/// Lunar longitude at `hour` (fractional) on a civil date.
pub fn moon_longitude(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    moon_longitude_at(days_since_j2000(year, month, day, hour))
}

/// Longitude of `planet` at noon on a civil date.
pub fn planet_longitude(planet: Planet, year: i32, month: u32, day: u32) -> f64 {
    longitude_at(planet, days_since_j2000(year, month, day, CHART_HOUR))
}
