//! Ascendant and equal houses.
//!
//! The ascendant uses the standard spherical formula
//! `Asc = atan2(-cos(LST), sin(LST)·cos(ε) + tan(φ)·sin(ε))` with a mean
//! local sidereal time and the J2000 obliquity. The supplied clock time is
//! used as UT directly. Houses are equal 30-degree segments counted
//! from the ascendant.

use serde::Serialize;

use saju_math::normalize_360;
use saju_time::{GeoLocation, days_since_j2000, local_sidereal_deg};

use crate::zodiac::{SignPosition, sign_position};

/// Mean obliquity of the ecliptic at J2000.0, degrees.
pub const OBLIQUITY_DEG: f64 = 23.4393;

/// Ecliptic longitude of the ascendant in degrees, range [0, 360).
pub fn ascendant_longitude(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    location: &GeoLocation,
) -> f64 {
    let ut_hours = f64::from(hour) + f64::from(minute) / 60.0;
    let d = days_since_j2000(year, month, day, ut_hours);
    let lst = local_sidereal_deg(d, ut_hours, location.longitude_deg).to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    let phi = location.latitude_deg.to_radians();

    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

/// Static description of one of the twelve houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseInfo {
    pub number: u8,
    pub name: &'static str,
    pub korean: &'static str,
    pub meaning: &'static str,
}

const HOUSES: [HouseInfo; 12] = [
    HouseInfo {
        number: 1,
        name: "Ascendant",
        korean: "1하우스 (상승궁)",
        meaning: "self, appearance, first impressions",
    },
    HouseInfo {
        number: 2,
        name: "2nd House",
        korean: "2하우스",
        meaning: "wealth, possessions, values",
    },
    HouseInfo {
        number: 3,
        name: "3rd House",
        korean: "3하우스",
        meaning: "communication, siblings, short journeys",
    },
    HouseInfo {
        number: 4,
        name: "IC",
        korean: "4하우스 (천저)",
        meaning: "home, roots, inner life",
    },
    HouseInfo {
        number: 5,
        name: "5th House",
        korean: "5하우스",
        meaning: "creativity, romance, children",
    },
    HouseInfo {
        number: 6,
        name: "6th House",
        korean: "6하우스",
        meaning: "health, routine, service",
    },
    HouseInfo {
        number: 7,
        name: "Descendant",
        korean: "7하우스 (하강궁)",
        meaning: "partnership, marriage, contracts",
    },
    HouseInfo {
        number: 8,
        name: "8th House",
        korean: "8하우스",
        meaning: "transformation, shared resources, psyche",
    },
    HouseInfo {
        number: 9,
        name: "9th House",
        korean: "9하우스",
        meaning: "philosophy, higher learning, travel abroad",
    },
    HouseInfo {
        number: 10,
        name: "MC",
        korean: "10하우스 (천정)",
        meaning: "status, career",
    },
    HouseInfo {
        number: 11,
        name: "11th House",
        korean: "11하우스",
        meaning: "friends, hopes, groups",
    },
    HouseInfo {
        number: 12,
        name: "12th House",
        korean: "12하우스",
        meaning: "the unconscious, retreat, spirituality",
    },
];

/// Description of house `number` (1-12, wrapping).
pub fn house_info(number: u8) -> HouseInfo {
    HOUSES[(usize::from(number).max(1) - 1) % 12]
}

/// One house cusp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseCusp {
    #[serde(flatten)]
    pub info: HouseInfo,
    pub cusp: f64,
    pub sign: SignPosition,
}

/// Equal houses: cusp `i` lies at `ascendant + 30·i`.
pub fn equal_houses(ascendant_deg: f64) -> Vec<HouseCusp> {
    HOUSES
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let cusp = normalize_360(ascendant_deg + i as f64 * 30.0);
            HouseCusp {
                info: *info,
                cusp,
                sign: sign_position(cusp),
            }
        })
        .collect()
}

/// House (1-12) containing `longitude` for a given ascendant.
pub fn house_of(longitude_deg: f64, ascendant_deg: f64) -> u8 {
    let offset = normalize_360(longitude_deg - ascendant_deg);
    ((offset / 30.0).floor() as u8).min(11) + 1
}
