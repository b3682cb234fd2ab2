//! One-call natal chart.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use saju_math::ScoreGrade;
use saju_time::{GeoLocation, TimeError};

use crate::aspect::{Aspect, AspectEffect, AspectSet, effect_counts, find_aspects};
use crate::dignity::{Dignities, essential_dignities};
use crate::elements::{ElementTally, tally_elements};
use crate::error::AstroError;
use crate::house::{HouseCusp, ascendant_longitude, equal_houses, house_of};
use crate::planet::{ALL_PLANETS, Planet};
use crate::position::planet_longitude;
use crate::retrograde::is_retrograde;
use crate::score::astro_score;
use crate::transit::{YearlyTransit, yearly_transit};
use crate::zodiac::{SignPosition, ZodiacSign, sign_position, sun_sign};

/// Birth moment for a Western chart. The clock time is used as UT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstroInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default = "default_hour")]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub location: GeoLocation,
}

fn default_hour() -> u32 {
    12
}

impl AstroInput {
    /// Noon in Seoul on the given date.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: default_hour(),
            minute: 0,
            location: GeoLocation::default(),
        }
    }

    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = location;
        self
    }

    /// Range checks: year 1-9999, month 1-12, day 1-31, hour 0-23,
    /// minute 0-59, location on the sphere.
    ///
    /// As with the pillar engine, Feb 30 is accepted; the Julian Day
    /// formula carries it into March.
    pub fn validate(&self) -> Result<(), AstroError> {
        if !(1..=9999).contains(&self.year) {
            return Err(AstroError::InvalidInput {
                field: "year",
                value: i64::from(self.year),
            });
        }
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::MonthOutOfRange(self.month).into());
        }
        if !(1..=31).contains(&self.day) {
            return Err(TimeError::DayOutOfRange {
                day: self.day,
                max: 31,
            }
            .into());
        }
        if self.hour > 23 {
            return Err(TimeError::HourOutOfRange(self.hour).into());
        }
        if self.minute > 59 {
            return Err(TimeError::MinuteOutOfRange(self.minute).into());
        }
        self.location.validate()?;
        Ok(())
    }
}

/// A body's place in the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    pub korean: &'static str,
    #[serde(flatten)]
    pub position: SignPosition,
    /// Equal house (1-12).
    pub house: u8,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstroChart {
    pub birth: AstroInput,
    /// Sun sign from the calendar date table.
    pub sun_sign: ZodiacSign,
    pub moon_sign: SignPosition,
    pub ascendant: SignPosition,
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HouseCusp>,
    pub aspect_set: AspectSet,
    pub aspects: Vec<Aspect>,
    pub positive_aspects: u32,
    pub challenging_aspects: u32,
    pub elements: ElementTally,
    pub dignities: Dignities,
    pub score: ScoreGrade,
}

impl AstroChart {
    pub fn planet(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet == planet)
    }

    /// `(planet, longitude)` pairs in chart order.
    pub fn longitudes(&self) -> Vec<(Planet, f64)> {
        self.planets
            .iter()
            .map(|p| (p.planet, p.position.longitude))
            .collect()
    }

    pub fn aspects_with_effect(&self, effect: AspectEffect) -> impl Iterator<Item = &Aspect> {
        self.aspects.iter().filter(move |a| a.effect == effect)
    }

    /// Transits of `year` against this chart.
    pub fn yearly_transit(&self, year: i32) -> YearlyTransit {
        yearly_transit(&self.longitudes(), year)
    }
}

/// Validates `input` and builds the full chart.
pub fn calculate(input: &AstroInput, aspect_set: AspectSet) -> Result<AstroChart, AstroError> {
    input.validate()?;
    let AstroInput {
        year, month, day, ..
    } = *input;

    let asc = ascendant_longitude(year, month, day, input.hour, input.minute, &input.location);
    let planets: Vec<PlanetPosition> = ALL_PLANETS
        .iter()
        .map(|planet| {
            let lon = planet_longitude(*planet, year, month, day);
            PlanetPosition {
                planet: *planet,
                korean: planet.korean(),
                position: sign_position(lon),
                house: house_of(lon, asc),
                retrograde: is_retrograde(*planet, year, month, day),
            }
        })
        .collect();
    debug!(ascendant = asc, "planet positions computed");

    let longitudes: Vec<(Planet, f64)> = planets
        .iter()
        .map(|p| (p.planet, p.position.longitude))
        .collect();
    let aspects = find_aspects(&longitudes, aspect_set);
    let elements = tally_elements(planets.iter().map(|p| p.position.sign));
    let dignities = essential_dignities(planets.iter().map(|p| (p.planet, p.position.sign)));
    let score = astro_score(&aspects, &elements);
    let (positive_aspects, challenging_aspects) = effect_counts(&aspects);

    info!(
        sun = %sun_sign(month, day),
        aspects = aspects.len(),
        score = score.score,
        grade = %score.grade,
        "western chart complete"
    );

    let moon_sign = planets[Planet::Moon.index()].position.clone();
    Ok(AstroChart {
        birth: *input,
        sun_sign: sun_sign(month, day),
        moon_sign,
        ascendant: sign_position(asc),
        houses: equal_houses(asc),
        planets,
        aspect_set,
        aspects,
        positive_aspects,
        challenging_aspects,
        elements,
        dignities,
        score,
    })
}
