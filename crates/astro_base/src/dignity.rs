//! Essential dignities.
//!
//! - Domicile: the body sits in a sign it rules (traditional rulerships,
//!   plus the modern outer-planet rulers).
//! - Exaltation: the seven classical bodies each have one exaltation sign.
//! - Detriment: opposite a domicile sign.
//! - Fall: opposite the exaltation sign.

use serde::Serialize;

use crate::planet::Planet;
use crate::zodiac::ZodiacSign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Domicile,
    Exaltation,
    Detriment,
    Fall,
}

impl Dignity {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Domicile => "본좌",
            Self::Exaltation => "고양",
            Self::Detriment => "손상",
            Self::Fall => "쇠약",
        }
    }

    const fn verb(self) -> &'static str {
        match self {
            Self::Domicile => "is at home",
            Self::Exaltation => "is exalted",
            Self::Detriment => "is in detriment",
            Self::Fall => "is in its fall",
        }
    }
}

/// Signs ruled by `planet`.
pub const fn domicile_signs(planet: Planet) -> &'static [ZodiacSign] {
    use ZodiacSign::*;
    match planet {
        Planet::Sun => &[Leo],
        Planet::Moon => &[Cancer],
        Planet::Mercury => &[Gemini, Virgo],
        Planet::Venus => &[Taurus, Libra],
        Planet::Mars => &[Aries, Scorpio],
        Planet::Jupiter => &[Sagittarius, Pisces],
        Planet::Saturn => &[Capricorn, Aquarius],
        Planet::Uranus => &[Aquarius],
        Planet::Neptune => &[Pisces],
        Planet::Pluto => &[Scorpio],
    }
}

/// Exaltation sign; the outer planets have none.
pub const fn exaltation_sign(planet: Planet) -> Option<ZodiacSign> {
    match planet {
        Planet::Sun => Some(ZodiacSign::Aries),
        Planet::Moon => Some(ZodiacSign::Taurus),
        Planet::Mercury => Some(ZodiacSign::Virgo),
        Planet::Venus => Some(ZodiacSign::Pisces),
        Planet::Mars => Some(ZodiacSign::Capricorn),
        Planet::Jupiter => Some(ZodiacSign::Cancer),
        Planet::Saturn => Some(ZodiacSign::Libra),
        Planet::Uranus | Planet::Neptune | Planet::Pluto => None,
    }
}

/// Every dignity `planet` holds in `sign`. Mercury in Virgo is both at
/// home and exalted.
pub fn dignities_of(planet: Planet, sign: ZodiacSign) -> Vec<Dignity> {
    let homes = domicile_signs(planet);
    let exalt = exaltation_sign(planet);
    let mut out = Vec::new();
    if homes.contains(&sign) {
        out.push(Dignity::Domicile);
    }
    if exalt == Some(sign) {
        out.push(Dignity::Exaltation);
    }
    if homes.iter().any(|h| h.opposite() == sign) {
        out.push(Dignity::Detriment);
    }
    if exalt.map(ZodiacSign::opposite) == Some(sign) {
        out.push(Dignity::Fall);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DignityEntry {
    pub planet: Planet,
    pub sign: ZodiacSign,
    pub description: String,
}

/// Bodies grouped by the dignity they hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dignities {
    pub domicile: Vec<DignityEntry>,
    pub exaltation: Vec<DignityEntry>,
    pub detriment: Vec<DignityEntry>,
    pub fall: Vec<DignityEntry>,
}

impl Dignities {
    pub fn get(&self, dignity: Dignity) -> &[DignityEntry] {
        match dignity {
            Dignity::Domicile => &self.domicile,
            Dignity::Exaltation => &self.exaltation,
            Dignity::Detriment => &self.detriment,
            Dignity::Fall => &self.fall,
        }
    }

    fn list_mut(&mut self, dignity: Dignity) -> &mut Vec<DignityEntry> {
        match dignity {
            Dignity::Domicile => &mut self.domicile,
            Dignity::Exaltation => &mut self.exaltation,
            Dignity::Detriment => &mut self.detriment,
            Dignity::Fall => &mut self.fall,
        }
    }
}

/// Classifies each `(planet, sign)` placement.
pub fn essential_dignities(
    placements: impl IntoIterator<Item = (Planet, ZodiacSign)>,
) -> Dignities {
    let mut out = Dignities::default();
    for (planet, sign) in placements {
        for dignity in dignities_of(planet, sign) {
            out.list_mut(dignity).push(DignityEntry {
                planet,
                sign,
                description: format!("{planet} {} in {sign}.", dignity.verb()),
            });
        }
    }
    out
}
