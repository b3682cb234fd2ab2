//! Yearly transits.
//!
//! Each body is placed at noon on July 1 of the target year and compared
//! with its natal longitude using the major aspects only. Jupiter and
//! Saturn contacts become highlights.

use serde::Serialize;

use saju_math::angular_separation;

use crate::aspect::{AspectEffect, AspectKind, AspectSet, match_aspect};
use crate::planet::{ALL_PLANETS, Planet};
use crate::position::planet_longitude;
use crate::retrograde::is_retrograde;
use crate::zodiac::{SignPosition, sign_position};

/// Calendar date (month, day) at which a year's transits are sampled.
pub const TRANSIT_DATE: (u32, u32) = (7, 1);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transit {
    pub planet: Planet,
    pub position: SignPosition,
    /// Separation from the natal position of the same body.
    pub separation: f64,
    pub aspect_to_natal: Option<AspectKind>,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitHighlight {
    pub planet: Planet,
    pub effect: AspectEffect,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTransit {
    pub year: i32,
    pub transits: Vec<Transit>,
    pub highlights: Vec<TransitHighlight>,
}

/// Transits for `year` against natal longitudes given in chart order.
pub fn yearly_transit(natal: &[(Planet, f64)], year: i32) -> YearlyTransit {
    let (month, day) = TRANSIT_DATE;
    let transits: Vec<Transit> = ALL_PLANETS
        .iter()
        .filter_map(|planet| {
            let natal_lon = natal.iter().find(|(p, _)| p == planet)?.1;
            let lon = planet_longitude(*planet, year, month, day);
            let separation = angular_separation(lon, natal_lon);
            Some(Transit {
                planet: *planet,
                position: sign_position(lon),
                separation,
                aspect_to_natal: match_aspect(separation, AspectSet::Major),
                retrograde: is_retrograde(*planet, year, month, day),
            })
        })
        .collect();

    YearlyTransit {
        year,
        highlights: transit_highlights(&transits),
        transits,
    }
}

/// Jupiter in a positive aspect promises expansion; any Saturn aspect is
/// stability when positive and a test otherwise.
pub fn transit_highlights(transits: &[Transit]) -> Vec<TransitHighlight> {
    let aspect_of = |planet: Planet| {
        transits
            .iter()
            .find(|t| t.planet == planet)
            .and_then(|t| t.aspect_to_natal)
    };

    let mut out = Vec::new();
    if let Some(kind) = aspect_of(Planet::Jupiter) {
        if kind.effect() == AspectEffect::Positive {
            out.push(TransitHighlight {
                planet: Planet::Jupiter,
                effect: AspectEffect::Positive,
                description: format!("Jupiter {}: a chance for expansion and luck", kind.name()),
            });
        }
    }
    if let Some(kind) = aspect_of(Planet::Saturn) {
        let positive = kind.effect() == AspectEffect::Positive;
        out.push(TransitHighlight {
            planet: Planet::Saturn,
            effect: if positive {
                AspectEffect::Neutral
            } else {
                AspectEffect::Challenging
            },
            description: format!(
                "Saturn {}: {}",
                kind.name(),
                if positive {
                    "stability and achievement"
                } else {
                    "trials and growth"
                }
            ),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transit(planet: Planet, aspect: Option<AspectKind>) -> Transit {
        Transit {
            planet,
            position: sign_position(0.0),
            separation: aspect.map_or(45.0, AspectKind::angle),
            aspect_to_natal: aspect,
            retrograde: false,
        }
    }

    #[test]
    fn jupiter_positive_aspect_is_highlighted() {
        let h = transit_highlights(&[transit(Planet::Jupiter, Some(AspectKind::Trine))]);
        assert_eq!(h.len(), 1);
        assert_eq!(h[0].effect, AspectEffect::Positive);
        assert_eq!(h[0].description, "Jupiter Trine: a chance for expansion and luck");
    }

    #[test]
    fn jupiter_hard_aspect_is_ignored() {
        let h = transit_highlights(&[transit(Planet::Jupiter, Some(AspectKind::Square))]);
        assert!(h.is_empty());
    }

    #[test]
    fn saturn_any_aspect_is_highlighted() {
        let h = transit_highlights(&[transit(Planet::Saturn, Some(AspectKind::Sextile))]);
        assert_eq!(h[0].effect, AspectEffect::Neutral);

        let h = transit_highlights(&[transit(Planet::Saturn, Some(AspectKind::Conjunction))]);
        assert_eq!(h[0].effect, AspectEffect::Challenging);
        assert_eq!(h[0].description, "Saturn Conjunction: trials and growth");
    }

    #[test]
    fn full_year_against_natal() {
        let natal: Vec<(Planet, f64)> = ALL_PLANETS
            .iter()
            .map(|p| (*p, planet_longitude(*p, 1990, 5, 15)))
            .collect();

        let t = yearly_transit(&natal, 2027);
        assert_eq!(t.transits.len(), 10);
        // Saturn 92.5 deg from its natal place: square
        let saturn = &t.transits[Planet::Saturn.index()];
        assert_eq!(saturn.aspect_to_natal, Some(AspectKind::Square));
        assert_eq!(t.highlights.len(), 1);
        assert_eq!(t.highlights[0].effect, AspectEffect::Challenging);

        let t = yearly_transit(&natal, 2024);
        assert_eq!(t.highlights[0].planet, Planet::Saturn);
        assert_eq!(t.highlights[0].effect, AspectEffect::Neutral);
    }

    #[test]
    fn missing_natal_bodies_are_skipped() {
        let t = yearly_transit(&[(Planet::Sun, 10.0)], 2026);
        assert_eq!(t.transits.len(), 1);
        assert!(t.highlights.is_empty());
    }
}
