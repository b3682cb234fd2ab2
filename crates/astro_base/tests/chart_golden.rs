//! Golden values for full natal charts.

use approx::assert_abs_diff_eq;
use astro_base::{
    AspectEffect, AspectKind, AspectSet, AstroElement, AstroInput, Planet, Quality, ZodiacSign,
    calculate,
};
use saju_math::Grade;
use saju_time::GeoLocation;

fn scenario() -> AstroInput {
    // 1990-05-15 14:00, Seoul
    AstroInput::new(1990, 5, 15).at(14, 0)
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

#[test]
fn scenario_positions() {
    let chart = calculate(&scenario(), AspectSet::Major).unwrap();

    assert_eq!(chart.sun_sign, ZodiacSign::Taurus);
    assert_eq!(chart.moon_sign.sign, ZodiacSign::Capricorn);
    assert_eq!(chart.ascendant.sign, ZodiacSign::Cancer);
    assert_abs_diff_eq!(chart.ascendant.longitude, 100.019, epsilon = 1e-2);

    let expected = [
        (Planet::Sun, ZodiacSign::Taurus, 11),
        (Planet::Moon, ZodiacSign::Capricorn, 7),
        (Planet::Mercury, ZodiacSign::Sagittarius, 6),
        (Planet::Venus, ZodiacSign::Aquarius, 7),
        (Planet::Mars, ZodiacSign::Aquarius, 8),
        (Planet::Jupiter, ZodiacSign::Cancer, 1),
        (Planet::Saturn, ZodiacSign::Capricorn, 7),
        (Planet::Uranus, ZodiacSign::Capricorn, 6),
        (Planet::Neptune, ZodiacSign::Capricorn, 7),
        (Planet::Pluto, ZodiacSign::Scorpio, 5),
    ];
    for (planet, sign, house) in expected {
        let p = chart.planet(planet).unwrap();
        assert_eq!(p.position.sign, sign, "{planet}");
        assert_eq!(p.house, house, "{planet}");
    }

    let retro: Vec<Planet> = chart
        .planets
        .iter()
        .filter(|p| p.retrograde)
        .map(|p| p.planet)
        .collect();
    assert_eq!(retro, vec![Planet::Mercury, Planet::Jupiter, Planet::Pluto]);
}

#[test]
fn houses_start_at_ascendant() {
    let chart = calculate(&scenario(), AspectSet::Major).unwrap();
    assert_eq!(chart.houses.len(), 12);
    assert_abs_diff_eq!(chart.houses[0].cusp, chart.ascendant.longitude, epsilon = 1e-9);
    assert_eq!(chart.houses[0].sign.sign, ZodiacSign::Cancer);
    assert_eq!(chart.houses[3].sign.sign, ZodiacSign::Libra);
}

// ---------------------------------------------------------------------------
// Aspects and score
// ---------------------------------------------------------------------------

#[test]
fn scenario_major_aspects() {
    let chart = calculate(&scenario(), AspectSet::Major).unwrap();
    assert_eq!(chart.aspects.len(), 13);
    assert_eq!(chart.positive_aspects, 5);
    assert_eq!(chart.challenging_aspects, 4);
    assert_eq!(chart.aspects_with_effect(AspectEffect::Neutral).count(), 4);

    let first = &chart.aspects[0];
    assert_eq!((first.first, first.second), (Planet::Sun, Planet::Moon));
    assert_eq!(first.kind, AspectKind::Trine);
    assert!(first.applying);

    let jup_nep = chart
        .aspects
        .iter()
        .find(|a| a.first == Planet::Jupiter && a.second == Planet::Neptune)
        .unwrap();
    assert_eq!(jup_nep.kind, AspectKind::Opposition);
    assert_abs_diff_eq!(jup_nep.orb, 1.156, epsilon = 1e-2);
}

#[test]
fn scenario_elements_and_score() {
    let chart = calculate(&scenario(), AspectSet::Major).unwrap();
    assert_eq!(chart.elements.elements.0, [1, 5, 2, 2]);
    assert_eq!(chart.elements.dominant.element, AstroElement::Earth);
    assert_eq!(chart.elements.dominant_quality.quality, Quality::Cardinal);

    // 50 + 5·5 − 3·4 + (15 − 3·2.25) = 71.25
    assert_eq!(chart.score.score, 71);
    assert_eq!(chart.score.grade, Grade::A);
}

#[test]
fn minor_aspects_extend_the_major_set() {
    let major = calculate(&scenario(), AspectSet::Major).unwrap();
    let all = calculate(&scenario(), AspectSet::All).unwrap();
    assert_eq!(all.aspects.len(), 16);
    for a in &major.aspects {
        assert!(all.aspects.contains(a));
    }
    let minor: Vec<AspectKind> = all
        .aspects
        .iter()
        .filter(|a| !a.kind.is_major())
        .map(|a| a.kind)
        .collect();
    assert_eq!(
        minor,
        vec![AspectKind::SemiSextile, AspectKind::Quincunx, AspectKind::SemiSextile]
    );
    // Mars-Jupiter quincunx is challenging: 71.25 − 3 = 68.25
    assert_eq!(all.score.score, 68);
}

#[test]
fn j2000_greenwich() {
    let input = AstroInput::new(2000, 1, 1).with_location(GeoLocation::new(51.4769, 0.0));
    let chart = calculate(&input, AspectSet::Major).unwrap();
    assert_eq!(chart.ascendant.sign, ZodiacSign::Libra);
    assert_eq!(chart.aspects.len(), 16);
    assert_eq!(chart.positive_aspects, 8);
    assert_eq!(chart.challenging_aspects, 7);
    assert_eq!(chart.score.score, 82);
    assert_eq!(chart.score.grade, Grade::S);

    let uranus_neptune = chart
        .aspects
        .iter()
        .find(|a| a.first == Planet::Uranus)
        .unwrap();
    assert_eq!(uranus_neptune.second, Planet::Neptune);
    assert_eq!(uranus_neptune.kind, AspectKind::Conjunction);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn chart_is_idempotent() {
    let a = calculate(&scenario(), AspectSet::All).unwrap();
    let b = calculate(&scenario(), AspectSet::All).unwrap();
    assert_eq!(a, b);
}

#[test]
fn scores_in_range_across_dates() {
    for year in (1920..2080).step_by(9) {
        for month in 1..=12 {
            let chart = calculate(&AstroInput::new(year, month, 9), AspectSet::All).unwrap();
            assert!(chart.score.score <= 100);
            assert_eq!(chart.planets.len(), 10);
            let total: u32 = chart.elements.elements.0.iter().sum();
            assert_eq!(total, 10);
        }
    }
}

#[test]
fn serialises_to_json() {
    let chart = calculate(&scenario(), AspectSet::Major).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["sun_sign"], "Taurus");
    assert_eq!(json["planets"][0]["planet"], "Sun");
    assert_eq!(json["planets"][0]["sign"], "Taurus");
    assert_eq!(json["planets"][0]["formatted"], "Taurus 24° 23'");
    assert_eq!(json["aspects"][0]["kind"], "trine");
    assert_eq!(json["aspects"][0]["effect"], "positive");
    assert_eq!(json["elements"]["elements"]["Earth"], 5);
    assert_eq!(json["score"]["grade"], "A");
    assert_eq!(json["aspect_set"], "major");
}

#[test]
fn transits_from_chart() {
    let chart = calculate(&scenario(), AspectSet::Major).unwrap();
    let t = chart.yearly_transit(2026);
    assert_eq!(t.year, 2026);
    assert_eq!(t.transits.len(), 10);
    assert!(t.highlights.is_empty());
    let moon = &t.transits[Planet::Moon.index()];
    assert_eq!(moon.aspect_to_natal, Some(AspectKind::Conjunction));
}
