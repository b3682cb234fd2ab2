//! End-to-end synthesis of the reference birth and its edge cases.

use astro_base::{AspectSet, AstroChart, AstroInput, Planet};
use saju_base::{BirthFacts, Element, Gender, SajuChart, SajuResult};
use saju_math::Grade;
use saju_synthesis::{
    ALL_QUERY_TYPES, ConflictKind, Harmony, QueryType, SectionKind, SynthesisError, synthesize,
};

fn scenario() -> (SajuResult, AstroChart) {
    // 1990-05-15 14:00, male, Seoul; reference year 2026
    let chart = SajuChart::new(BirthFacts::new(1990, 5, 15, 14), Gender::Male).unwrap();
    let astro = astro_base::calculate(&AstroInput::new(1990, 5, 15).at(14, 0), AspectSet::Major)
        .unwrap();
    (saju_base::calculate(&chart, 2026), astro)
}

// ---------------------------------------------------------------------------
// Reference birth
// ---------------------------------------------------------------------------

#[test]
fn general_reading() {
    let (saju, astro) = scenario();
    let r = synthesize(&saju, &astro, QueryType::General).unwrap();

    assert_eq!(r.scores.eastern.overall, 68);
    assert_eq!(r.scores.western.overall, 72);
    assert_eq!(r.scores.integrated, 70);
    assert!(!r.conflicts.has_conflicts);
    assert_eq!(r.overall_grade.harmony, Harmony::High);
    assert_eq!(r.overall_grade.grade.score, 75);
    assert_eq!(r.overall_grade.grade.grade, Grade::A);

    assert_eq!(r.elements.weak.eastern.element, Element::Wood);
    assert_eq!(r.interpretation.len(), 4);
    assert_eq!(r.interpretation[0].category, SectionKind::BasicFortune);
    assert_eq!(r.fortune_flow.five_year.len(), 5);
    assert_eq!(r.recommendations.len(), 2);
}

#[test]
fn query_type_moves_the_blend() {
    let (saju, astro) = scenario();
    let timing = synthesize(&saju, &astro, QueryType::Timing).unwrap();
    assert_eq!(timing.scores.integrated, 69);
    assert_eq!(timing.overall_grade.grade.score, 74);

    let health = synthesize(&saju, &astro, QueryType::Health).unwrap();
    // 40.8 + 28.8 = 69.6
    assert_eq!(health.scores.integrated, 70);
}

#[test]
fn unknown_query_uses_general_weights() {
    let (saju, astro) = scenario();
    let general = synthesize(&saju, &astro, QueryType::General).unwrap();
    let unknown = synthesize(&saju, &astro, QueryType::from_name("unknown-type")).unwrap();
    assert_eq!(unknown, general);
}

#[test]
fn synthesis_is_idempotent() {
    let (saju, astro) = scenario();
    for q in ALL_QUERY_TYPES {
        assert_eq!(
            synthesize(&saju, &astro, q).unwrap(),
            synthesize(&saju, &astro, q).unwrap()
        );
    }
}

// ---------------------------------------------------------------------------
// Conflicts
// ---------------------------------------------------------------------------

#[test]
fn conflicts_lower_the_grade_but_not_the_blend() {
    let (mut saju, astro) = scenario();
    saju.elements.strongest.element = Element::Wood;
    saju.overall_score.grade.score = 95;
    let r = synthesize(&saju, &astro, QueryType::General).unwrap();

    let kinds: Vec<ConflictKind> = r.conflicts.conflicts.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![ConflictKind::Element, ConflictKind::ScoreDivergence]);
    assert_eq!(r.scores.integrated, 70);
    assert_eq!(r.overall_grade.harmony, Harmony::NeedsAttention);
    assert_eq!(r.overall_grade.grade.score, 65);
    assert_eq!(r.overall_grade.grade.grade, Grade::B);
}

// ---------------------------------------------------------------------------
// Invalid input
// ---------------------------------------------------------------------------

#[test]
fn rejects_mismatched_reference_year() {
    let (mut saju, astro) = scenario();
    saju.reference_year = 2025;
    assert_eq!(
        synthesize(&saju, &astro, QueryType::General),
        Err(SynthesisError::ReferenceYearMismatch {
            reference_year: 2025,
            fortune_year: 2026,
        })
    );
}

#[test]
fn rejects_truncated_fortunes() {
    let (mut saju, astro) = scenario();
    saju.five_year_fortune.pop();
    assert_eq!(
        synthesize(&saju, &astro, QueryType::General),
        Err(SynthesisError::Inconsistent("five-year fortune"))
    );
}

#[test]
fn rejects_stale_luck_pillar() {
    let (mut saju, astro) = scenario();
    saju.current_daeun = None;
    assert_eq!(
        synthesize(&saju, &astro, QueryType::General),
        Err(SynthesisError::Inconsistent("current luck pillar"))
    );
}

#[test]
fn rejects_missing_planets() {
    let (saju, mut astro) = scenario();
    astro.planets.retain(|p| p.planet != Planet::Moon);
    assert_eq!(
        synthesize(&saju, &astro, QueryType::General),
        Err(SynthesisError::MissingPlanet(Planet::Moon))
    );

    astro.planets.clear();
    assert_eq!(
        synthesize(&saju, &astro, QueryType::General),
        Err(SynthesisError::MissingPlanet(Planet::Sun))
    );
}

#[test]
fn rejects_out_of_range_scores() {
    let (saju, mut astro) = scenario();
    astro.score.score = 140;
    assert!(matches!(
        synthesize(&saju, &astro, QueryType::General),
        Err(SynthesisError::ScoreOutOfRange { what: "western", .. })
    ));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn grades_in_range_across_births() {
    for year in (1935..2025).step_by(9) {
        for (month, day, hour) in [(1, 3, 0), (4, 18, 7), (8, 8, 13), (11, 27, 22)] {
            let chart = SajuChart::new(BirthFacts::new(year, month, day, hour), Gender::Female)
                .unwrap();
            let saju = saju_base::calculate(&chart, 2026);
            let astro = astro_base::calculate(
                &AstroInput::new(year, month, day).at(hour, 0),
                AspectSet::All,
            )
            .unwrap();
            for q in ALL_QUERY_TYPES {
                let r = synthesize(&saju, &astro, q).unwrap();
                assert!(r.overall_grade.grade.score <= 100);
                assert!(r.scores.integrated <= 100);
                let harmony_ok = match r.conflicts.conflicts.len() {
                    0 => r.overall_grade.harmony == Harmony::High,
                    1 => r.overall_grade.harmony == Harmony::Medium,
                    _ => r.overall_grade.harmony == Harmony::NeedsAttention,
                };
                assert!(harmony_ok);
            }
        }
    }
}

#[test]
fn serialises_to_json() {
    let (saju, astro) = scenario();
    let r = synthesize(&saju, &astro, QueryType::Timing).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["query_type"], "timing");
    assert_eq!(json["weights"]["eastern"], 0.7);
    assert_eq!(json["scores"]["integrated"], 69);
    assert_eq!(json["scores"]["eastern"]["raw"]["grade"], "A");
    assert_eq!(json["overall_grade"]["score"], 74);
    assert_eq!(json["overall_grade"]["harmony"], "high");
    assert_eq!(json["personality"]["work_style"], "systematic");
    assert_eq!(json["interpretation"][2]["category"], "year_outlook");
    assert_eq!(json["elements"]["recommendations"][0]["element"], "木");
    let rating = &json["fortune_flow"]["five_year"][0]["rating"];
    assert!(["good", "caution", "neutral"].contains(&rating.as_str().unwrap()));
}
