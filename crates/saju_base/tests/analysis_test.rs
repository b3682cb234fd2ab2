//! End-to-end checks for the chart analysis.

use saju_base::{
    ALL_STEMS, BirthFacts, Direction, Element, Gender, SajuChart, SajuError, TenGod, calculate,
    daily_fortune, ten_gods,
};
use saju_time::{CivilDate, TimeError};

fn scenario() -> SajuChart {
    SajuChart::new(BirthFacts::new(1990, 5, 15, 14), Gender::Male).unwrap()
}

#[test]
fn scenario_full_analysis() {
    let r = calculate(&scenario(), 2026);

    assert_eq!(r.chart.pillars.year.name(), "庚午");
    assert_eq!(r.daeun.direction, Direction::Forward);
    assert_eq!(r.daeun.pillars.len(), 10);
    assert_eq!(r.elements.distribution.total(), 8);
    assert_eq!(r.elements.yongsin, Element::Wood);
    assert_eq!(r.relations.summary.good, 2);
    assert_eq!(r.overall_score.grade.score, 77);
    assert_eq!(r.yearly_fortune.year, 2026);
    assert_eq!(r.five_year_fortune.len(), 5);
    assert_eq!(r.current_daeun.map(|p| p.index), Some(3));
    assert_eq!(r.lucky_guide.direction, "east");
    assert_eq!(r.ten_gods.year.stem, TenGod::Bigyeon);
    assert_eq!(r.ten_gods.hour.stem, TenGod::Sanggwan);
    assert_eq!(r.hidden_stems.len(), 4);
    // day 庚辰 leaves 申酉 void; neither appears in the chart
    assert!(!r.void.has_void);
}

#[test]
fn analysis_is_idempotent() {
    let chart = scenario();
    assert_eq!(calculate(&chart, 2026), calculate(&chart, 2026));
}

#[test]
fn serialises_labels() {
    let r = calculate(&scenario(), 2026);
    let json = serde_json::to_value(&r).unwrap();

    assert_eq!(json["chart"]["pillars"]["day"]["name"], "庚辰");
    assert_eq!(json["chart"]["pillars"]["day"]["stem"], "庚");
    assert_eq!(json["chart"]["gender"], "male");
    assert_eq!(json["ten_gods"]["day"], "self");
    assert_eq!(json["ten_gods"]["year"]["stem"], "비견");
    assert_eq!(json["elements"]["yongsin"], "木");
    assert_eq!(json["elements"]["distribution"]["金"], 3);
    assert_eq!(json["overall_score"]["score"], 77);
    assert_eq!(json["overall_score"]["grade"], "A");
    assert_eq!(json["daeun"]["direction"], "forward");
}

#[test]
fn ten_gods_cover_every_stem_pair() {
    let day = saju_base::pillar_at(0);
    for stem in ALL_STEMS {
        let target = saju_base::SEXAGENARY_CYCLE
            .iter()
            .find(|p| p.stem() == stem)
            .unwrap();
        let pair = ten_gods(&day, target);
        assert!(saju_base::ten_gods::ALL_TEN_GODS.contains(&pair.stem));
    }
}

#[test]
fn scores_in_range_for_many_births() {
    for year in (1901..2099).step_by(13) {
        for month in [1, 2, 4, 7, 11, 12] {
            for (day, hour) in [(1, 0), (4, 6), (15, 12), (28, 23)] {
                for gender in [Gender::Male, Gender::Female] {
                    let chart = SajuChart::new(BirthFacts::new(year, month, day, hour), gender)
                        .unwrap();
                    let r = calculate(&chart, 2026);
                    assert!(r.overall_score.grade.score <= 100);
                    assert_eq!(r.elements.distribution.total(), 8);
                    assert!((r.elements.detailed.total() - 12.0).abs() < 1e-9);
                    for w in r.daeun.pillars.windows(2) {
                        assert_eq!(w[1].start_age, w[0].start_age + 10);
                    }
                }
            }
        }
    }
}

#[test]
fn daily_fortune_from_result() {
    let r = calculate(&scenario(), 2026);
    let f = daily_fortune(
        &r.chart.pillars,
        r.yongsin(),
        CivilDate::new(2024, 1, 1).unwrap(),
    );
    assert_eq!(f.score, 65);
    assert_eq!(f.lucky_hours.len(), 2);
}

#[test]
fn invalid_birth_facts_fail_fast() {
    let err = SajuChart::new(BirthFacts::new(1990, 13, 1, 0), Gender::Male).unwrap_err();
    assert_eq!(err, SajuError::Time(TimeError::MonthOutOfRange(13)));
    assert!(matches!(
        SajuChart::new(BirthFacts::new(0, 5, 15, 0), Gender::Male),
        Err(SajuError::InvalidInput { field: "year", .. })
    ));
    assert!(SajuChart::new(BirthFacts::new(1990, 5, 15, 24), Gender::Male).is_err());
    assert!(SajuChart::new(BirthFacts::new(1990, 5, 32, 0), Gender::Male).is_err());
    assert!("unknown".parse::<Gender>().is_err());
}
