//! Golden values for the four-pillar engine.

use std::collections::HashSet;

use saju_base::{
    FourPillars, SEXAGENARY_CYCLE, Stem, day_pillar, hour_pillar, month_pillar, void_branches,
    year_pillar,
};

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

#[test]
fn cycle_is_closed_and_unique() {
    let set: HashSet<_> = SEXAGENARY_CYCLE.iter().collect();
    assert_eq!(set.len(), 60);
    for p in SEXAGENARY_CYCLE {
        assert_eq!(p.offset(60), p);
        assert_eq!(p.offset(-60), p);
        assert_eq!(p.offset(1).offset(-1), p);
    }
}

// ---------------------------------------------------------------------------
// Year and month
// ---------------------------------------------------------------------------

#[test]
fn known_years() {
    assert_eq!(year_pillar(1984, 3, 1).name(), "甲子");
    assert_eq!(year_pillar(1990, 5, 15).name(), "庚午");
    assert_eq!(year_pillar(2024, 2, 4).name(), "甲辰");
    assert_eq!(year_pillar(2024, 2, 3).name(), "癸卯");
}

#[test]
fn known_months() {
    // Tiger month of a 甲 year is 丙寅
    assert_eq!(month_pillar(2, 4, Stem::Gap).name(), "丙寅");
    // 庚 year, May 15: 辛巳
    assert_eq!(month_pillar(5, 15, Stem::Gyeong).name(), "辛巳");
    // Early January still belongs to the 子 month
    assert_eq!(month_pillar(1, 3, Stem::Gye).branch().hanja(), "子");
}

#[test]
fn month_stems_cycle_every_five_years() {
    for (i, stem) in [Stem::Gap, Stem::Eul, Stem::Byeong, Stem::Jeong, Stem::Mu]
        .into_iter()
        .enumerate()
    {
        let later = Stem::from_index(i as i64 + 5);
        for month in 1..=12 {
            assert_eq!(month_pillar(month, 20, stem), month_pillar(month, 20, later));
        }
    }
}

// ---------------------------------------------------------------------------
// Day and hour
// ---------------------------------------------------------------------------

#[test]
fn known_days() {
    assert_eq!(day_pillar(1900, 1, 1).cycle_index(), 10);
    assert_eq!(day_pillar(1900, 1, 1).name(), "甲戌");
    assert_eq!(day_pillar(1990, 5, 15).name(), "庚辰");
    assert_eq!(day_pillar(2000, 1, 1).name(), "戊午");
    assert_eq!(day_pillar(2024, 1, 1).name(), "甲子");
}

#[test]
fn sixty_consecutive_days_cover_the_cycle() {
    let start = day_pillar(2024, 1, 1);
    let mut seen = HashSet::new();
    for d in 0..60 {
        let p = day_pillar(2024, 1, 1 + d);
        assert_eq!(p, start.offset(i64::from(d)));
        seen.insert(p);
    }
    assert_eq!(seen.len(), 60);
}

#[test]
fn hour_boundaries() {
    assert_eq!(hour_pillar(23, Stem::Gap).name(), "甲子");
    assert_eq!(hour_pillar(0, Stem::Gap).name(), "甲子");
    assert_eq!(hour_pillar(1, Stem::Gap).name(), "乙丑");
    assert_eq!(hour_pillar(14, Stem::Gyeong).name(), "癸未");
}

#[test]
fn two_void_branches_for_every_day_pillar() {
    for p in SEXAGENARY_CYCLE {
        let [a, b] = void_branches(&p);
        assert_ne!(a, b);
        // The void pair never contains the day's own branch
        assert!(p.branch() != a && p.branch() != b);
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[test]
fn scenario_1990_05_15_14h() {
    let p = FourPillars::compute(1990, 5, 15, 14);
    assert_eq!(p.year.cycle_index(), 6);
    assert_eq!(p.year.name(), "庚午");
    assert_eq!(p.month.name(), "辛巳");
    assert_eq!(p.day.name(), "庚辰");
    assert_eq!(p.hour.name(), "癸未");
}

#[test]
fn overflowed_day_rolls_like_the_next_month() {
    assert_eq!(day_pillar(1990, 2, 30), day_pillar(1990, 3, 2));
    assert_eq!(day_pillar(2024, 3, 0), day_pillar(2024, 2, 29));
}
