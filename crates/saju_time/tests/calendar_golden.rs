//! Integration tests for calendar arithmetic and solar-term boundaries.

use saju_time::{
    ALL_SOLAR_TERMS, CivilDate, calendar_to_jd, days_since_day_count_epoch, days_since_j2000,
    solar_term_month,
};

// ---------------------------------------------------------------------------
// Day counts
// ---------------------------------------------------------------------------

#[test]
fn day_count_for_1990_05_15() {
    // 90 years from 1900 with 22 leap days (1904..1988), then Jan..Apr 1990
    // (31 + 28 + 31 + 30) and 14 more days.
    let expected = 90 * 365 + 22 + 120 + 14;
    assert_eq!(days_since_day_count_epoch(1990, 5, 15), expected);
    assert_eq!(expected, 33_006);
}

#[test]
fn day_count_for_2000_01_01() {
    assert_eq!(days_since_day_count_epoch(2000, 1, 1), 36_524);
}

#[test]
fn overflowed_dates_count_like_their_normalised_form() {
    assert_eq!(
        days_since_day_count_epoch(1990, 2, 30),
        days_since_day_count_epoch(1990, 3, 2)
    );
    assert_eq!(
        days_since_day_count_epoch(2023, 13, 1),
        days_since_day_count_epoch(2024, 1, 1)
    );
}

#[test]
fn consecutive_days_differ_by_one() {
    let mut prev = days_since_day_count_epoch(1899, 12, 1);
    let mut date = CivilDate::new(1899, 12, 1).unwrap();
    for _ in 0..800 {
        date = date.add_days(1);
        let n = days_since_day_count_epoch(date.year, date.month as i32, date.day as i32);
        assert_eq!(n, prev + 1, "at {date}");
        prev = n;
    }
}

// ---------------------------------------------------------------------------
// Julian Day
// ---------------------------------------------------------------------------

#[test]
fn jd_matches_day_count_spacing() {
    let a = calendar_to_jd(1990, 5, 15.0);
    let b = calendar_to_jd(1900, 1, 1.0);
    assert!((a - b - 33_006.0).abs() < 1e-9);
}

#[test]
fn days_since_j2000_at_noon() {
    let d = days_since_j2000(1990, 5, 15, 12.0);
    assert!((d - (-3518.0)).abs() < 1e-9, "d = {d}");
}

// ---------------------------------------------------------------------------
// Solar-term months
// ---------------------------------------------------------------------------

#[test]
fn each_term_start_day_opens_its_month() {
    for term in ALL_SOLAR_TERMS {
        assert_eq!(
            solar_term_month(term.start_month(), term.start_day()),
            term.saju_month(),
            "{}",
            term.korean()
        );
    }
}

#[test]
fn day_before_each_term_belongs_to_previous_month() {
    for term in ALL_SOLAR_TERMS {
        let prev = if term.saju_month() == 1 {
            12
        } else {
            term.saju_month() - 1
        };
        assert_eq!(
            solar_term_month(term.start_month(), term.start_day() - 1),
            prev,
            "day before {}",
            term.korean()
        );
    }
}

#[test]
fn every_calendar_day_maps_into_range() {
    for month in 1..=12u32 {
        for day in 1..=31u32 {
            let m = solar_term_month(month, day);
            assert!((1..=12).contains(&m), "{month}/{day} -> {m}");
        }
    }
}
