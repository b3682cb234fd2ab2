//! Ten-year luck pillars (대운).
//!
//! The sequence steps away from the month pillar, one cycle position per
//! decade of life. Direction depends on gender and year-stem polarity; the
//! start age comes from the distance to the nearest month-opening solar
//! term, three days counting as one year.

use serde::Serialize;
use tracing::debug;

use saju_math::round_half_up;
use saju_time::term_starting_in;

use crate::calendar::{Gender, SajuChart};
use crate::sexagenary::Pillar;
use crate::stem::Stem;

/// Number of luck pillars produced for a chart.
pub const DAEUN_COUNT: usize = 10;

/// Which way the luck pillars walk the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Forward => "순행",
            Self::Backward => "역행",
        }
    }
}

/// Forward for a man born in a yang year or a woman born in a yin year.
pub const fn daeun_direction(gender: Gender, year_stem: Stem) -> Direction {
    let yang = year_stem.polarity().is_yang();
    match (gender, yang) {
        (Gender::Male, true) | (Gender::Female, false) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// Age at which the first luck pillar begins, in [1, 10].
pub fn daeun_start_age(month: u32, day: u32, direction: Direction) -> u32 {
    let days = match direction {
        Direction::Forward => {
            let start_day = term_starting_in(month)
                .or_else(|| term_starting_in(month % 12 + 1))
                .map_or(day, |t| t.start_day());
            start_day.abs_diff(day) + 30
        }
        Direction::Backward => day.saturating_sub(1) + 5,
    };
    (round_half_up(f64::from(days) / 3.0) as u32).clamp(1, 10)
}

/// One decade of the luck sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckPillar {
    /// 1-based position in the sequence.
    pub index: u8,
    pub pillar: Pillar,
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl LuckPillar {
    pub const fn contains_year(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Daeun {
    pub direction: Direction,
    pub start_age: u32,
    pub pillars: [LuckPillar; DAEUN_COUNT],
}

impl Daeun {
    /// The luck pillar covering `year`, if the year falls inside the
    /// hundred years the sequence spans.
    pub fn current(&self, year: i32) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.contains_year(year))
    }
}

/// Builds the ten luck pillars for a chart.
pub fn daeun(chart: &SajuChart) -> Daeun {
    let direction = daeun_direction(chart.gender, chart.pillars.year.stem());
    let start_age = daeun_start_age(chart.birth.month, chart.birth.day, direction);
    let month = chart.pillars.month;
    let birth_year = chart.birth.year;

    let pillars = std::array::from_fn(|i| {
        let steps = (i as i64 + 1) * direction.sign();
        let start = start_age + 10 * i as u32;
        let start_year = birth_year + start as i32;
        LuckPillar {
            index: i as u8 + 1,
            pillar: month.offset(steps),
            start_age: start,
            end_age: start + 9,
            start_year,
            end_year: start_year + 9,
        }
    });

    debug!(
        direction = direction.korean(),
        start_age,
        first = %pillars[0].pillar,
        "luck pillars computed"
    );

    Daeun {
        direction,
        start_age,
        pillars,
    }
}
