//! Four Pillars from a Gregorian birth date and hour.
//!
//! - Year: changes at 입춘, fixed to Feb 4. Cycle index `(year − 1984) mod 60`
//!   (1984 = 甲子).
//! - Month: solar-term month `m` (1 = 寅 month), branch `(m + 1) mod 12`,
//!   stem from the year stem by the "five tigers" rule.
//! - Day: days since 1900-01-01 (甲戌, index 10).
//! - Hour: two-hour branch windows starting at 23:00, stem from the day
//!   stem by the "five rats" rule.
//!
//! All four functions are total. Only the day pillar rolls an overflowed
//! date (Feb 30, month 13) into a real one; year and month compare the raw
//! fields.

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_time::{GeoLocation, TimeError, days_since_day_count_epoch, solar_term_month};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::sexagenary::{Pillar, pillar_at};
use crate::stem::Stem;

/// Reference year of the year cycle (甲子).
pub const YEAR_CYCLE_EPOCH: i32 = 1984;
/// Cycle index of 1900-01-01 (甲戌).
pub const DAY_CYCLE_OFFSET: i64 = 10;

/// First month stem for year stems 甲己, 乙庚, 丙辛, 丁壬, 戊癸 (丙, 戊, 庚, 壬, 甲).
const MONTH_STEM_START: [u8; 5] = [2, 4, 6, 8, 0];
/// First hour stem for day stems 甲己, 乙庚, 丙辛, 丁壬, 戊癸 (甲, 丙, 戊, 庚, 壬).
const HOUR_STEM_START: [u8; 5] = [0, 2, 4, 6, 8];

/// Year pillar; dates before Feb 4 belong to the previous year.
pub fn year_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let adjusted = if month < 2 || (month == 2 && day < 4) {
        year as i64 - 1
    } else {
        year as i64
    };
    pillar_at(adjusted - YEAR_CYCLE_EPOCH as i64)
}

/// Month pillar for a calendar month/day and the year's stem.
pub fn month_pillar(month: u32, day: u32, year_stem: Stem) -> Pillar {
    let lunar_month = solar_term_month(month, day) as i64;
    let branch = Branch::from_index(lunar_month + 1);
    let start = MONTH_STEM_START[year_stem.index() as usize % 5] as i64;
    let stem = Stem::from_index(start + lunar_month - 1);
    compose(stem, branch)
}

/// Day pillar. Out-of-range month/day values roll over like a JavaScript
/// `Date` before counting.
pub fn day_pillar(year: i32, month: i32, day: i32) -> Pillar {
    pillar_at(days_since_day_count_epoch(year, month, day) + DAY_CYCLE_OFFSET)
}

/// Branch of the two-hour window containing `hour` (23:00-00:59 → 子).
pub fn hour_branch(hour: u32) -> Branch {
    if hour >= 23 || hour < 1 {
        Branch::Ja
    } else {
        Branch::from_index(((hour + 1) / 2) as i64)
    }
}

/// Hour pillar for a clock hour and the day's stem.
pub fn hour_pillar(hour: u32, day_stem: Stem) -> Pillar {
    let branch = hour_branch(hour);
    let start = HOUR_STEM_START[day_stem.index() as usize % 5] as i64;
    let stem = Stem::from_index(start + branch.index() as i64);
    compose(stem, branch)
}

// Both stem rules start on an even stem at an even branch offset, so the
// pair always shares polarity.
fn compose(stem: Stem, branch: Branch) -> Pillar {
    let s = stem.index() as i64;
    let b = branch.index() as i64;
    pillar_at(6 * s - 5 * b)
}

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Korean label of this pillar's stem slot (년간, 월간, ...).
    pub const fn stem_label(self) -> &'static str {
        match self {
            Self::Year => "년간",
            Self::Month => "월간",
            Self::Day => "일간",
            Self::Hour => "시간",
        }
    }

    /// Korean label of this pillar's branch slot (년지, 월지, ...).
    pub const fn branch_label(self) -> &'static str {
        match self {
            Self::Year => "년지",
            Self::Month => "월지",
            Self::Day => "일지",
            Self::Hour => "시지",
        }
    }
}

/// The year, month, day and hour pillars of one birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Computes all four pillars from raw birth fields.
    pub fn compute(year: i32, month: u32, day: u32, hour: u32) -> Self {
        let y = year_pillar(year, month, day);
        let m = month_pillar(month, day, y.stem());
        let d = day_pillar(year, month as i32, day as i32);
        let h = hour_pillar(hour, d.stem());
        Self {
            year: y,
            month: m,
            day: d,
            hour: h,
        }
    }

    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// `(position, pillar)` in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.iter().map(|p| (*p, self.get(*p)))
    }

    pub fn branches(&self) -> [Branch; 4] {
        ALL_POSITIONS.map(|p| self.get(p).branch())
    }

    pub fn stems(&self) -> [Stem; 4] {
        ALL_POSITIONS.map(|p| self.get(p).stem())
    }

    /// The day stem (日干, "day master").
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }
}

/// Gender, which fixes the luck-pillar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::str::FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(SajuError::UnknownGender(s.to_string())),
        }
    }
}

/// Raw birth facts as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthFacts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub location: Option<GeoLocation>,
}

impl BirthFacts {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute: 0,
            location: None,
        }
    }

    pub fn with_minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Range checks: year 1-9999, month 1-12, day 1-31, hour 0-23,
    /// minute 0-59, location on the sphere.
    ///
    /// Day is not checked against the month length; Feb 30 is accepted and
    /// rolls over in the day pillar.
    pub fn validate(&self) -> Result<(), SajuError> {
        if !(1..=9999).contains(&self.year) {
            return Err(SajuError::InvalidInput {
                field: "year",
                value: self.year as i64,
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
        if let Some(loc) = &self.location {
            loc.validate()?;
        }
        Ok(())
    }
}

/// One birth event: the four pillars plus the facts they came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SajuChart {
    pub pillars: FourPillars,
    pub gender: Gender,
    pub birth: BirthFacts,
}

impl SajuChart {
    /// Validates the birth facts and computes the pillars.
    pub fn new(birth: BirthFacts, gender: Gender) -> Result<Self, SajuError> {
        birth.validate()?;
        let pillars = FourPillars::compute(birth.year, birth.month, birth.day, birth.hour);
        debug!(
            year = %pillars.year,
            month = %pillars.month,
            day = %pillars.day,
            hour = %pillars.hour,
            "four pillars computed"
        );
        Ok(Self {
            pillars,
            gender,
            birth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_epoch_is_gapja() {
        let p = year_pillar(1984, 3, 1);
        assert_eq!(p.cycle_index(), 0);
        assert_eq!(p.name(), "甲子");
    }

    #[test]
    fn year_changes_at_feb_4() {
        assert_eq!(year_pillar(1984, 2, 3).name(), "癸亥");
        assert_eq!(year_pillar(1984, 2, 4).name(), "甲子");
        assert_eq!(year_pillar(1984, 1, 31).name(), "癸亥");
    }

    #[test]
    fn year_before_epoch_wraps() {
        assert_eq!(year_pillar(1983, 6, 1).cycle_index(), 59);
        assert_eq!(year_pillar(1924, 6, 1).cycle_index(), 0);
    }

    #[test]
    fn day_epoch_is_gapsul() {
        let p = day_pillar(1900, 1, 1);
        assert_eq!(p.cycle_index(), 10);
        assert_eq!(p.name(), "甲戌");
    }

    #[test]
    fn day_before_epoch() {
        assert_eq!(day_pillar(1899, 12, 31).cycle_index(), 9);
    }

    #[test]
    fn overflowed_day_matches_rolled_date() {
        assert_eq!(day_pillar(1990, 2, 30), day_pillar(1990, 3, 2));
    }

    #[test]
    fn month_pillar_five_tigers() {
        // 甲 year: 寅 month is 丙寅
        assert_eq!(month_pillar(2, 10, Stem::Gap).name(), "丙寅");
        // 庚 year, May 15 (입하 month) → 辛巳
        assert_eq!(month_pillar(5, 15, Stem::Gyeong).name(), "辛巳");
        // Early January falls in the 子 month
        assert_eq!(month_pillar(1, 2, Stem::Gap).branch(), Branch::Ja);
    }

    #[test]
    fn hour_branches() {
        assert_eq!(hour_branch(23), Branch::Ja);
        assert_eq!(hour_branch(0), Branch::Ja);
        assert_eq!(hour_branch(1), Branch::Chuk);
        assert_eq!(hour_branch(2), Branch::Chuk);
        assert_eq!(hour_branch(14), Branch::Mi);
        assert_eq!(hour_branch(22), Branch::Hae);
    }

    #[test]
    fn hour_pillar_five_rats() {
        assert_eq!(hour_pillar(0, Stem::Gap).name(), "甲子");
        assert_eq!(hour_pillar(0, Stem::Eul).name(), "丙子");
        assert_eq!(hour_pillar(14, Stem::Gyeong).name(), "癸未");
    }

    #[test]
    fn every_day_and_hour_pillar_is_in_cycle() {
        for stem in crate::stem::ALL_STEMS {
            for hour in 0..24 {
                let p = hour_pillar(hour, stem);
                assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
            }
            for day in 1..=31 {
                let p = month_pillar(7, day, stem);
                assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
            }
        }
    }

    #[test]
    fn validation() {
        assert!(BirthFacts::new(1990, 5, 15, 14).validate().is_ok());
        assert!(BirthFacts::new(1990, 2, 30, 14).validate().is_ok());
        assert!(BirthFacts::new(1990, 13, 1, 0).validate().is_err());
        assert!(BirthFacts::new(1990, 1, 32, 0).validate().is_err());
        assert!(BirthFacts::new(1990, 1, 1, 24).validate().is_err());
        assert!(BirthFacts::new(0, 1, 1, 0).validate().is_err());
        assert!(BirthFacts::new(1990, 1, 1, 0).with_minute(60).validate().is_err());
        let far = BirthFacts::new(1990, 1, 1, 0).with_location(GeoLocation::new(95.0, 0.0));
        assert!(far.validate().is_err());
    }

    #[test]
    fn gender_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }
}
