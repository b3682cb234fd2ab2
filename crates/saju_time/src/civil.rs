//! Proleptic Gregorian civil dates and day counts.
//!
//! Day counts use the days-from-civil algorithm (H. Hinnant, public domain)
//! with 1970-01-01 as day 0. [`CivilDate::normalized`] reproduces how a
//! JavaScript `new Date(y, m - 1, d)` rolls out-of-range fields over:
//! months outside 1..12 carry into the year, and days past the end (or
//! before the start) of the month carry across month boundaries.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for invalid months.
pub const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a valid Gregorian date.
pub const fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: (year, month, day) for a day number.
pub const fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + (if month <= 2 { 1 } else { 0 });
    (year, month, day)
}

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Reference date for pillar day counts: 1900-01-01.
pub const DAY_COUNT_EPOCH: CivilDate = CivilDate {
    year: 1900,
    month: 1,
    day: 1,
};

impl CivilDate {
    /// Strict constructor: rejects months outside 1..12 and days past the
    /// end of the month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::MonthOutOfRange(month));
        }
        let max = days_in_month(year as i64, month);
        if day == 0 || day > max {
            return Err(TimeError::DayOutOfRange { day, max });
        }
        Ok(Self { year, month, day })
    }

    /// Lenient constructor with `Date`-style rollover.
    ///
    /// `normalized(1990, 2, 30)` is 1990-03-02; `normalized(2024, 3, 0)` is
    /// 2024-02-29; `normalized(2023, 13, 1)` is 2024-01-01.
    pub fn normalized(year: i32, month: i32, day: i32) -> Self {
        let m0 = month as i64 - 1;
        let y = year as i64 + m0.div_euclid(12);
        let m = (m0.rem_euclid(12) + 1) as u32;
        let first = days_from_civil(y, m, 1);
        Self::from_day_number(first + day as i64 - 1)
    }

    /// Date for a day number counted from 1970-01-01.
    pub fn from_day_number(days: i64) -> Self {
        let (y, month, day) = civil_from_days(days);
        Self {
            year: y as i32,
            month,
            day,
        }
    }

    /// Days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year as i64, self.month, self.day)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CivilDate) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The date `n` days later (or earlier for negative `n`).
    pub fn add_days(&self, n: i64) -> Self {
        Self::from_day_number(self.day_number() + n)
    }

    /// Number of days in this date's month.
    pub fn month_length(&self) -> u32 {
        days_in_month(self.year as i64, self.month)
    }
}

/// Days from 1900-01-01 to the (normalised) date `year-month-day`.
///
/// Negative before the epoch. Pure calendar count: no time zone or
/// daylight-saving offset is involved.
pub fn days_since_day_count_epoch(year: i32, month: i32, day: i32) -> i64 {
    DAY_COUNT_EPOCH.days_until(&CivilDate::normalized(year, month, day))
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeError::Parse(s.to_string());
        let trimmed = s.trim();
        // Leading '-' belongs to a negative year, so split from the right.
        let mut parts = trimmed.rsplitn(3, '-');
        let day = parts.next().ok_or_else(parse_err)?;
        let month = parts.next().ok_or_else(parse_err)?;
        let year = parts.next().ok_or_else(parse_err)?;
        let year: i32 = year.parse().map_err(|_| parse_err())?;
        let month: u32 = month.parse().map_err(|_| parse_err())?;
        let day: u32 = day.parse().map_err(|_| parse_err())?;
        CivilDate::new(year, month, day)
    }
}
