//! Birth date and clock time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::SajuRsError;

/// Hour assumed when a string carries only a date.
pub const DEFAULT_HOUR: u32 = 12;

/// Local civil date and time of birth, to the minute.
///
/// Fields are not range-checked here; the engines validate them when a
/// chart is built, so `1990-02-30` can still roll over into March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BirthDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl BirthDateTime {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

impl From<NaiveDateTime> for BirthDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }
}

impl Display for BirthDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl FromStr for BirthDateTime {
    type Err = SajuRsError;

    /// Accepts `YYYY-MM-DDTHH:MM`, `YYYY-MM-DD HH:MM` (optionally with
    /// seconds, which are dropped) or a bare `YYYY-MM-DD` at noon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        const FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M:%S",
        ];
        if let Some(dt) = FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Ok(dt.into());
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|d| Self::new(d.year(), d.month(), d.day(), DEFAULT_HOUR, 0))
            .map_err(|_| SajuRsError::Parse {
                what: "birth date",
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_forms() {
        let expected = BirthDateTime::new(1990, 5, 15, 14, 0);
        assert_eq!("1990-05-15T14:00".parse::<BirthDateTime>().unwrap(), expected);
        assert_eq!("1990-05-15 14:00".parse::<BirthDateTime>().unwrap(), expected);
        assert_eq!(" 1990-05-15T14:00:59 ".parse::<BirthDateTime>().unwrap(), expected);
        assert_eq!(
            "1990-05-15".parse::<BirthDateTime>().unwrap(),
            BirthDateTime::new(1990, 5, 15, DEFAULT_HOUR, 0)
        );
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "1990/05/15", "1990-13-01", "1990-05-15T25:00", "tomorrow"] {
            assert!(bad.parse::<BirthDateTime>().is_err(), "{bad}");
        }
    }

    #[test]
    fn display_round_trips() {
        let dt = BirthDateTime::new(2001, 1, 2, 3, 4);
        assert_eq!(dt.to_string(), "2001-01-02T03:04");
        assert_eq!(dt.to_string().parse::<BirthDateTime>().unwrap(), dt);
    }
}
