//! The twelve "jeol" solar terms that open each Saju month.
//!
//! Boundaries are fixed average calendar dates, not solar-longitude
//! crossings; a date on or after a term's start day belongs to that term's
//! month. Month 1 (寅 month) opens at 입춘 on Feb 4; month 12 (丑 month)
//! opens at 소한 on Jan 6.

use serde::Serialize;

/// A month-opening solar term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 terms in Saju-month order (index 0 = 입춘, month 1).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

impl SolarTerm {
    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
            Self::Sohan => "소한",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "清明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
            Self::Sohan => "小寒",
        }
    }

    /// 0-based index in [`ALL_SOLAR_TERMS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Saju month (1-12) this term opens.
    pub const fn saju_month(self) -> u32 {
        self as u32 + 1
    }

    /// Calendar month in which the term starts.
    pub const fn start_month(self) -> u32 {
        match self {
            Self::Sohan => 1,
            other => other as u32 + 2,
        }
    }

    /// Average calendar day on which the term starts.
    pub const fn start_day(self) -> u32 {
        match self {
            Self::Ipchun => 4,
            Self::Gyeongchip => 6,
            Self::Cheongmyeong => 5,
            Self::Ipha => 6,
            Self::Mangjong => 6,
            Self::Soseo => 7,
            Self::Ipchu => 8,
            Self::Baengno => 8,
            Self::Hallo => 9,
            Self::Ipdong => 8,
            Self::Daeseol => 7,
            Self::Sohan => 6,
        }
    }

    /// The following term (wraps 소한 → 입춘).
    pub const fn next(self) -> SolarTerm {
        ALL_SOLAR_TERMS[(self.index() as usize + 1) % 12]
    }
}

/// The term whose start date falls in calendar `month`, if any.
pub fn term_starting_in(month: u32) -> Option<SolarTerm> {
    ALL_SOLAR_TERMS
        .iter()
        .copied()
        .find(|t| t.start_month() == month)
}

/// Saju month (1-12) for a calendar month/day.
///
/// Scans each term interval [term start, next term start). Values outside
/// the calendar (month 13, day 40) still resolve: the scan falls back to
/// the term starting in that month, then to a positional mapping.
pub fn solar_term_month(month: u32, day: u32) -> u32 {
    for term in ALL_SOLAR_TERMS {
        let next = term.next();
        if month == term.start_month() {
            if day >= term.start_day() {
                return term.saju_month();
            }
        } else if month == next.start_month() && day < next.start_day() {
            return term.saju_month();
        }
    }

    if let Some(term) = term_starting_in(month) {
        return term.saju_month();
    }

    if month == 1 && day < 6 {
        return 12;
    }

    ((month + 10) % 12) + 1
}
