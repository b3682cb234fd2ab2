//! Tropical zodiac signs and sign positions.
//!
//! The ecliptic is split into 12 signs of 30 degrees starting at Aries
//! (0 deg). Each sign carries a classical element, a quality (modality)
//! and a modern ruling planet.

use serde::Serialize;

use saju_math::normalize_360;

use crate::planet::Planet;

/// Western element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AstroElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// All four elements in tally order.
pub const ALL_ASTRO_ELEMENTS: [AstroElement; 4] = [
    AstroElement::Fire,
    AstroElement::Earth,
    AstroElement::Air,
    AstroElement::Water,
];

impl AstroElement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Fire => "불",
            Self::Earth => "땅",
            Self::Air => "공기",
            Self::Water => "물",
        }
    }

    /// 0-based index in [`ALL_ASTRO_ELEMENTS`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for AstroElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

/// All three qualities in tally order.
pub const ALL_QUALITIES: [Quality; 3] = [Quality::Cardinal, Quality::Fixed, Quality::Mutable];

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Cardinal => "활동궁",
            Self::Fixed => "고정궁",
            Self::Mutable => "변통궁",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Aries => "양자리",
            Self::Taurus => "황소자리",
            Self::Gemini => "쌍둥이자리",
            Self::Cancer => "게자리",
            Self::Leo => "사자자리",
            Self::Virgo => "처녀자리",
            Self::Libra => "천칭자리",
            Self::Scorpio => "전갈자리",
            Self::Sagittarius => "사수자리",
            Self::Capricorn => "염소자리",
            Self::Aquarius => "물병자리",
            Self::Pisces => "물고기자리",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// 0-based index (Aries = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> ZodiacSign {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// Fire, earth, air, water repeating from Aries.
    pub const fn element(self) -> AstroElement {
        ALL_ASTRO_ELEMENTS[(self as usize) % 4]
    }

    /// Cardinal, fixed, mutable repeating from Aries.
    pub const fn quality(self) -> Quality {
        ALL_QUALITIES[(self as usize) % 3]
    }

    /// Modern ruler (Scorpio, Aquarius and Pisces take the outer planets).
    pub const fn ruler(self) -> Planet {
        match self {
            Self::Aries => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Scorpio => Planet::Pluto,
            Self::Sagittarius => Planet::Jupiter,
            Self::Capricorn => Planet::Saturn,
            Self::Aquarius => Planet::Uranus,
            Self::Pisces => Planet::Neptune,
        }
    }

    /// The sign 180 degrees away.
    pub const fn opposite(self) -> ZodiacSign {
        Self::from_index(self.index() + 6)
    }

    /// Ecliptic longitude where the sign begins.
    pub const fn start_degree(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude expressed as sign + degrees/minutes within the sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    pub sign_index: u8,
    /// Whole degrees within the sign (0..29).
    pub degree: u8,
    /// Whole arc-minutes (0..59).
    pub minute: u8,
    /// Ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// e.g. `Taurus 24° 23'`.
    pub formatted: String,
}

/// Sign and in-sign position for an ecliptic longitude.
pub fn sign_position(longitude_deg: f64) -> SignPosition {
    let lon = normalize_360(longitude_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_index = ((lon / 30.0).floor() as u8).min(11);
    let in_sign = lon - f64::from(sign_index) * 30.0;
    let degree = (in_sign.floor() as u8).min(29);
    let minute = ((in_sign.fract() * 60.0).floor() as u8).min(59);
    let sign = ZodiacSign::from_index(sign_index);

    SignPosition {
        sign,
        sign_index,
        degree,
        minute,
        longitude: lon,
        formatted: format!("{} {degree}° {minute}'", sign.name()),
    }
}

/// First calendar day of each sign's sun season, Aries first.
const SUN_SIGN_STARTS: [(u32, u32); 12] = [
    (3, 21),
    (4, 20),
    (5, 21),
    (6, 21),
    (7, 23),
    (8, 23),
    (9, 23),
    (10, 23),
    (11, 22),
    (12, 22),
    (1, 20),
    (2, 19),
];

/// Sun sign from the calendar date table.
///
/// Each sign runs from its start day to the day before the next sign's
/// start; Capricorn wraps the year end. Dates outside every range (month
/// 13, day 0) fall back to Aries.
pub fn sun_sign(month: u32, day: u32) -> ZodiacSign {
    for (i, (start_month, start_day)) in SUN_SIGN_STARTS.iter().enumerate() {
        let (end_month, next_day) = SUN_SIGN_STARTS[(i + 1) % 12];
        let end_day = next_day - 1;
        if (month == *start_month && day >= *start_day) || (month == end_month && day <= end_day)
        {
            return ALL_SIGNS[i];
        }
    }
    ZodiacSign::Aries
}
