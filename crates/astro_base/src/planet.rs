//! The ten chart bodies (Sun and Moon counted as planets).

use serde::Serialize;

/// A chart body, in the fixed order used for every listing and aspect scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All ten bodies in chart order.
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

/// Broad classification of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetKind {
    Luminary,
    Inner,
    Outer,
}

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Sun => "태양",
            Self::Moon => "달",
            Self::Mercury => "수성",
            Self::Venus => "금성",
            Self::Mars => "화성",
            Self::Jupiter => "목성",
            Self::Saturn => "토성",
            Self::Uranus => "천왕성",
            Self::Neptune => "해왕성",
            Self::Pluto => "명왕성",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
        }
    }

    pub const fn kind(self) -> PlanetKind {
        match self {
            Self::Sun | Self::Moon => PlanetKind::Luminary,
            Self::Mercury | Self::Venus => PlanetKind::Inner,
            _ => PlanetKind::Outer,
        }
    }

    /// Sidereal orbital period in days.
    pub const fn orbit_days(self) -> f64 {
        match self {
            Self::Sun => 365.25,
            Self::Moon => 27.32,
            Self::Mercury => 87.97,
            Self::Venus => 224.7,
            Self::Mars => 686.98,
            Self::Jupiter => 4332.59,
            Self::Saturn => 10759.22,
            Self::Uranus => 30688.5,
            Self::Neptune => 60182.0,
            Self::Pluto => 90560.0,
        }
    }

    /// 0-based index in [`ALL_PLANETS`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
