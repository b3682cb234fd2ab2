//! Angular aspects between chart bodies.
//!
//! Every pair of bodies is checked once, in chart order. The separation
//! is folded onto [0, 180] and the first definition whose orb contains it
//! wins; major aspects are always tried before minor ones.

use serde::{Deserialize, Serialize};

use saju_math::angular_separation;

use crate::planet::Planet;

/// Whether an aspect eases or strains the bodies involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectEffect {
    Positive,
    Neutral,
    Challenging,
}

/// Which aspect definitions a scan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectSet {
    /// The five Ptolemaic aspects.
    #[default]
    Major,
    /// Major aspects plus the four minor ones.
    All,
}

impl AspectSet {
    pub fn kinds(self) -> &'static [AspectKind] {
        match self {
            Self::Major => &ALL_ASPECTS[..5],
            Self::All => &ALL_ASPECTS,
        }
    }
}

impl std::str::FromStr for AspectSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "all" => Ok(Self::All),
            other => Err(format!("unknown aspect set {other:?} (expected major or all)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    SemiSextile,
    Quincunx,
    SemiSquare,
    Sesquiquadrate,
}

/// Major aspects first, then minor, in scan order.
pub const ALL_ASPECTS: [AspectKind; 9] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
    AspectKind::SemiSextile,
    AspectKind::Quincunx,
    AspectKind::SemiSquare,
    AspectKind::Sesquiquadrate,
];

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
            Self::SemiSextile => "Semi-sextile",
            Self::Quincunx => "Quincunx",
            Self::SemiSquare => "Semi-square",
            Self::Sesquiquadrate => "Sesquiquadrate",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Conjunction => "합",
            Self::Sextile => "육분",
            Self::Square => "직각",
            Self::Trine => "삼합",
            Self::Opposition => "충",
            Self::SemiSextile => "반육분",
            Self::Quincunx => "인컨정션",
            Self::SemiSquare => "반직각",
            Self::Sesquiquadrate => "세스퀘어",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Conjunction => "☌",
            Self::Sextile => "⚹",
            Self::Square => "□",
            Self::Trine => "△",
            Self::Opposition => "☍",
            Self::SemiSextile => "⚺",
            Self::Quincunx => "⚻",
            Self::SemiSquare => "∠",
            Self::Sesquiquadrate => "⚼",
        }
    }

    /// Exact angle in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
            Self::SemiSextile => 30.0,
            Self::Quincunx => 150.0,
            Self::SemiSquare => 45.0,
            Self::Sesquiquadrate => 135.0,
        }
    }

    /// Allowed deviation from the exact angle, degrees.
    pub const fn orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition => 10.0,
            Self::Square | Self::Trine => 8.0,
            Self::Sextile => 6.0,
            Self::Quincunx => 3.0,
            Self::SemiSextile | Self::SemiSquare | Self::Sesquiquadrate => 2.0,
        }
    }

    pub const fn effect(self) -> AspectEffect {
        match self {
            Self::Sextile | Self::Trine => AspectEffect::Positive,
            Self::Conjunction | Self::SemiSextile => AspectEffect::Neutral,
            _ => AspectEffect::Challenging,
        }
    }

    pub const fn is_major(self) -> bool {
        (self as usize) < 5
    }
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How close an aspect is to exact, as a share of its orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectStrength {
    /// Within a quarter of the orb.
    Exact,
    Strong,
    Moderate,
    Weak,
}

impl AspectStrength {
    pub fn from_orb_ratio(ratio: f64) -> Self {
        if ratio <= 0.25 {
            Self::Exact
        } else if ratio <= 0.5 {
            Self::Strong
        } else if ratio <= 0.75 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// First aspect in `set` whose orb contains `separation` (0..=180).
pub fn match_aspect(separation_deg: f64, set: AspectSet) -> Option<AspectKind> {
    set.kinds()
        .iter()
        .copied()
        .find(|k| (separation_deg - k.angle()).abs() <= k.orb())
}

/// One aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub first: Planet,
    pub second: Planet,
    pub kind: AspectKind,
    pub effect: AspectEffect,
    /// Folded separation in degrees.
    pub separation: f64,
    /// Deviation from the exact angle.
    pub orb: f64,
    pub strength: AspectStrength,
    /// Simplified: the first body sits at a lower longitude.
    pub applying: bool,
}

/// Scans every pair of `(planet, longitude)` entries in order.
pub fn find_aspects(bodies: &[(Planet, f64)], set: AspectSet) -> Vec<Aspect> {
    let mut out = Vec::new();
    for (i, (first, lon1)) in bodies.iter().enumerate() {
        for (second, lon2) in &bodies[i + 1..] {
            let separation = angular_separation(*lon1, *lon2);
            if let Some(kind) = match_aspect(separation, set) {
                let orb = (separation - kind.angle()).abs();
                out.push(Aspect {
                    first: *first,
                    second: *second,
                    kind,
                    effect: kind.effect(),
                    separation,
                    orb,
                    strength: AspectStrength::from_orb_ratio(orb / kind.orb()),
                    applying: lon1 < lon2,
                });
            }
        }
    }
    out
}

/// Counts `(positive, challenging)` aspects.
pub fn effect_counts(aspects: &[Aspect]) -> (u32, u32) {
    aspects.iter().fold((0, 0), |(pos, ch), a| match a.effect {
        AspectEffect::Positive => (pos + 1, ch),
        AspectEffect::Challenging => (pos, ch + 1),
        AspectEffect::Neutral => (pos, ch),
    })
}
