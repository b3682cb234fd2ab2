//! Hidden stems (지장간) carried inside each branch.
//!
//! Ratios per branch sum to 100.

use serde::Serialize;

use crate::branch::Branch;
use crate::calendar::{FourPillars, PillarPosition};
use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// A stem hidden in a branch, with its share in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub ratio: u8,
}

const fn hs(stem: Stem, ratio: u8) -> HiddenStem {
    HiddenStem { stem, ratio }
}

const JA: [HiddenStem; 1] = [hs(Stem::Gye, 100)];
const CHUK: [HiddenStem; 3] = [hs(Stem::Gi, 60), hs(Stem::Gye, 30), hs(Stem::Sin, 10)];
const IN: [HiddenStem; 3] = [hs(Stem::Gap, 60), hs(Stem::Byeong, 30), hs(Stem::Mu, 10)];
const MYO: [HiddenStem; 1] = [hs(Stem::Eul, 100)];
const JIN: [HiddenStem; 3] = [hs(Stem::Mu, 60), hs(Stem::Eul, 30), hs(Stem::Gye, 10)];
const SA: [HiddenStem; 3] = [hs(Stem::Byeong, 60), hs(Stem::Mu, 30), hs(Stem::Gyeong, 10)];
const O: [HiddenStem; 2] = [hs(Stem::Jeong, 70), hs(Stem::Gi, 30)];
const MI: [HiddenStem; 3] = [hs(Stem::Gi, 60), hs(Stem::Jeong, 30), hs(Stem::Eul, 10)];
const SIN: [HiddenStem; 3] = [hs(Stem::Gyeong, 60), hs(Stem::Im, 30), hs(Stem::Mu, 10)];
const YU: [HiddenStem; 1] = [hs(Stem::Sin, 100)];
const SUL: [HiddenStem; 3] = [hs(Stem::Mu, 60), hs(Stem::Sin, 30), hs(Stem::Jeong, 10)];
const HAE: [HiddenStem; 2] = [hs(Stem::Im, 70), hs(Stem::Gap, 30)];

/// Hidden stems of `branch`, strongest first.
pub const fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    match branch {
        Branch::Ja => &JA,
        Branch::Chuk => &CHUK,
        Branch::In => &IN,
        Branch::Myo => &MYO,
        Branch::Jin => &JIN,
        Branch::Sa => &SA,
        Branch::O => &O,
        Branch::Mi => &MI,
        Branch::Sin => &SIN,
        Branch::Yu => &YU,
        Branch::Sul => &SUL,
        Branch::Hae => &HAE,
    }
}

/// Strength tier of a hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HiddenStemTier {
    /// 본기, ratio ≥ 60.
    #[serde(rename = "본기")]
    Primary,
    /// 중기, ratio ≥ 30.
    #[serde(rename = "중기")]
    Middle,
    /// 여기, anything weaker.
    #[serde(rename = "여기")]
    Residual,
}

impl HiddenStemTier {
    pub const fn from_ratio(ratio: u8) -> Self {
        if ratio >= 60 {
            Self::Primary
        } else if ratio >= 30 {
            Self::Middle
        } else {
            Self::Residual
        }
    }
}

/// A hidden stem with its attributes resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStemEntry {
    pub stem: Stem,
    pub korean: &'static str,
    pub element: Element,
    pub polarity: Polarity,
    pub ratio: u8,
    pub tier: HiddenStemTier,
}

impl From<HiddenStem> for HiddenStemEntry {
    fn from(h: HiddenStem) -> Self {
        Self {
            stem: h.stem,
            korean: h.stem.korean(),
            element: h.stem.element(),
            polarity: h.stem.polarity(),
            ratio: h.ratio,
            tier: HiddenStemTier::from_ratio(h.ratio),
        }
    }
}

/// Hidden-stem breakdown of one pillar's branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarHiddenStems {
    pub position: PillarPosition,
    pub label: &'static str,
    pub branch: Branch,
    pub stems: Vec<HiddenStemEntry>,
}

/// Breakdown for all four branches, in chart order.
pub fn analyze_hidden_stems(pillars: &FourPillars) -> Vec<PillarHiddenStems> {
    pillars
        .iter()
        .map(|(position, pillar)| PillarHiddenStems {
            position,
            label: position.branch_label(),
            branch: pillar.branch(),
            stems: hidden_stems(pillar.branch())
                .iter()
                .copied()
                .map(HiddenStemEntry::from)
                .collect(),
        })
        .collect()
}
