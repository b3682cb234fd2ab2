//! Twelve life stages (12신살 / 12운성) of each branch, read from the day
//! branch's row.
//!
//! Each row is the same sequence starting from 제왕 at the day branch
//! itself, so the table reduces to `order[(target − day) mod 12]`.

use serde::Serialize;

use crate::branch::Branch;
use crate::calendar::{ALL_POSITIONS, FourPillars, PillarPosition};

/// A stage of the twelve-phase life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    Jangsaeng,
    Mogyok,
    Gwandae,
    Geonrok,
    Jewang,
    Soe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

/// Stage sequence starting at the day branch.
const ROW_FROM_DAY_BRANCH: [LifeStage; 12] = [
    LifeStage::Jewang,
    LifeStage::Soe,
    LifeStage::Byeong,
    LifeStage::Sa,
    LifeStage::Myo,
    LifeStage::Jeol,
    LifeStage::Tae,
    LifeStage::Yang,
    LifeStage::Jangsaeng,
    LifeStage::Mogyok,
    LifeStage::Gwandae,
    LifeStage::Geonrok,
];

impl LifeStage {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Jangsaeng => "장생",
            Self::Mogyok => "목욕",
            Self::Gwandae => "관대",
            Self::Geonrok => "건록",
            Self::Jewang => "제왕",
            Self::Soe => "쇠",
            Self::Byeong => "병",
            Self::Sa => "사",
            Self::Myo => "묘",
            Self::Jeol => "절",
            Self::Tae => "태",
            Self::Yang => "양",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Jangsaeng => "長生",
            Self::Mogyok => "沐浴",
            Self::Gwandae => "冠帶",
            Self::Geonrok => "建祿",
            Self::Jewang => "帝旺",
            Self::Soe => "衰",
            Self::Byeong => "病",
            Self::Sa => "死",
            Self::Myo => "墓",
            Self::Jeol => "絶",
            Self::Tae => "胎",
            Self::Yang => "養",
        }
    }

    /// Favourable stages: 장생, 관대, 건록, 제왕, 태, 양.
    pub const fn is_good(self) -> bool {
        matches!(
            self,
            Self::Jangsaeng | Self::Gwandae | Self::Geonrok | Self::Jewang | Self::Tae | Self::Yang
        )
    }

    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Jangsaeng => "birth / beginning",
            Self::Mogyok => "bathing / cleansing",
            Self::Gwandae => "growth / development",
            Self::Geonrok => "vigour / prime",
            Self::Jewang => "peak / summit",
            Self::Soe => "decline / decrease",
            Self::Byeong => "illness / weakness",
            Self::Sa => "death / ending",
            Self::Myo => "tomb / storage",
            Self::Jeol => "severance / cutting off",
            Self::Tae => "conception / preparation",
            Self::Yang => "nurture / growth",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Jangsaeng => "a new start and the energy of growth",
            Self::Mogyok => "instability and a period of change",
            Self::Gwandae => "growth, development and stepping into society",
            Self::Geonrok => "abundant energy and independence",
            Self::Jewang => "the peak, with authority and honour",
            Self::Soe => "weakening energy that calls for care",
            Self::Byeong => "watch your health in a passive period",
            Self::Sa => "an ending and a time to wrap things up",
            Self::Myo => "a time of concealment and storing up",
            Self::Jeol => "breaks and the settling of ties",
            Self::Tae => "new preparations at the planning stage",
            Self::Yang => "getting ready to grow and building potential",
        }
    }
}

impl Serialize for LifeStage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.korean())
    }
}

/// Stage of `target` in the row of `day_branch`.
pub const fn life_stage(day_branch: Branch, target: Branch) -> LifeStage {
    let offset = (target.index() as i64 - day_branch.index() as i64).rem_euclid(12);
    ROW_FROM_DAY_BRANCH[offset as usize]
}

/// A stage with its good/bad flag and texts resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageInfo {
    pub stage: LifeStage,
    pub good: bool,
    pub meaning: &'static str,
    pub description: &'static str,
}

impl From<LifeStage> for StageInfo {
    fn from(stage: LifeStage) -> Self {
        Self {
            stage,
            good: stage.is_good(),
            meaning: stage.meaning(),
            description: stage.description(),
        }
    }
}

/// A stage tied to the pillar it was read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionedStage {
    pub position: PillarPosition,
    #[serde(flatten)]
    pub info: StageInfo,
}

/// Stages of all four pillars with good/bad groupings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwelveStages {
    pub year: StageInfo,
    pub month: StageInfo,
    pub day: StageInfo,
    pub hour: StageInfo,
    pub good: Vec<PositionedStage>,
    pub bad: Vec<PositionedStage>,
    pub summary: String,
}

impl TwelveStages {
    pub fn get(&self, position: PillarPosition) -> StageInfo {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }
}

/// Reads the year, month and hour branches against the day branch. The day
/// pillar itself is always 제왕.
pub fn twelve_stages(pillars: &FourPillars) -> TwelveStages {
    let day_branch = pillars.day.branch();
    let stage_of = |position: PillarPosition| -> StageInfo {
        match position {
            PillarPosition::Day => LifeStage::Jewang.into(),
            other => life_stage(day_branch, pillars.get(other).branch()).into(),
        }
    };

    let (good, bad): (Vec<_>, Vec<_>) = ALL_POSITIONS
        .iter()
        .map(|p| PositionedStage {
            position: *p,
            info: stage_of(*p),
        })
        .partition(|s| s.info.good);

    TwelveStages {
        year: stage_of(PillarPosition::Year),
        month: stage_of(PillarPosition::Month),
        day: stage_of(PillarPosition::Day),
        hour: stage_of(PillarPosition::Hour),
        summary: format!("{} favourable, {} unfavourable", good.len(), bad.len()),
        good,
        bad,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn rows_match_reference_table() {
        // 子 row: 子 제왕, 丑 쇠, 申 장생, 亥 건록
        assert_eq!(life_stage(Branch::Ja, Branch::Ja), LifeStage::Jewang);
        assert_eq!(life_stage(Branch::Ja, Branch::Chuk), LifeStage::Soe);
        assert_eq!(life_stage(Branch::Ja, Branch::Sin), LifeStage::Jangsaeng);
        assert_eq!(life_stage(Branch::Ja, Branch::Hae), LifeStage::Geonrok);
        // 丑 row: 子 건록
        assert_eq!(life_stage(Branch::Chuk, Branch::Ja), LifeStage::Geonrok);
        // 辰 row: 午 병, 未 사
        assert_eq!(life_stage(Branch::Jin, Branch::O), LifeStage::Byeong);
        assert_eq!(life_stage(Branch::Jin, Branch::Mi), LifeStage::Sa);
        // 亥 row: 未 장생
        assert_eq!(life_stage(Branch::Hae, Branch::Mi), LifeStage::Jangsaeng);
    }

    #[test]
    fn each_row_is_a_permutation() {
        for day in ALL_BRANCHES {
            let mut seen = std::collections::HashSet::new();
            for target in ALL_BRANCHES {
                seen.insert(life_stage(day, target));
            }
            assert_eq!(seen.len(), 12);
        }
    }

    #[test]
    fn six_good_six_bad() {
        let good = ROW_FROM_DAY_BRANCH.iter().filter(|s| s.is_good()).count();
        assert_eq!(good, 6);
    }

    #[test]
    fn scenario_1990_05_15() {
        // Day 辰: year 午 병, month 巳 쇠, hour 未 사
        let s = twelve_stages(&FourPillars::compute(1990, 5, 15, 14));
        assert_eq!(s.year.stage, LifeStage::Byeong);
        assert_eq!(s.month.stage, LifeStage::Soe);
        assert_eq!(s.day.stage, LifeStage::Jewang);
        assert_eq!(s.hour.stage, LifeStage::Sa);
        assert_eq!(s.good.len(), 1);
        assert_eq!(s.bad.len(), 3);
        assert_eq!(s.summary, "1 favourable, 3 unfavourable");
        assert_eq!(s.bad[0].position, PillarPosition::Year);
    }
}
