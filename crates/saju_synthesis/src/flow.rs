//! Multi-year fortune flow.

use serde::Serialize;

use saju_base::{LifeStage, LuckPillar, Pillar, SajuResult, TenGod, YearlyFortune};

/// Rating of one year: a favourable 12-stage is good, otherwise a branch
/// clash calls for caution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YearRating {
    Good,
    Caution,
    Neutral,
}

pub fn year_rating(fortune: &YearlyFortune) -> YearRating {
    if fortune.stage.good {
        YearRating::Good
    } else if fortune.has_clash {
        YearRating::Caution
    } else {
        YearRating::Neutral
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentYearFlow {
    pub fortune: YearlyFortune,
    pub rating: YearRating,
    /// Ten God of the year stem.
    pub focus: TenGod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearFlow {
    pub year: i32,
    pub pillar: Pillar,
    pub stage: LifeStage,
    pub rating: YearRating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneFlow {
    pub current_year: CurrentYearFlow,
    pub five_year: Vec<YearFlow>,
    pub current_daeun: Option<LuckPillar>,
}

pub fn fortune_flow(saju: &SajuResult) -> FortuneFlow {
    let current = &saju.yearly_fortune;
    FortuneFlow {
        current_year: CurrentYearFlow {
            fortune: current.clone(),
            rating: year_rating(current),
            focus: current.ten_gods.stem,
        },
        five_year: saju
            .five_year_fortune
            .iter()
            .map(|f| YearFlow {
                year: f.year,
                pillar: f.pillar,
                stage: f.stage.stage,
                rating: year_rating(f),
            })
            .collect(),
        current_daeun: saju.current_daeun,
    }
}
