use serde::Serialize;

use crate::calendar::{FourPillars, year_pillar};
use crate::relations::clashes;
use crate::sexagenary::Pillar;
use crate::ten_gods::{TenGodPair, ten_gods};
use crate::twelve_stages::{StageInfo, life_stage};

/// One calendar year read against the natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyFortune {
    pub year: i32,
    pub pillar: Pillar,
    pub ten_gods: TenGodPair,
    pub stage: StageInfo,
    /// The year branch clashes with at least one natal branch.
    pub has_clash: bool,
    pub description: String,
}

/// Fortune for `target_year`, taking the year pillar after 입춘.
pub fn yearly_fortune(target_year: i32, pillars: &FourPillars) -> YearlyFortune {
    let pillar = year_pillar(target_year, 2, 10);
    let gods = ten_gods(&pillars.day, &pillar);
    let stage = life_stage(pillars.day.branch(), pillar.branch());
    let has_clash = pillars
        .branches()
        .iter()
        .any(|b| clashes(*b, pillar.branch()));

    YearlyFortune {
        year: target_year,
        pillar,
        ten_gods: gods,
        stage: stage.into(),
        has_clash,
        description: format!(
            "{target_year} is a {} year of {}/{}.",
            pillar.korean(),
            gods.stem,
            gods.branch
        ),
    }
}

/// Yearly fortunes for `from_year` and the four years after it.
pub fn five_year_fortune(from_year: i32, pillars: &FourPillars) -> Vec<YearlyFortune> {
    (from_year..from_year + 5)
        .map(|y| yearly_fortune(y, pillars))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ten_gods::TenGod;
    use crate::twelve_stages::LifeStage;

    fn natal() -> FourPillars {
        // 庚午 辛巳 庚辰 癸未
        FourPillars::compute(1990, 5, 15, 14)
    }

    #[test]
    fn year_2026() {
        let f = yearly_fortune(2026, &natal());
        assert_eq!(f.pillar.name(), "丙午");
        assert_eq!(f.ten_gods.stem, TenGod::Pyeongwan);
        assert_eq!(f.stage.stage, LifeStage::Byeong);
        assert!(!f.has_clash);
        assert!(f.description.starts_with("2026 is a 병오 year"));
    }

    #[test]
    fn clash_with_any_natal_branch() {
        // 2020 庚子 clashes the natal 午 year branch
        let f = yearly_fortune(2020, &natal());
        assert_eq!(f.pillar.name(), "庚子");
        assert!(f.has_clash);
        // 2024 甲辰 clashes nothing (戌 is absent)
        assert!(!yearly_fortune(2024, &natal()).has_clash);
    }

    #[test]
    fn five_consecutive_years() {
        let v = five_year_fortune(2026, &natal());
        assert_eq!(v.len(), 5);
        for (i, f) in v.iter().enumerate() {
            assert_eq!(f.year, 2026 + i as i32);
            assert_eq!(f, &yearly_fortune(f.year, &natal()));
        }
        assert_eq!(v[1].pillar, v[0].pillar.offset(1));
    }
}
