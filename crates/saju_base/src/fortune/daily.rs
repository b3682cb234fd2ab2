use serde::Serialize;

use saju_math::{Grade, round_score};
use saju_time::CivilDate;

use super::{DayBranchContact, period_grade};
use crate::branch::{ALL_BRANCHES, Branch};
use crate::calendar::{FourPillars, day_pillar};
use crate::element::Element;
use crate::sexagenary::Pillar;
use crate::ten_gods::{TenGodPair, ten_gods};
use crate::twelve_stages::StageInfo;

/// A two-hour window whose branch carries the favourable element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyHour {
    pub branch: Branch,
    pub korean: &'static str,
    /// `"03:00 - 05:00"`.
    pub time_range: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckyColor {
    pub name: &'static str,
    pub hex: &'static str,
}

impl LuckyColor {
    pub const fn for_element(element: Element) -> Self {
        let (name, hex) = match element {
            Element::Wood => ("green", "#34c759"),
            Element::Fire => ("red", "#ff3b30"),
            Element::Earth => ("yellow", "#ff9500"),
            Element::Metal => ("white", "#c0c0c0"),
            Element::Water => ("blue", "#007aff"),
        };
        Self { name, hex }
    }
}

/// Lucky numbers for an element (木 3·8, 火 2·7, 土 5·10, 金 4·9, 水 1·6).
pub const fn element_numbers(element: Element) -> [u8; 2] {
    match element {
        Element::Wood => [3, 8],
        Element::Fire => [2, 7],
        Element::Earth => [5, 10],
        Element::Metal => [4, 9],
        Element::Water => [1, 6],
    }
}

/// Branch windows whose element equals `yongsin`.
pub fn lucky_hours(yongsin: Element) -> Vec<LuckyHour> {
    ALL_BRANCHES
        .iter()
        .filter(|b| b.element() == yongsin)
        .map(|b| {
            let start = b.start_hour();
            let end = (start + 2) % 24;
            LuckyHour {
                branch: *b,
                korean: b.korean(),
                time_range: format!("{start:02}:00 - {end:02}:00"),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFortune {
    pub date: CivilDate,
    pub pillar: Pillar,
    pub ten_gods: TenGodPair,
    pub stage: StageInfo,
    /// Clash with the natal day branch.
    pub has_clash: bool,
    /// Six-combination with the natal day branch.
    pub has_combination: bool,
    pub score: u8,
    pub grade: Grade,
    pub interpretation: String,
    pub lucky_hours: Vec<LuckyHour>,
    pub lucky_color: LuckyColor,
    pub lucky_numbers: [u8; 2],
}

/// Fortune of one calendar day for the natal chart.
pub fn daily_fortune(pillars: &FourPillars, yongsin: Element, date: CivilDate) -> DailyFortune {
    let pillar = day_pillar(date.year, date.month as i32, date.day as i32);
    let gods = ten_gods(&pillars.day, &pillar);
    let contact = DayBranchContact::new(pillars.day.branch(), pillar.branch());

    let mut raw = contact.base_score();
    if gods.stem.is_supportive() {
        raw += 10.0;
    }
    if gods.stem.needs_caution() {
        raw -= 5.0;
    }
    let score = round_score(raw);

    let mut parts = vec![
        gods.stem.influence().to_string(),
        format!(
            "{} ({}): {}.",
            contact.stage.korean(),
            contact.stage.meaning(),
            contact.stage.description()
        ),
    ];
    if contact.clash {
        parts.push(
            "A day of change and movement; make important decisions carefully.".to_string(),
        );
    } else if contact.combination {
        parts.push(
            "Harmony and cooperation come easily; a good day for relationships.".to_string(),
        );
    }

    let element = pillar.stem().element();
    DailyFortune {
        date,
        pillar,
        ten_gods: gods,
        stage: contact.stage.into(),
        has_clash: contact.clash,
        has_combination: contact.combination,
        score,
        grade: period_grade(score),
        interpretation: parts.join(" "),
        lucky_hours: lucky_hours(yongsin),
        lucky_color: LuckyColor::for_element(element),
        lucky_numbers: element_numbers(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ten_gods::TenGod;
    use crate::twelve_stages::LifeStage;

    fn natal() -> FourPillars {
        FourPillars::compute(1990, 5, 15, 14)
    }

    #[test]
    fn lucky_hours_for_wood() {
        let hours = lucky_hours(Element::Wood);
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].branch, Branch::In);
        assert_eq!(hours[0].time_range, "03:00 - 05:00");
        assert_eq!(hours[1].time_range, "05:00 - 07:00");
    }

    #[test]
    fn lucky_hours_wrap_midnight() {
        // 子 and 亥 are water; 子 runs 23:00 - 01:00
        let hours = lucky_hours(Element::Water);
        assert_eq!(hours[0].branch, Branch::Ja);
        assert_eq!(hours[0].time_range, "23:00 - 01:00");
        assert_eq!(lucky_hours(Element::Earth).len(), 4);
    }

    #[test]
    fn new_year_2024() {
        // 2024-01-01 is a 甲子 day: 장생 for a 辰 day branch, 편재 for 庚
        let date = CivilDate::new(2024, 1, 1).unwrap();
        let f = daily_fortune(&natal(), Element::Wood, date);
        assert_eq!(f.pillar.name(), "甲子");
        assert_eq!(f.stage.stage, LifeStage::Jangsaeng);
        assert_eq!(f.ten_gods.stem, TenGod::Pyeonjae);
        assert!(!f.has_clash);
        assert!(!f.has_combination);
        assert_eq!(f.score, 65);
        assert_eq!(f.grade, Grade::B);
        assert_eq!(f.lucky_color.hex, "#34c759");
        assert_eq!(f.lucky_numbers, [3, 8]);
    }

    #[test]
    fn scores_stay_in_range_over_two_months() {
        let natal = natal();
        let mut date = CivilDate::new(2025, 1, 1).unwrap();
        for _ in 0..60 {
            let f = daily_fortune(&natal, Element::Wood, date);
            assert!(f.score <= 100);
            assert_eq!(f.grade, period_grade(f.score));
            assert!(!f.interpretation.is_empty());
            date = date.add_days(1);
        }
    }
}
