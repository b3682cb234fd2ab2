//! Themed fortunes: love, wealth, career, health, study.
//!
//! A theme counts the year/month/hour stem and branch Ten Gods it cares
//! about, adds an element score, and shifts by the 12-stage balance:
//! `50 + 8·hits + element_score/4 + (5·good − 3·bad)`.

use serde::Serialize;

use saju_math::{GradeScale, ScoreGrade};

use crate::analysis::SajuResult;
use crate::calendar::{Gender, PillarPosition};
use crate::element::Element;
use crate::ten_gods::TenGod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Love,
    Wealth,
    Career,
    Health,
    Study,
}

pub const ALL_THEMES: [Theme; 5] = [
    Theme::Love,
    Theme::Wealth,
    Theme::Career,
    Theme::Health,
    Theme::Study,
];

impl Theme {
    /// Parses an English or Korean theme name. Anything unrecognised falls
    /// back to [`Theme::Love`].
    pub fn from_name(name: &str) -> Theme {
        match name.trim().to_ascii_lowercase().as_str() {
            "wealth" | "재물운" => Theme::Wealth,
            "career" | "사업운" => Theme::Career,
            "health" | "건강운" => Theme::Health,
            "study" | "학업운" => Theme::Study,
            _ => Theme::Love,
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Love => "연애운",
            Self::Wealth => "재물운",
            Self::Career => "사업운",
            Self::Health => "건강운",
            Self::Study => "학업운",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Love => "Romance, marriage and relationships",
            Self::Wealth => "Money, finances and property",
            Self::Career => "Business, work and promotion",
            Self::Health => "Physical strength and mental health",
            Self::Study => "Learning, exams and qualifications",
        }
    }

    /// Ten Gods that count toward the theme. Love depends on gender.
    pub const fn ten_gods(self, gender: Gender) -> &'static [TenGod] {
        match (self, gender) {
            (Self::Love, Gender::Male) => &[TenGod::Jeongjae, TenGod::Pyeonjae],
            (Self::Love, Gender::Female) => &[TenGod::Jeonggwan, TenGod::Pyeongwan],
            (Self::Wealth, _) => &[TenGod::Jeongjae, TenGod::Pyeonjae, TenGod::Siksin],
            (Self::Career, _) => &[
                TenGod::Siksin,
                TenGod::Sanggwan,
                TenGod::Pyeongwan,
                TenGod::Jeonggwan,
            ],
            (Self::Health, _) => &[
                TenGod::Bigyeon,
                TenGod::Geopjae,
                TenGod::Jeongin,
                TenGod::Pyeonin,
            ],
            (Self::Study, _) => &[TenGod::Jeongin, TenGod::Pyeonin, TenGod::Siksin],
        }
    }

    /// Elements whose counts feed the element score. Health scores overall
    /// balance instead and has none.
    pub const fn elements(self) -> &'static [Element] {
        match self {
            Self::Love => &[Element::Water, Element::Fire],
            Self::Wealth => &[Element::Earth, Element::Metal],
            Self::Career => &[Element::Fire, Element::Wood],
            Self::Health => &[],
            Self::Study => &[Element::Water, Element::Wood],
        }
    }

    fn texts(self, level: ThemeLevel) -> (&'static str, [&'static str; 2]) {
        use ThemeLevel::*;
        match (self, level) {
            (Self::Love, High) => (
                "Love fortune is very good. You may meet someone special or deepen a current relationship.",
                ["Go out and make connections.", "A good time to take the relationship further."],
            ),
            (Self::Love, Medium) => (
                "Love fortune is average. Active effort will bring good results.",
                ["Treat your partner sincerely.", "Small attention and care make a big difference."],
            ),
            (Self::Love, Low) => (
                "Love fortune needs care. Do not rush; let relationships develop slowly.",
                ["Focus on your own growth instead of hurrying.", "Good matches come to those who are ready."],
            ),
            (Self::Wealth, High) => (
                "Wealth fortune is very good. Expect good results from investment or business.",
                ["Look actively for investment opportunities.", "A good time to consider expanding a business."],
            ),
            (Self::Wealth, Medium) => (
                "Wealth fortune is average. Steady effort keeps income stable.",
                ["Concentrate on stable financial planning.", "Steady saving beats risky investment."],
            ),
            (Self::Wealth, Low) => (
                "Wealth fortune needs care. Avoid overspending and save.",
                ["Cut unnecessary spending.", "Redraw your financial plan."],
            ),
            (Self::Career, High) => (
                "Career fortune is very good. Promotion or new opportunities may arrive.",
                ["Try a new challenge.", "A good chance to show leadership."],
            ),
            (Self::Career, Medium) => (
                "Career fortune is average. Building skills steadily pays off.",
                ["Deepen your expertise where you are.", "Widening your network helps."],
            ),
            (Self::Career, Low) => (
                "Career fortune needs care. Time to consolidate skills in your current position.",
                ["Quietly build your abilities.", "Seek stability over abrupt change."],
            ),
            (Self::Health, High) => (
                "Health fortune is very good. A time of vitality and strength.",
                ["Exercise more to build stamina.", "Form healthy habits while you are well."],
            ),
            (Self::Health, Medium) => (
                "Health fortune is average. Keep healthy with regular routines and exercise.",
                ["Keep a regular daily rhythm.", "Pay attention to stress management."],
            ),
            (Self::Health, Low) => (
                "Health needs attention. Do not overdo things and get enough rest.",
                ["Hold back from strenuous activity.", "Get a regular check-up."],
            ),
            (Self::Study, High) => (
                "Study fortune is very good. High concentration brings good results.",
                ["Take on difficult subjects.", "A good time for exams and certificates."],
            ),
            (Self::Study, Medium) => (
                "Study fortune is average. Steady effort leads to good results.",
                ["Regular review matters.", "Make use of study groups."],
            ),
            (Self::Study, Low) => (
                "Concentrating on study is hard now. Improve your environment and make a plan.",
                ["Improve your study environment.", "Start with small goals."],
            ),
        }
    }
}

/// Interpretation tier: high ≥ 70, medium ≥ 45, otherwise low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeLevel {
    High,
    Medium,
    Low,
}

impl ThemeLevel {
    pub fn of(score: u8) -> Self {
        match score {
            70.. => Self::High,
            45..=69 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// A Ten God that counted toward a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeHit {
    pub position: PillarPosition,
    /// `"stem"` or `"branch"`.
    pub slot: &'static str,
    pub ten_god: TenGod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemedFortune {
    pub theme: Theme,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub grade: ScoreGrade,
    pub level: ThemeLevel,
    pub hits: Vec<ThemeHit>,
    pub element_score: f64,
    pub interpretation: &'static str,
    pub advice: [&'static str; 2],
}

pub fn themed_fortune(result: &SajuResult, theme: Theme) -> ThemedFortune {
    let wanted = theme.ten_gods(result.chart.gender);
    let hits: Vec<ThemeHit> = result
        .ten_gods
        .iter()
        .flat_map(move |(position, pair)| {
            [("stem", pair.stem), ("branch", pair.branch)]
                .into_iter()
                .filter(move |(_, god)| wanted.contains(god))
                .map(move |(slot, ten_god)| ThemeHit {
                    position,
                    slot,
                    ten_god,
                })
        })
        .collect();

    let element_score = match theme {
        Theme::Health => (100.0 - result.elements.variance() * 10.0).max(0.0),
        _ => theme
            .elements()
            .iter()
            .map(|e| f64::from(result.elements.count(*e)) * 10.0)
            .sum(),
    };
    let stage_bonus =
        5.0 * result.stages.good.len() as f64 - 3.0 * result.stages.bad.len() as f64;
    let raw = 50.0 + 8.0 * hits.len() as f64 + element_score / 4.0 + stage_bonus;

    let grade = GradeScale::THEMED.score(raw);
    let level = ThemeLevel::of(grade.score);
    let (interpretation, advice) = theme.texts(level);

    ThemedFortune {
        theme,
        name: theme.korean(),
        description: theme.description(),
        grade,
        level,
        hits,
        element_score,
        interpretation,
        advice,
    }
}

/// All five themes in fixed order.
pub fn all_themed_fortunes(result: &SajuResult) -> Vec<ThemedFortune> {
    ALL_THEMES
        .iter()
        .map(|t| themed_fortune(result, *t))
        .collect()
}
