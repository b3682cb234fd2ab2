//! Two-chart compatibility (궁합).
//!
//! Four weighted components: day pillars 40%, branch network 30%, element
//! complement 20%, mutual Ten Gods 10%. Each component is clamped to
//! [0, 100] before weighting; the total is rounded and graded on the
//! 85/70/55/40 scale. Category scores are reported alongside.

use serde::Serialize;

use saju_math::{GradeScale, ScoreGrade, clamp_score, population_variance, round_half_up};

use crate::analysis::SajuResult;
use crate::element::ALL_ELEMENTS;
use crate::element_analysis::ElementAnalysis;
use crate::relations::{TRIADS, clashes, harms, punishes, six_combination, stem_combination};
use crate::sexagenary::Pillar;
use crate::ten_gods::{TenGod, TenGodPair, ten_gods};

pub const DAY_PILLAR_WEIGHT: u8 = 40;
pub const BRANCH_WEIGHT: u8 = 30;
pub const ELEMENT_WEIGHT: u8 = 20;
pub const TEN_GOD_WEIGHT: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPillarFactor {
    /// Korean label: 천간합, 상생, 상극, 지지육합, 지지충.
    pub kind: &'static str,
    pub good: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPillarCompatibility {
    pub score: f64,
    pub weight: u8,
    pub details: Vec<DayPillarFactor>,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchCompatibility {
    pub score: f64,
    pub weight: u8,
    pub good_relations: Vec<String>,
    pub bad_relations: Vec<String>,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementCompatibility {
    pub score: f64,
    pub weight: u8,
    pub complementary: Vec<String>,
    /// `round(100 − 10·variance)` of the summed distributions.
    pub combined_balance: i32,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenGodCompatibility {
    pub score: f64,
    pub weight: u8,
    /// The second day pillar seen from the first day master.
    pub first_to_second: TenGodPair,
    pub second_to_first: TenGodPair,
    pub details: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub name: &'static str,
    pub score: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCompatibility {
    pub personality: CategoryScore,
    pub financial: CategoryScore,
    pub family: CategoryScore,
    pub communication: CategoryScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compatibility {
    #[serde(flatten)]
    pub total: ScoreGrade,
    pub day_pillar: DayPillarCompatibility,
    pub branches: BranchCompatibility,
    pub elements: ElementCompatibility,
    pub ten_gods: TenGodCompatibility,
    pub categories: CategoryCompatibility,
    pub good_points: Vec<String>,
    pub caution_points: Vec<String>,
    pub advice: Vec<&'static str>,
    pub interpretation: String,
}

fn generates_either_way(a: Pillar, b: Pillar) -> bool {
    let (ea, eb) = (a.stem().element(), b.stem().element());
    ea.generates() == eb || eb.generates() == ea
}

fn controls_either_way(a: Pillar, b: Pillar) -> bool {
    let (ea, eb) = (a.stem().element(), b.stem().element());
    ea.controls() == eb || eb.controls() == ea
}

pub fn day_pillar_compatibility(first: Pillar, second: Pillar) -> DayPillarCompatibility {
    let mut score = 50.0;
    let mut details = Vec::new();
    let (s1, s2) = (first.stem(), second.stem());
    let (b1, b2) = (first.branch(), second.branch());

    if stem_combination(s1, s2).is_some() {
        score += 30.0;
        details.push(DayPillarFactor {
            kind: "천간합",
            good: true,
            description: format!("{}-{} stem combination", s1.korean(), s2.korean()),
        });
    }
    if generates_either_way(first, second) {
        score += 15.0;
        details.push(DayPillarFactor {
            kind: "상생",
            good: true,
            description: "The day stems generate each other".to_string(),
        });
    }
    if controls_either_way(first, second) {
        score -= 10.0;
        details.push(DayPillarFactor {
            kind: "상극",
            good: false,
            description: "The day stems control each other".to_string(),
        });
    }
    if six_combination(b1, b2).is_some() {
        score += 20.0;
        details.push(DayPillarFactor {
            kind: "지지육합",
            good: true,
            description: format!("{}-{} six-combination", b1.korean(), b2.korean()),
        });
    }
    if clashes(b1, b2) {
        score -= 20.0;
        details.push(DayPillarFactor {
            kind: "지지충",
            good: false,
            description: format!("{}-{} clash", b1.korean(), b2.korean()),
        });
    }

    let summary = if score >= 70.0 {
        "The day pillars match well"
    } else if score >= 50.0 {
        "The day pillars are an average match"
    } else {
        "The day pillars need care"
    };
    DayPillarCompatibility {
        score: clamp_score(score),
        weight: DAY_PILLAR_WEIGHT,
        details,
        summary,
    }
}

/// Cross-checks all sixteen branch pairs plus shared triads.
pub fn branch_compatibility(first: &SajuResult, second: &SajuResult) -> BranchCompatibility {
    let bs1 = first.chart.pillars.branches();
    let bs2 = second.chart.pillars.branches();
    let mut score = 50.0;
    let mut good = Vec::new();
    let mut bad = Vec::new();

    for b1 in bs1 {
        for b2 in bs2 {
            if six_combination(b1, b2).is_some() {
                score += 8.0;
                good.push(format!("{b1}-{b2} 육합"));
            }
            if clashes(b1, b2) {
                score -= 8.0;
                bad.push(format!("{b1}-{b2} 충"));
            }
            if punishes(b1, b2) {
                score -= 5.0;
                bad.push(format!("{b1}-{b2} 형"));
            }
            if harms(b1, b2) {
                score -= 3.0;
                bad.push(format!("{b1}-{b2} 해"));
            }
        }
    }

    for triad in &TRIADS {
        let in1 = triad.members.iter().filter(|m| bs1.contains(*m)).count();
        let in2 = triad.members.iter().filter(|m| bs2.contains(*m)).count();
        let union = triad
            .members
            .iter()
            .filter(|m| bs1.contains(*m) || bs2.contains(*m))
            .count();
        if union >= 2 && in1 > 0 && in2 > 0 {
            score += 10.0;
            good.push(format!("{} formed", triad.name));
        }
    }

    let summary = if good.len() > bad.len() {
        "The branches get on well"
    } else {
        "The branches have points of friction"
    };
    BranchCompatibility {
        score: clamp_score(score),
        weight: BRANCH_WEIGHT,
        good_relations: good,
        bad_relations: bad,
        summary,
    }
}

pub fn element_compatibility(
    first: &ElementAnalysis,
    second: &ElementAnalysis,
) -> ElementCompatibility {
    let mut score = 50.0;
    let mut complementary = Vec::new();

    for element in ALL_ELEMENTS {
        let c1 = first.count(element);
        let c2 = second.count(element);
        if c1 <= 1 && c2 >= 3 {
            score += 10.0;
            complementary.push(format!("{element} complemented (1←2)"));
        }
        if c2 <= 1 && c1 >= 3 {
            score += 10.0;
            complementary.push(format!("{element} complemented (2←1)"));
        }
    }
    if first.yongsin == second.yongsin {
        score += 5.0;
        complementary.push("Same favourable element".to_string());
    }

    let combined: Vec<f64> = ALL_ELEMENTS
        .iter()
        .map(|e| f64::from(first.count(*e) + second.count(*e)))
        .collect();
    let variance = population_variance(&combined);
    score += (30.0 - variance * 3.0).max(0.0);

    let summary = if complementary.is_empty() {
        "Little element complement between the two"
    } else {
        "Each makes up for what the other lacks"
    };
    ElementCompatibility {
        score: clamp_score(score),
        weight: ELEMENT_WEIGHT,
        complementary,
        combined_balance: round_half_up(100.0 - variance * 10.0) as i32,
        summary,
    }
}

pub fn ten_god_compatibility(first: Pillar, second: Pillar) -> TenGodCompatibility {
    let forward = ten_gods(&first, &second);
    let backward = ten_gods(&second, &first);
    let mut score = 50.0;
    let mut details = Vec::new();

    for (label, god) in [("1→2", forward.stem), ("2→1", backward.stem)] {
        if god.is_supportive() {
            score += 15.0;
            details.push(format!("{label}: {god} (good)"));
        }
    }
    for (label, god) in [("1→2", forward.stem), ("2→1", backward.stem)] {
        if god.needs_caution() {
            score -= 10.0;
            details.push(format!("{label}: {god} (caution)"));
        }
    }

    TenGodCompatibility {
        score: clamp_score(score),
        weight: TEN_GOD_WEIGHT,
        first_to_second: forward,
        second_to_first: backward,
        details,
        summary: format!(
            "You see your partner as {}; your partner sees you as {}",
            forward.stem, backward.stem
        ),
    }
}

fn stem_god_count(result: &SajuResult, wanted: &[TenGod]) -> u8 {
    result
        .ten_gods
        .iter()
        .filter(|(_, pair)| wanted.contains(&pair.stem))
        .count() as u8
}

pub fn category_compatibility(first: &SajuResult, second: &SajuResult) -> CategoryCompatibility {
    let d1 = first.chart.pillars.day;
    let d2 = second.chart.pillars.day;

    let personality = if d1.stem().element() == d2.stem().element() {
        75
    } else if generates_either_way(d1, d2) {
        80
    } else if controls_either_way(d1, d2) {
        50
    } else {
        65
    };

    let wealth = [TenGod::Jeongjae, TenGod::Pyeonjae];
    let financial =
        (60 + 5 * (stem_god_count(first, &wealth) + stem_god_count(second, &wealth))).min(100);

    let resource = [TenGod::Jeongin, TenGod::Pyeonin];
    let mut family = 60;
    if resource.contains(&first.ten_gods.month.stem)
        || resource.contains(&second.ten_gods.month.stem)
    {
        family += 15;
    }
    if !clashes(d1.branch(), d2.branch()) {
        family += 10;
    }

    let output = [TenGod::Siksin, TenGod::Sanggwan];
    let mut communication =
        60 + 5 * (stem_god_count(first, &output) + stem_god_count(second, &output));
    if six_combination(d1.branch(), d2.branch()).is_some() {
        communication += 15;
    }

    CategoryCompatibility {
        personality: CategoryScore {
            name: "성격 궁합",
            score: personality,
            description: "How well the two temperaments harmonise",
        },
        financial: CategoryScore {
            name: "재물 궁합",
            score: financial,
            description: "Attitudes to money and how it is managed",
        },
        family: CategoryScore {
            name: "가정 궁합",
            score: family.min(100),
            description: "Building and keeping a household together",
        },
        communication: CategoryScore {
            name: "소통 궁합",
            score: communication.min(100),
            description: "Communication and mutual understanding",
        },
    }
}

fn advice(
    total: u8,
    branches: &BranchCompatibility,
    elements: &ElementCompatibility,
) -> Vec<&'static str> {
    let mut lines = match total {
        70.. => vec![
            "A match close to destiny.",
            "Each brings out the other's strengths and fills the other's gaps.",
        ],
        55..=69 => vec![
            "A workable match; effort keeps the relationship good.",
            "Accepting and trying to understand your differences is needed.",
        ],
        _ => vec![
            "Many differences call for understanding and effort.",
            "There may be friction, but it can become a chance to grow.",
        ],
    };
    if !branches.bad_relations.is_empty() {
        lines.push("The branches clash in places, so avoid hasty decisions.");
    }
    if !elements.complementary.is_empty() {
        lines.push("You make up for each other's missing elements, a balanced relationship.");
    }
    lines
}

fn interpretation(
    total: u8,
    day_pillar: &DayPillarCompatibility,
    branches: &BranchCompatibility,
) -> String {
    let mut text = match total {
        80.. => "A very good match. You can understand each other deeply and complement each other.",
        65..=79 => "A good match. Understanding and respecting each other's strengths and weaknesses keeps you happy together.",
        50..=64 => "An average match. There are differences, but care and understanding can overcome them.",
        _ => "You carry different energies and need understanding. Accepting the difference can help you both grow.",
    }
    .to_string();
    if day_pillar.score >= 70.0 {
        text.push_str(" The day pillars in particular match well, so the basic chemistry is good.");
    }
    if branches.good_relations.len() > branches.bad_relations.len() {
        text.push_str(" The branches also get on, so time together should be enjoyable.");
    }
    text
}

/// Compatibility of two analysed charts.
pub fn analyze_compatibility(first: &SajuResult, second: &SajuResult) -> Compatibility {
    let d1 = first.chart.pillars.day;
    let d2 = second.chart.pillars.day;

    let day_pillar = day_pillar_compatibility(d1, d2);
    let branches = branch_compatibility(first, second);
    let elements = element_compatibility(&first.elements, &second.elements);
    let ten_gods = ten_god_compatibility(d1, d2);

    let raw = day_pillar.score * 0.4
        + branches.score * 0.3
        + elements.score * 0.2
        + ten_gods.score * 0.1;
    let total = GradeScale::COMPATIBILITY.score(raw);

    let good_points = day_pillar
        .details
        .iter()
        .filter(|d| d.good)
        .map(|d| d.description.clone())
        .chain(branches.good_relations.iter().cloned())
        .chain(elements.complementary.iter().cloned())
        .collect();
    let caution_points = day_pillar
        .details
        .iter()
        .filter(|d| !d.good)
        .map(|d| d.description.clone())
        .chain(branches.bad_relations.iter().cloned())
        .collect();

    Compatibility {
        advice: advice(total.score, &branches, &elements),
        interpretation: interpretation(total.score, &day_pillar, &branches),
        categories: category_compatibility(first, second),
        total,
        day_pillar,
        branches,
        elements,
        ten_gods,
        good_points,
        caution_points,
    }
}
