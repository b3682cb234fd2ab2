//! Narrative sections and recommendations.

use serde::Serialize;

use astro_base::AstroChart;
use saju_base::{SajuResult, YearlyFortune};
use saju_math::Grade;

use crate::elements::ElementSynthesis;
use crate::profile::PersonalityProfile;

// ---------------------------------------------------------------------------
// Interpretation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    BasicFortune,
    Personality,
    YearOutlook,
    Remedy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretationSection {
    pub category: SectionKind,
    pub title: String,
    pub content: String,
}

const fn energy_phrase(grade: Grade) -> &'static str {
    match grade {
        Grade::S => "very strong positive energy",
        Grade::A => "a good flow of energy",
        Grade::B => "stable energy",
        Grade::C => "a period that calls for care",
        Grade::D => "a need for a careful approach",
    }
}

fn basic_fortune(saju: &SajuResult, astro: &AstroChart) -> String {
    let eastern = saju.overall_score.grade.grade;
    let western = astro.score.grade;
    let verdict = if eastern == western {
        "The two systems agree, pointing to a clear fortune."
    } else {
        "The two systems complement each other, pointing to a balanced fortune."
    };
    format!(
        "The saju reading shows {}, and the Western chart shows {}. {verdict}",
        energy_phrase(eastern),
        energy_phrase(western)
    )
}

fn temperament(saju: &SajuResult, astro: &AstroChart) -> String {
    let dm = &saju.day_master;
    format!(
        "{}({}) day master, {}: {} In Western astrology the {} energy of {} is central.",
        dm.korean,
        dm.stem,
        dm.image,
        dm.personality,
        astro.sun_sign.element().name(),
        astro.sun_sign.name()
    )
}

fn year_outlook(fortune: &YearlyFortune) -> String {
    let mut text = format!(
        "{} is a {} year, with {} and {} energies at work. The {} stage brings {}.",
        fortune.year,
        fortune.pillar.korean(),
        fortune.ten_gods.stem,
        fortune.ten_gods.branch,
        fortune.stage.stage.korean(),
        fortune.stage.description
    );
    if fortune.has_clash {
        text.push_str(" Some clashing energy is present, so weigh important decisions carefully.");
    }
    text
}

pub fn interpretation(
    saju: &SajuResult,
    astro: &AstroChart,
    elements: &ElementSynthesis,
) -> Vec<InterpretationSection> {
    let mut sections = vec![
        InterpretationSection {
            category: SectionKind::BasicFortune,
            title: "Overall energy".to_string(),
            content: basic_fortune(saju, astro),
        },
        InterpretationSection {
            category: SectionKind::Personality,
            title: "Innate temperament".to_string(),
            content: temperament(saju, astro),
        },
        InterpretationSection {
            category: SectionKind::YearOutlook,
            title: format!("{} outlook", saju.yearly_fortune.year),
            content: year_outlook(&saju.yearly_fortune),
        },
    ];
    if !elements.recommendations.is_empty() {
        let advice: Vec<&str> = elements
            .recommendations
            .iter()
            .map(|r| r.advice.as_str())
            .collect();
        sections.push(InterpretationSection {
            category: SectionKind::Remedy,
            title: "Advice for balance".to_string(),
            content: advice.join(" "),
        });
    }
    sections
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    ElementRemedy,
    Lifestyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub items: Vec<RecommendationItem>,
}

pub fn recommendations(
    elements: &ElementSynthesis,
    profile: &PersonalityProfile,
) -> Vec<Recommendation> {
    let mut out = Vec::with_capacity(2);
    if !elements.recommendations.is_empty() {
        out.push(Recommendation {
            category: RecommendationCategory::ElementRemedy,
            items: elements
                .recommendations
                .iter()
                .map(|r| RecommendationItem {
                    title: format!("Strengthen {}", r.element.label()),
                    description: r.advice.clone(),
                })
                .collect(),
        });
    }
    out.push(Recommendation {
        category: RecommendationCategory::Lifestyle,
        items: vec![
            RecommendationItem {
                title: "Work style".to_string(),
                description: profile.work_style.description().to_string(),
            },
            RecommendationItem {
                title: "Relationships".to_string(),
                description: profile.social_style.description().to_string(),
            },
        ],
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::synthesize_elements;
    use crate::profile::personality_profile;
    use astro_base::{AspectSet, AstroInput};
    use saju_base::{BirthFacts, Gender, SajuChart};

    fn scenario() -> (SajuResult, AstroChart) {
        let chart = SajuChart::new(BirthFacts::new(1990, 5, 15, 14), Gender::Male).unwrap();
        let astro = astro_base::calculate(&AstroInput::new(1990, 5, 15).at(14, 0), AspectSet::Major)
            .unwrap();
        (saju_base::calculate(&chart, 2026), astro)
    }

    #[test]
    fn four_sections_in_order() {
        let (saju, astro) = scenario();
        let elements = synthesize_elements(&saju.elements, &astro.elements);
        let s = interpretation(&saju, &astro, &elements);
        let kinds: Vec<SectionKind> = s.iter().map(|x| x.category).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::BasicFortune,
                SectionKind::Personality,
                SectionKind::YearOutlook,
                SectionKind::Remedy
            ]
        );
        assert_eq!(s[2].title, "2026 outlook");
        assert_eq!(
            s[3].content,
            "Cultivating adaptability and analytical skill will help."
        );
    }

    #[test]
    fn matching_grades_agree() {
        // saju 77 and chart 71 are both A
        let (saju, astro) = scenario();
        let text = basic_fortune(&saju, &astro);
        assert!(text.contains("a good flow of energy"));
        assert!(text.ends_with("The two systems agree, pointing to a clear fortune."));
    }

    #[test]
    fn temperament_names_both_facets() {
        let (saju, astro) = scenario();
        let text = temperament(&saju, &astro);
        assert!(text.contains("(庚) day master"));
        assert!(text.ends_with("the Earth energy of Taurus is central."));
    }

    #[test]
    fn clash_years_warn() {
        let (saju, _) = scenario();
        let mut f = saju.yearly_fortune.clone();
        f.has_clash = true;
        assert!(year_outlook(&f).ends_with("weigh important decisions carefully."));
        f.has_clash = false;
        assert!(!year_outlook(&f).contains("clashing"));
    }

    #[test]
    fn recommendations_cover_remedy_and_lifestyle() {
        let (saju, astro) = scenario();
        let elements = synthesize_elements(&saju.elements, &astro.elements);
        let profile = personality_profile(&saju, &astro);
        let r = recommendations(&elements, &profile);
        assert_eq!(r.len(), 2);
        assert_eq!(r[0].category, RecommendationCategory::ElementRemedy);
        assert_eq!(r[0].items[0].title, "Strengthen 목(木)");
        assert_eq!(r[1].items[0].description, "A systematic, practical approach");
        assert_eq!(
            r[1].items[1].description,
            "Careful, prefers deep relationships"
        );
    }
}
