//! Personality profile.
//!
//! The day master and the sun sign are kept as parallel facets. Style tags
//! come from simple count thresholds over both element tallies.

use serde::Serialize;

use astro_base::{AstroChart, AstroElement, ZodiacSign};
use saju_base::{Element, SajuResult, Stem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EasternFacet {
    pub stem: Stem,
    pub element: Element,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WesternFacet {
    pub sign: ZodiacSign,
    pub element: AstroElement,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreTraits {
    pub eastern: EasternFacet,
    pub western: WesternFacet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialStyle {
    Sociable,
    Reserved,
}

impl SocialStyle {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sociable => "Sociable and enjoys communicating",
            Self::Reserved => "Careful, prefers deep relationships",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    Systematic,
    Creative,
}

impl WorkStyle {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Systematic => "A systematic, practical approach",
            Self::Creative => "A creative, flexible approach",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalPattern {
    Intuitive,
    Composed,
}

impl EmotionalPattern {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Intuitive => "Rich in feeling and intuitive",
            Self::Composed => "Rational and steady",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityProfile {
    pub core_traits: CoreTraits,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub social_style: SocialStyle,
    pub work_style: WorkStyle,
    pub emotional_pattern: EmotionalPattern,
}

pub fn personality_profile(saju: &SajuResult, astro: &AstroChart) -> PersonalityProfile {
    let dm = &saju.day_master;
    let sign = astro.sun_sign;
    let core_traits = CoreTraits {
        eastern: EasternFacet {
            stem: dm.stem,
            element: dm.element,
            image: dm.image,
            description: dm.personality,
        },
        western: WesternFacet {
            sign,
            element: sign.element(),
            description: format!("{} - {} element", sign.name(), sign.element().name()),
        },
    };

    let mut strengths: Vec<String> = saju
        .stages
        .good
        .iter()
        .map(|s| s.info.description.to_string())
        .collect();
    if astro.positive_aspects > 0 {
        strengths.push("harmonious planetary aspects".to_string());
    }

    let mut challenges: Vec<String> = saju
        .stages
        .bad
        .iter()
        .map(|s| s.info.description.to_string())
        .collect();
    if saju.void.has_void {
        challenges.push(saju.void.description.clone());
    }

    let eastern = |e: Element| saju.elements.distribution.get(e);
    let western = |e: AstroElement| astro.elements.elements.get(e);

    let social_style = if eastern(Element::Wood) >= 2 || western(AstroElement::Air) >= 3 {
        SocialStyle::Sociable
    } else {
        SocialStyle::Reserved
    };
    let work_style = if eastern(Element::Metal) >= 2 || eastern(Element::Earth) >= 2 {
        WorkStyle::Systematic
    } else {
        WorkStyle::Creative
    };
    let emotional_pattern = if eastern(Element::Water) >= 2 || western(AstroElement::Water) >= 3 {
        EmotionalPattern::Intuitive
    } else {
        EmotionalPattern::Composed
    };

    PersonalityProfile {
        core_traits,
        strengths,
        challenges,
        social_style,
        work_style,
        emotional_pattern,
    }
}
