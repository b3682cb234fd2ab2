//! Five-element / four-element synthesis.
//!
//! The two tallies are read side by side; nothing is forced into a single
//! combined element. Wood reads as Air and metal as Earth.

use serde::Serialize;

use astro_base::elements::DominantElement;
use astro_base::{AstroElement, ElementTally};
use saju_base::{Element, ElementAnalysis, ElementCount};

use crate::normalize::{eastern_element_balance, western_element_balance};

/// Western element that carries the same qualities as a saju element.
pub const fn western_counterpart(element: Element) -> AstroElement {
    match element {
        Element::Wood => AstroElement::Air,
        Element::Fire => AstroElement::Fire,
        Element::Earth | Element::Metal => AstroElement::Earth,
        Element::Water => AstroElement::Water,
    }
}

/// Keywords of a Western element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementTraits {
    pub traits: [&'static str; 4],
    pub positive: [&'static str; 2],
    pub negative: [&'static str; 2],
}

pub const fn element_traits(element: AstroElement) -> ElementTraits {
    match element {
        AstroElement::Fire => ElementTraits {
            traits: ["passion", "energy", "leadership", "creativity"],
            positive: ["drive", "confidence"],
            negative: ["impatience", "impulsiveness"],
        },
        AstroElement::Earth => ElementTraits {
            traits: ["stability", "practicality", "reliability", "patience"],
            positive: ["perseverance", "a sense of reality"],
            negative: ["stubbornness", "rigidity"],
        },
        AstroElement::Air => ElementTraits {
            traits: ["communication", "intellect", "flexibility", "sociability"],
            positive: ["adaptability", "analytical skill"],
            negative: ["indecision", "superficiality"],
        },
        AstroElement::Water => ElementTraits {
            traits: ["intuition", "sensitivity", "empathy", "healing"],
            positive: ["insight", "consideration"],
            negative: ["mood swings", "dependence"],
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DominantPair {
    pub eastern: ElementCount,
    pub western: DominantElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeakWestern {
    pub element: AstroElement,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeakPair {
    pub eastern: ElementCount,
    pub western: WeakWestern,
}

/// Balance scores in [0, 100]: `100 − 15·variance` east, `100 − 10·variance`
/// west.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalancePair {
    pub eastern: f64,
    pub western: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRecommendation {
    pub element: Element,
    pub counterpart: AstroElement,
    pub reason: String,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSynthesis {
    pub dominant: DominantPair,
    pub weak: WeakPair,
    pub balance: BalancePair,
    /// One entry per element tied for weakest in the saju tally.
    pub recommendations: Vec<ElementRecommendation>,
}

fn recommend(element: Element) -> ElementRecommendation {
    let counterpart = western_counterpart(element);
    let [first, second] = element_traits(counterpart).positive;
    ElementRecommendation {
        element,
        counterpart,
        reason: format!("{} is lacking.", element.label()),
        advice: format!("Cultivating {first} and {second} will help."),
    }
}

pub fn synthesize_elements(saju: &ElementAnalysis, astro: &ElementTally) -> ElementSynthesis {
    let (weak_element, weak_count) = astro.elements.weakest();
    let weak_tied: &[Element] = if saju.weakest_tied.is_empty() {
        std::slice::from_ref(&saju.weakest.element)
    } else {
        &saju.weakest_tied
    };

    ElementSynthesis {
        dominant: DominantPair {
            eastern: saju.strongest,
            western: astro.dominant,
        },
        weak: WeakPair {
            eastern: saju.weakest,
            western: WeakWestern {
                element: weak_element,
                count: weak_count,
            },
        },
        balance: BalancePair {
            eastern: eastern_element_balance(saju),
            western: western_element_balance(astro),
        },
        recommendations: weak_tied.iter().map(|e| recommend(*e)).collect(),
    }
}
