//! Day-master profiles, the lucky guide for the favourable element, and
//! the one-line chart summary.

use serde::Serialize;

use crate::element::Element;
use crate::element_analysis::ElementAnalysis;
use crate::stem::Stem;

/// Character sketch of a day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMasterProfile {
    pub stem: Stem,
    pub korean: &'static str,
    pub element: Element,
    /// Nature image, e.g. "a tall tree".
    pub image: &'static str,
    pub personality: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub advice: &'static str,
}

struct ProfileText {
    image: &'static str,
    personality: &'static str,
    strengths: &'static [&'static str],
    weaknesses: &'static [&'static str],
    advice: &'static str,
}

const PROFILES: [ProfileText; 10] = [
    ProfileText {
        image: "a tall tree",
        personality: "Straight and honest like a tall tree, a leader with principles of their own. Once a decision is made it does not bend.",
        strengths: &["leadership", "honesty", "drive", "responsibility"],
        weaknesses: &["stubbornness", "rigidity", "difficulty compromising"],
        advice: "Cultivating flexibility opens the way to greater success. Listen to other people's views too.",
    },
    ProfileText {
        image: "grass and vines",
        personality: "Supple and adaptable like young grass. There is toughness inside the softness that survives any environment.",
        strengths: &["adaptability", "flexibility", "patience", "delicacy"],
        weaknesses: &["indecision", "dependence", "reluctance to assert oneself"],
        advice: "Express your own opinions more actively. Your thoughts matter as well.",
    },
    ProfileText {
        image: "the sun",
        personality: "Bright and passionate like the sun. A natural charisma that draws attention and lights up the people around.",
        strengths: &["passion", "optimism", "sociability", "expressiveness"],
        weaknesses: &["impatience", "impulsiveness", "lack of stamina"],
        advice: "Building persistence helps finish what you start. Calm can be one of your strengths too.",
    },
    ProfileText {
        image: "a candle flame",
        personality: "Delicate and warm like candlelight. Considerate of others, quiet but with deep influence.",
        strengths: &["sensitivity", "consideration", "insight", "focus"],
        weaknesses: &["touchiness", "timidity", "excessive worry"],
        advice: "Be confident; your sensitivity is a real strength. Action often answers what worry cannot.",
    },
    ProfileText {
        image: "a great mountain",
        personality: "Solid and trustworthy like a great mountain. Gives others stability and keeps relationships for a long time.",
        strengths: &["reliability", "stability", "tolerance", "perseverance"],
        weaknesses: &["resistance to change", "slowness", "fixed ideas"],
        advice: "Now and then a new challenge is needed. Try small changes within your stability.",
    },
    ProfileText {
        image: "fertile farmland",
        personality: "Embracing like fertile soil. Practical and realistic, with room to take care of those nearby.",
        strengths: &["tolerance", "practicality", "realism", "devotion"],
        weaknesses: &["self-sacrifice", "indecision", "dependence"],
        advice: "Keep time for yourself. Look after yourself as much as you look after others.",
    },
    ProfileText {
        image: "rock and raw iron",
        personality: "Decisive like hard rock or iron. Strong-willed, heading straight for the goal with the power to execute.",
        strengths: &["decisiveness", "willpower", "execution", "sense of justice"],
        weaknesses: &["aggressiveness", "obstinacy", "reserved emotions"],
        advice: "Softness is also strength. Practising emotional expression will improve your relationships.",
    },
    ProfileText {
        image: "a jewel",
        personality: "Refined and perfectionist like a jewel. Pursues beauty and holds high standards.",
        strengths: &["aesthetic sense", "perfectionism", "precision", "grace"],
        weaknesses: &["fussiness", "criticism", "vulnerability to stress"],
        advice: "It is fine not to be perfect. Enjoying the process improves the result.",
    },
    ProfileText {
        image: "the sea and great rivers",
        personality: "Wise and embracing like the sea. A deep inner self that no situation shakes.",
        strengths: &["wisdom", "tolerance", "adaptability", "creativity"],
        weaknesses: &["lack of direction", "distraction", "shallowness"],
        advice: "A clear goal lets you spend your energy efficiently. Decide where to focus.",
    },
    ProfileText {
        image: "dew and rain",
        personality: "Intuitive and sensitive like dew or rain, with a feel for what cannot be seen.",
        strengths: &["intuition", "sensitivity", "imagination", "empathy"],
        weaknesses: &["lack of realism", "mood swings", "melancholy"],
        advice: "Keep your feet on the ground. Intuition shines brightest when it meets reality.",
    },
];

/// Profile of a day stem.
pub fn day_master_profile(stem: Stem) -> DayMasterProfile {
    let text = &PROFILES[stem.index() as usize];
    DayMasterProfile {
        stem,
        korean: stem.korean(),
        element: stem.element(),
        image: text.image,
        personality: text.personality,
        strengths: text.strengths,
        weaknesses: text.weaknesses,
        advice: text.advice,
    }
}

/// Colours, numbers and direction associated with the favourable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckyGuide {
    pub element: Element,
    pub colors: [&'static str; 2],
    pub numbers: [u8; 2],
    pub direction: &'static str,
    pub objects: &'static str,
}

pub const fn lucky_guide(yongsin: Element) -> LuckyGuide {
    let (colors, numbers, direction, objects) = match yongsin {
        Element::Wood => (["green", "blue"], [3, 8], "east", "trees and plants"),
        Element::Fire => (["red", "purple"], [2, 7], "south", "fire and light"),
        Element::Earth => (["yellow", "brown"], [5, 10], "centre", "soil and ceramics"),
        Element::Metal => (["white", "gold"], [4, 9], "west", "metal and jewellery"),
        Element::Water => (["black", "navy"], [1, 6], "north", "water and glass"),
    };
    LuckyGuide {
        element: yongsin,
        colors,
        numbers,
        direction,
        objects,
    }
}

/// Short textual summary of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuSummary {
    pub day_master: String,
    pub yongsin: String,
    pub strongest: String,
    pub weakest: String,
}

pub fn summarize(day_master: Stem, elements: &ElementAnalysis) -> SajuSummary {
    SajuSummary {
        day_master: format!(
            "{}({}) day master, {} element",
            day_master.hanja(),
            day_master.korean(),
            day_master.element().english()
        ),
        yongsin: format!("Favourable element: {}", elements.yongsin.label()),
        strongest: format!(
            "Strongest element: {} ({})",
            elements.strongest.element.label(),
            elements.strongest.count
        ),
        weakest: format!(
            "Weakest element: {} ({})",
            elements.weakest.element.label(),
            elements.weakest.count
        ),
    }
}
