//! Cross-system conflicts.
//!
//! Two checks: the saju strongest element against the chart's dominant
//! element (through [`western_counterpart`]), and the two engines' graded
//! scores against each other. A conflict never alters a number; it only
//! attaches a resolution and lowers the harmony level.

use serde::Serialize;
use tracing::debug;

use astro_base::{AstroChart, AstroElement};
use saju_base::{Element, SajuResult};

use crate::elements::western_counterpart;

/// Score gap above which the two systems are said to diverge.
pub const DIVERGENCE_THRESHOLD: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Eastern,
    Western,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Element,
    ScoreDivergence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Conflict {
    Element {
        eastern: Element,
        /// `eastern` read as a Western element.
        mapped: AstroElement,
        western: AstroElement,
        description: String,
    },
    ScoreDivergence {
        eastern: u8,
        western: u8,
        description: String,
    },
}

impl Conflict {
    pub const fn kind(&self) -> ConflictKind {
        match self {
            Self::Element { .. } => ConflictKind::Element,
            Self::ScoreDivergence { .. } => ConflictKind::ScoreDivergence,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Element { description, .. } | Self::ScoreDivergence { description, .. } => {
                description
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum Resolution {
    /// Both readings stand side by side.
    Complementary {
        conflict: ConflictKind,
        explanation: String,
    },
    /// One system leads the descriptive guidance.
    Prioritize {
        conflict: ConflictKind,
        priority: System,
        explanation: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Harmony {
    High,
    Medium,
    NeedsAttention,
}

impl Harmony {
    pub const fn from_conflict_count(count: usize) -> Harmony {
        match count {
            0 => Self::High,
            1 => Self::Medium,
            _ => Self::NeedsAttention,
        }
    }

    /// Points added to the integrated score.
    pub const fn adjustment(self) -> i32 {
        match self {
            Self::High => 5,
            Self::Medium => 0,
            Self::NeedsAttention => -5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    pub has_conflicts: bool,
    pub conflicts: Vec<Conflict>,
    pub resolutions: Vec<Resolution>,
    pub harmony: Harmony,
}

pub fn resolve_conflicts(saju: &SajuResult, astro: &AstroChart) -> ConflictReport {
    let mut conflicts = Vec::new();
    let mut resolutions = Vec::new();

    let eastern = saju.elements.strongest.element;
    let mapped = western_counterpart(eastern);
    let western = astro.elements.dominant.element;
    if mapped != western {
        conflicts.push(Conflict::Element {
            eastern,
            mapped,
            western,
            description: format!(
                "The strongest saju element ({}) differs from the dominant Western element ({}).",
                eastern.label(),
                western.name()
            ),
        });
        resolutions.push(Resolution::Complementary {
            conflict: ConflictKind::Element,
            explanation: format!(
                "The two systems' strengths complement each other. \
                 Draw on the qualities of both {} and {}.",
                eastern.label(),
                western.name()
            ),
        });
    }

    let saju_score = saju.overall_score.grade.score;
    let astro_score = astro.score.score;
    if saju_score.abs_diff(astro_score) > DIVERGENCE_THRESHOLD {
        conflicts.push(Conflict::ScoreDivergence {
            eastern: saju_score,
            western: astro_score,
            description: format!(
                "The saju score ({saju_score}) and the Western score ({astro_score}) are far apart."
            ),
        });
        let (priority, explanation) = if saju_score > astro_score {
            (System::Eastern, "Lean on the saju reading for timing and practical judgement.")
        } else {
            (System::Western, "Lean on the Western chart for temperament and potential.")
        };
        resolutions.push(Resolution::Prioritize {
            conflict: ConflictKind::ScoreDivergence,
            priority,
            explanation: explanation.to_string(),
        });
    }

    let harmony = Harmony::from_conflict_count(conflicts.len());
    debug!(conflicts = conflicts.len(), ?harmony, "cross-system conflicts resolved");

    ConflictReport {
        has_conflicts: !conflicts.is_empty(),
        conflicts,
        resolutions,
        harmony,
    }
}
