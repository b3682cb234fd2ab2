//! Overall chart score.
//!
//! 50 + 5 per favourable stage − 3 per unfavourable stage + 8 per
//! combination − 5 per clash/punishment/destruction/harm + an element
//! balance bonus of `max(0, 20 − 5·variance)`; rounded, clamped and graded
//! on the 85/70/55/40 scale.

use serde::Serialize;

use saju_math::{GradeScale, ScoreGrade, round_half_up};

use crate::element_analysis::ElementAnalysis;
use crate::relations::RelationSet;
use crate::twelve_stages::TwelveStages;

/// Signed contribution of each factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub stages: i32,
    pub relations: i32,
    pub balance: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallScore {
    #[serde(flatten)]
    pub grade: ScoreGrade,
    pub breakdown: ScoreBreakdown,
}

/// Element balance bonus in [0, 20].
pub fn balance_bonus(elements: &ElementAnalysis) -> f64 {
    (20.0 - elements.variance() * 5.0).max(0.0)
}

pub fn overall_score(
    stages: &TwelveStages,
    relations: &RelationSet,
    elements: &ElementAnalysis,
) -> OverallScore {
    let stage_part = 5 * stages.good.len() as i32 - 3 * stages.bad.len() as i32;
    let relation_part = 8 * relations.summary.good as i32 - 5 * relations.summary.bad as i32;
    let balance = balance_bonus(elements);
    let raw = 50.0 + f64::from(stage_part) + f64::from(relation_part) + balance;

    OverallScore {
        grade: GradeScale::SAJU.score(raw),
        breakdown: ScoreBreakdown {
            stages: stage_part,
            relations: relation_part,
            balance: round_half_up(balance) as i32,
        },
    }
}
