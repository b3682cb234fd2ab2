//! One-call synthesis.
//!
//! Pipeline: validate both results, normalise each system, blend with the
//! query's weight pair, resolve conflicts, then build the element
//! synthesis, profile, narrative and flow. The final grade is the
//! integrated score shifted by the harmony level.

use serde::Serialize;
use tracing::info;

use astro_base::{ALL_PLANETS, AstroChart};
use saju_base::SajuResult;
use saju_math::{GradeScale, ScoreGrade};

use crate::conflict::{ConflictReport, Harmony, resolve_conflicts};
use crate::elements::{ElementSynthesis, synthesize_elements};
use crate::error::SynthesisError;
use crate::flow::{FortuneFlow, fortune_flow};
use crate::narrative::{InterpretationSection, Recommendation, interpretation, recommendations};
use crate::normalize::{
    EasternScore, WesternScore, integrated_score, normalize_eastern, normalize_western,
};
use crate::profile::{PersonalityProfile, personality_profile};
use crate::weights::{QueryType, SystemWeights};

/// Saju pillars counted in the element distribution.
const SAJU_ELEMENT_SLOTS: u32 = 8;
/// Years covered by the five-year fortune.
const FIVE_YEARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SynthesisScores {
    pub eastern: EasternScore,
    pub western: WesternScore,
    pub integrated: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalGrade {
    #[serde(flatten)]
    pub grade: ScoreGrade,
    pub harmony: Harmony,
}

/// Integrated score plus the harmony adjustment, clamped and graded on the
/// 85/70/55/40 scale.
pub fn final_grade(integrated: u8, harmony: Harmony) -> FinalGrade {
    let adjusted = i32::from(integrated) + harmony.adjustment();
    FinalGrade {
        grade: GradeScale::SYNTHESIS.score(f64::from(adjusted)),
        harmony,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisResult {
    pub query_type: QueryType,
    pub weights: SystemWeights,
    pub scores: SynthesisScores,
    pub conflicts: ConflictReport,
    pub elements: ElementSynthesis,
    pub personality: PersonalityProfile,
    pub interpretation: Vec<InterpretationSection>,
    pub fortune_flow: FortuneFlow,
    pub overall_grade: FinalGrade,
    pub recommendations: Vec<Recommendation>,
}

/// Structural checks on both inputs.
pub fn validate_inputs(saju: &SajuResult, astro: &AstroChart) -> Result<(), SynthesisError> {
    let reference_year = saju.reference_year;
    if saju.yearly_fortune.year != reference_year {
        return Err(SynthesisError::ReferenceYearMismatch {
            reference_year,
            fortune_year: saju.yearly_fortune.year,
        });
    }
    let span_ok = saju.five_year_fortune.len() == FIVE_YEARS
        && saju
            .five_year_fortune
            .iter()
            .zip(reference_year..)
            .all(|(f, y)| f.year == y);
    if !span_ok {
        return Err(SynthesisError::Inconsistent("five-year fortune"));
    }
    if saju.current_daeun != saju.daeun.current(reference_year).copied() {
        return Err(SynthesisError::Inconsistent("current luck pillar"));
    }
    if saju.elements.distribution.total() != SAJU_ELEMENT_SLOTS {
        return Err(SynthesisError::Inconsistent("saju element distribution"));
    }
    let saju_score = saju.overall_score.grade.score;
    if saju_score > 100 {
        return Err(SynthesisError::ScoreOutOfRange {
            what: "saju",
            value: saju_score,
        });
    }

    if let Some(missing) = ALL_PLANETS.iter().find(|p| astro.planet(**p).is_none()) {
        return Err(SynthesisError::MissingPlanet(*missing));
    }
    let tallied: u32 = astro.elements.elements.0.iter().sum();
    if tallied as usize != astro.planets.len() {
        return Err(SynthesisError::Inconsistent("western element tally"));
    }
    if astro.score.score > 100 {
        return Err(SynthesisError::ScoreOutOfRange {
            what: "western",
            value: astro.score.score,
        });
    }
    Ok(())
}

/// Blends a saju analysis and a Western chart for `query_type`.
pub fn synthesize(
    saju: &SajuResult,
    astro: &AstroChart,
    query_type: QueryType,
) -> Result<SynthesisResult, SynthesisError> {
    validate_inputs(saju, astro)?;

    let weights = query_type.weights();
    let eastern = normalize_eastern(saju);
    let western = normalize_western(astro);
    let integrated = integrated_score(&eastern, &western, weights);

    let conflicts = resolve_conflicts(saju, astro);
    let elements = synthesize_elements(&saju.elements, &astro.elements);
    let personality = personality_profile(saju, astro);
    let overall_grade = final_grade(integrated, conflicts.harmony);

    info!(
        query = %query_type,
        eastern = eastern.overall,
        western = western.overall,
        integrated,
        score = overall_grade.grade.score,
        grade = %overall_grade.grade.grade,
        "synthesis complete"
    );

    Ok(SynthesisResult {
        query_type,
        weights,
        scores: SynthesisScores {
            eastern,
            western,
            integrated,
        },
        interpretation: interpretation(saju, astro, &elements),
        fortune_flow: fortune_flow(saju),
        recommendations: recommendations(&elements, &personality),
        conflicts,
        elements,
        personality,
        overall_grade,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_math::Grade;

    #[test]
    fn harmony_shifts_the_grade() {
        assert_eq!(final_grade(70, Harmony::High).grade.score, 75);
        assert_eq!(final_grade(70, Harmony::Medium).grade.score, 70);
        assert_eq!(final_grade(70, Harmony::NeedsAttention).grade.score, 65);
        assert_eq!(final_grade(70, Harmony::NeedsAttention).grade.grade, Grade::B);
    }

    #[test]
    fn adjusted_score_is_clamped() {
        let g = final_grade(98, Harmony::High);
        assert_eq!(g.grade.score, 100);
        assert_eq!(g.grade.grade, Grade::S);
        let g = final_grade(3, Harmony::NeedsAttention);
        assert_eq!(g.grade.score, 0);
        assert_eq!(g.grade.grade, Grade::D);
    }

    #[test]
    fn tier_boundaries() {
        for (score, grade) in [
            (80, Grade::S),
            (79, Grade::A),
            (65, Grade::A),
            (64, Grade::B),
            (50, Grade::B),
            (49, Grade::C),
            (35, Grade::C),
            (34, Grade::D),
        ] {
            assert_eq!(final_grade(score, Harmony::High).grade.grade, grade, "{score}");
        }
    }
}
