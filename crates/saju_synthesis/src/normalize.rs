//! Per-system normalisation.
//!
//! Each system is reduced to criterion scores in [0, 100] and then to a
//! weighted mean (`overall`). The engine's own graded score is carried
//! along as `raw` and only feeds the divergence check.

use serde::Serialize;

use astro_base::{AstroChart, ElementTally};
use saju_base::{ElementAnalysis, LuckPillar, RelationSet, SajuResult, TwelveStages};
use saju_math::{ScoreGrade, clamp_score, round_score};

use crate::weights::{
    EASTERN_WEIGHTS, EasternCriterion, SystemWeights, WESTERN_WEIGHTS, WesternCriterion,
    weighted_mean,
};

/// Fixed day-master score; the day master has no scoring of its own yet.
pub const DAY_MASTER_SCORE: f64 = 70.0;
/// Luck-pillar score when a pillar covers the reference year.
pub const DAEUN_ACTIVE_SCORE: f64 = 65.0;
/// Luck-pillar score when the reference year lies outside the sequence.
pub const DAEUN_OUTSIDE_SCORE: f64 = 60.0;
/// Fixed score for the sun, moon and ascendant placements.
pub const PLACEMENT_SCORE: f64 = 70.0;

// ---------------------------------------------------------------------------
// Eastern
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EasternDetail {
    pub element_balance: f64,
    pub relations: f64,
    pub twelve_stages: f64,
    pub day_master: f64,
    pub daeun: f64,
}

impl EasternDetail {
    pub fn get(&self, criterion: EasternCriterion) -> f64 {
        match criterion {
            EasternCriterion::ElementBalance => self.element_balance,
            EasternCriterion::Relations => self.relations,
            EasternCriterion::TwelveStages => self.twelve_stages,
            EasternCriterion::DayMaster => self.day_master,
            EasternCriterion::Daeun => self.daeun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EasternScore {
    pub detail: EasternDetail,
    pub overall: u8,
    pub raw: ScoreGrade,
}

/// `100 − 15·variance` over the five element counts.
pub fn eastern_element_balance(elements: &ElementAnalysis) -> f64 {
    clamp_score(100.0 - elements.variance() * 15.0)
}

/// `50 + 10·good − 8·bad` relations.
pub fn relations_score(relations: &RelationSet) -> f64 {
    let s = &relations.summary;
    clamp_score(50.0 + 10.0 * f64::from(s.good) - 8.0 * f64::from(s.bad))
}

/// `50 + 12·good − 8·bad` stages.
pub fn stage_score(stages: &TwelveStages) -> f64 {
    clamp_score(50.0 + 12.0 * stages.good.len() as f64 - 8.0 * stages.bad.len() as f64)
}

pub fn daeun_score(current: Option<&LuckPillar>) -> f64 {
    if current.is_some() {
        DAEUN_ACTIVE_SCORE
    } else {
        DAEUN_OUTSIDE_SCORE
    }
}

pub fn normalize_eastern(saju: &SajuResult) -> EasternScore {
    let detail = EasternDetail {
        element_balance: eastern_element_balance(&saju.elements),
        relations: relations_score(&saju.relations),
        twelve_stages: stage_score(&saju.stages),
        day_master: DAY_MASTER_SCORE,
        daeun: daeun_score(saju.current_daeun.as_ref()),
    };
    EasternScore {
        detail,
        overall: round_score(weighted_mean(&EASTERN_WEIGHTS, |c| detail.get(c))),
        raw: saju.overall_score.grade,
    }
}

// ---------------------------------------------------------------------------
// Western
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WesternDetail {
    pub sun_sign: f64,
    pub moon_sign: f64,
    pub ascendant: f64,
    pub aspects: f64,
    pub elements: f64,
}

impl WesternDetail {
    pub fn get(&self, criterion: WesternCriterion) -> f64 {
        match criterion {
            WesternCriterion::SunSign => self.sun_sign,
            WesternCriterion::MoonSign => self.moon_sign,
            WesternCriterion::Ascendant => self.ascendant,
            WesternCriterion::Aspects => self.aspects,
            WesternCriterion::Elements => self.elements,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WesternScore {
    pub detail: WesternDetail,
    pub overall: u8,
    pub raw: ScoreGrade,
}

/// `50 + 8·positive − 5·challenging` aspects.
pub fn aspect_score(positive: u32, challenging: u32) -> f64 {
    clamp_score(50.0 + 8.0 * f64::from(positive) - 5.0 * f64::from(challenging))
}

/// `100 − 10·variance` over the four element counts.
pub fn western_element_balance(tally: &ElementTally) -> f64 {
    clamp_score(100.0 - tally.variance() * 10.0)
}

pub fn normalize_western(astro: &AstroChart) -> WesternScore {
    let detail = WesternDetail {
        sun_sign: PLACEMENT_SCORE,
        moon_sign: PLACEMENT_SCORE,
        ascendant: PLACEMENT_SCORE,
        aspects: aspect_score(astro.positive_aspects, astro.challenging_aspects),
        elements: western_element_balance(&astro.elements),
    };
    WesternScore {
        detail,
        overall: round_score(weighted_mean(&WESTERN_WEIGHTS, |c| detail.get(c))),
        raw: astro.score,
    }
}

/// `eastern·w.eastern + western·w.western`, rounded.
pub fn integrated_score(
    eastern: &EasternScore,
    western: &WesternScore,
    weights: SystemWeights,
) -> u8 {
    round_score(
        f64::from(eastern.overall) * weights.eastern + f64::from(western.overall) * weights.western,
    )
}
