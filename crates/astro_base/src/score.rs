//! Chart score.
//!
//! `50 + 5·positive − 3·challenging + max(0, 15 − 3·variance)`, where the
//! variance is over the four element counts. Rounded, clamped to [0, 100]
//! and graded on the 80/65/50/35 scale.

use saju_math::{GradeScale, ScoreGrade};

use crate::aspect::{Aspect, effect_counts};
use crate::elements::ElementTally;

/// Element-balance bonus: 15 for a perfectly even spread, shrinking with
/// the variance.
pub fn element_balance_bonus(tally: &ElementTally) -> f64 {
    (15.0 - tally.variance() * 3.0).max(0.0)
}

pub fn astro_score(aspects: &[Aspect], tally: &ElementTally) -> ScoreGrade {
    let (positive, challenging) = effect_counts(aspects);
    let raw = 50.0 + 5.0 * f64::from(positive) - 3.0 * f64::from(challenging)
        + element_balance_bonus(tally);
    GradeScale::ASTRO.score(raw)
}
