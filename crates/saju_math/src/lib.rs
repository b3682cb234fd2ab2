//! Small numeric helpers shared by the chart engines.
//!
//! This crate provides:
//! - The five-tier letter grade and per-engine threshold scales
//! - `ScoreGrade`, the `{score, grade, grade_desc}` output shape
//! - Population variance, JavaScript-style rounding and score clamping
//! - Angle normalisation and shortest angular separation

pub mod angle;
pub mod grade;
pub mod stats;

pub use angle::{angular_separation, normalize_360};
pub use grade::{Grade, GradeScale, ScoreGrade};
pub use stats::{clamp_score, mean, population_variance, round_half_up, round_score};
