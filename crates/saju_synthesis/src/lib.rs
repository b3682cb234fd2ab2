//! East/West synthesis engine.
//!
//! This crate provides:
//! - Query-type weight pairs and per-system criterion weights
//! - Normalisation of a saju analysis and a Western chart onto 0-100 scales
//! - Cross-system conflict detection with non-destructive resolutions
//! - Element synthesis, personality profile, narrative sections and
//!   multi-year fortune flow
//! - The final harmony-adjusted grade
//!
//! Inputs are the finished results of `saju_base::calculate` and
//! `astro_base::calculate`; [`synthesize`] rejects results that are not
//! internally consistent instead of guessing.

pub mod conflict;
pub mod elements;
pub mod error;
pub mod flow;
pub mod narrative;
pub mod normalize;
pub mod profile;
pub mod synthesis;
pub mod weights;

pub use conflict::{
    Conflict, ConflictKind, ConflictReport, Harmony, Resolution, System, resolve_conflicts,
};
pub use elements::{
    ElementRecommendation, ElementSynthesis, ElementTraits, element_traits, synthesize_elements,
    western_counterpart,
};
pub use error::SynthesisError;
pub use flow::{CurrentYearFlow, FortuneFlow, YearFlow, YearRating, fortune_flow, year_rating};
pub use narrative::{
    InterpretationSection, Recommendation, RecommendationCategory, RecommendationItem,
    SectionKind, interpretation, recommendations,
};
pub use normalize::{
    EasternDetail, EasternScore, WesternDetail, WesternScore, integrated_score, normalize_eastern,
    normalize_western,
};
pub use profile::{
    EmotionalPattern, PersonalityProfile, SocialStyle, WorkStyle, personality_profile,
};
pub use synthesis::{
    FinalGrade, SynthesisResult, SynthesisScores, final_grade, synthesize, validate_inputs,
};
pub use weights::{
    ALL_QUERY_TYPES, CriterionWeight, EASTERN_WEIGHTS, EasternCriterion, QueryType, SystemWeights,
    WESTERN_WEIGHTS, WesternCriterion, weighted_mean,
};
