//! Error types for chart construction and analysis.

use saju_time::TimeError;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from the saju engine.
///
/// Only raw-input validation fails; every analysis over a constructed chart
/// is total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SajuError {
    /// A birth field outside its accepted range.
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: i64 },
    #[error("unknown gender: {0:?} (expected \"male\" or \"female\")")]
    UnknownGender(String),
    /// A stem and branch of different polarity.
    #[error("{stem}{branch} is not part of the sexagenary cycle")]
    InvalidPillar { stem: Stem, branch: Branch },
    #[error("unknown stem, branch or pillar name: {0:?}")]
    UnknownName(String),
    #[error(transparent)]
    Time(#[from] TimeError),
}
