//! Error types for the Western chart engine.

use saju_time::TimeError;

/// Errors from chart input validation. Every computation over a validated
/// input is total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum AstroError {
    /// A birth field outside its accepted range.
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: i64 },
    #[error(transparent)]
    Time(#[from] TimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = AstroError::InvalidInput {
            field: "year",
            value: 0,
        };
        assert_eq!(e.to_string(), "invalid year: 0");
        let e: AstroError = TimeError::HourOutOfRange(24).into();
        assert_eq!(e.to_string(), "hour out of range: 24 (expected 0-23)");
    }
}
