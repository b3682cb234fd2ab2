//! Error types for the synthesis engine.

use astro_base::Planet;

/// Structurally invalid inputs. Results built by `saju_base::calculate`
/// and `astro_base::calculate` always pass; these guard hand-assembled or
/// edited results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SynthesisError {
    #[error("yearly fortune is for {fortune_year}, expected the reference year {reference_year}")]
    ReferenceYearMismatch {
        reference_year: i32,
        fortune_year: i32,
    },
    #[error("western chart has no position for {0}")]
    MissingPlanet(Planet),
    #[error("{what} score out of range: {value}")]
    ScoreOutOfRange { what: &'static str, value: u8 },
    /// Two fields of one result disagree.
    #[error("inconsistent {0}")]
    Inconsistent(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = SynthesisError::ReferenceYearMismatch {
            reference_year: 2026,
            fortune_year: 2025,
        };
        assert_eq!(
            e.to_string(),
            "yearly fortune is for 2025, expected the reference year 2026"
        );
        assert_eq!(
            SynthesisError::MissingPlanet(Planet::Moon).to_string(),
            "western chart has no position for Moon"
        );
        assert_eq!(
            SynthesisError::Inconsistent("five-year fortune").to_string(),
            "inconsistent five-year fortune"
        );
    }
}
