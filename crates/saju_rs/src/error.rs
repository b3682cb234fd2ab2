//! Unified error type for the convenience wrapper.

use astro_base::AstroError;
use saju_base::SajuError;
use saju_config::ConfigError;
use saju_synthesis::SynthesisError;
use saju_time::TimeError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SajuRsError {
    /// [`crate::init`] was called twice.
    #[error("engine configuration already initialized")]
    AlreadyInitialized,
    /// A birth or date string that could not be parsed.
    #[error("cannot parse {what} from {input:?}")]
    Parse { what: &'static str, input: String },
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Saju(#[from] SajuError),
    #[error(transparent)]
    Astro(#[from] AstroError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = SajuRsError::Parse {
            what: "gender",
            input: "x".into(),
        };
        assert_eq!(e.to_string(), "cannot parse gender from \"x\"");
        let e: SajuRsError = TimeError::HourOutOfRange(25).into();
        assert_eq!(e.to_string(), "hour out of range: 25 (expected 0-23)");
    }
}
