//! Error types for calendar input handling.

/// Errors from calendar validation or date parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("month out of range: {0} (expected 1-12)")]
    MonthOutOfRange(u32),
    /// Day outside the accepted range.
    #[error("day out of range: {day} (expected 1-{max})")]
    DayOutOfRange { day: u32, max: u32 },
    /// Hour outside 0..=23.
    #[error("hour out of range: {0} (expected 0-23)")]
    HourOutOfRange(u32),
    /// Minute outside 0..=59.
    #[error("minute out of range: {0} (expected 0-59)")]
    MinuteOutOfRange(u32),
    /// Latitude/longitude outside the valid sphere.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// A date string could not be parsed.
    #[error("cannot parse date {0:?} (expected YYYY-MM-DD)")]
    Parse(String),
}
