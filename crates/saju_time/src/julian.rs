//! Julian Day for the simplified chart formulas.
//!
//! Meeus-style conversion with the Gregorian correction term applied to
//! every date (no Julian-calendar switch before 1582).

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day for a Gregorian date, `day_frac` carrying the time of day
/// (e.g. `15.5` = the 15th at 12:00).
///
/// JD = ⌊365.25 (Y + 4716)⌋ + ⌊30.6001 (M + 1)⌋ + D + B − 1524.5,
/// with Jan/Feb counted as months 13/14 of the previous year and
/// B = 2 − A + ⌊A/4⌋, A = ⌊Y/100⌋.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Days elapsed since J2000.0 at `hour` (fractional, UT) on the given date.
pub fn days_since_j2000(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    calendar_to_jd(year, month, day as f64 + hour / 24.0) - J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn j2000_noon() {
        assert_abs_diff_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD, epsilon = 1e-9);
        assert_abs_diff_eq!(days_since_j2000(2000, 1, 1, 12.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn known_dates() {
        // Meeus, Astronomical Algorithms, example 7.a: 1957-10-04.81
        assert_abs_diff_eq!(calendar_to_jd(1957, 10, 4.81), 2_436_116.31, epsilon = 1e-6);
        // 1900-01-01 00:00
        assert_abs_diff_eq!(calendar_to_jd(1900, 1, 1.0), 2_415_020.5, epsilon = 1e-9);
    }
}
