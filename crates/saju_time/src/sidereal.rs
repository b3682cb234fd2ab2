//! Mean local sidereal time, low-precision form.
//!
//! LST ≈ 100.46° + 0.985647°·d + λ + 15°·UT, where `d` is days since
//! J2000.0 and λ is east longitude. Good to a fraction of a degree over
//! the 20th/21st centuries, which is all the ascendant estimate needs.

/// Local sidereal time in degrees, normalised to [0, 360).
pub fn local_sidereal_deg(days_since_j2000: f64, ut_hours: f64, longitude_east_deg: f64) -> f64 {
    (100.46 + 0.985647 * days_since_j2000 + longitude_east_deg + ut_hours * 15.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn greenwich_at_epoch_midnight() {
        assert_abs_diff_eq!(local_sidereal_deg(0.0, 0.0, 0.0), 100.46, epsilon = 1e-12);
    }

    #[test]
    fn wraps_into_range() {
        let lst = local_sidereal_deg(-10_000.0, 23.0, -170.0);
        assert!((0.0..360.0).contains(&lst));
    }
}
