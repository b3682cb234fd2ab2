//! Averages, variance and score rounding.

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`); 0 for an empty slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
}

/// Rounds half-way cases toward +∞ (`-2.5` → `-2`), matching the rounding
/// the score formulas were tuned with.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Clamps to [0, 100]. NaN maps to 0.
pub fn clamp_score(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 100.0) }
}

/// Rounds, then clamps to an integer score in [0, 100].
pub fn round_score(x: f64) -> u8 {
    clamp_score(round_half_up(x)) as u8
}
