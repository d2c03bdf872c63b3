use std::f64::consts::PI;

/// Number of chord stations on one side of the airfoil (leading and trailing edge included)
/// for a requested sample count.
pub fn half_count(sample_count: usize) -> usize {
    sample_count / 2 + 1
}

/// Generates the chord stations of a closed airfoil contour using a cosine distribution, which
/// clusters the samples at both the leading and the trailing edge. The stations run from the
/// trailing edge (`chord`) forward to the leading edge (exactly `0.0`) and back aft to the
/// trailing edge, so the result always has `2 * half_count(sample_count) - 1` entries.
pub fn cosine_spacing(chord: f64, sample_count: usize) -> Vec<f64> {
    let half = half_count(sample_count);
    let last = (half - 1).max(1) as f64;
    let half_stations: Vec<f64> = (0..half)
        .map(|i| PI * (i as f64 / last))
        .map(|theta| (chord / 2.0) * (theta.cos() + 1.0))
        .collect();

    let mut stations = half_stations.clone();
    stations.extend(half_stations.iter().rev().skip(1));
    stations
}

/// Rounds to a fixed number of decimal places. Negative zero comes back as positive zero so that
/// written coordinates stay stable.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale + 0.0
}
