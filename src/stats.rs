use crate::chart::ChartError;

/// Elementwise `reference[i] - current[i]`.
///
/// Mismatched lengths are an error, matching the runner that produces the
/// reports: a curve whose point count changed between versions is not
/// comparable, so no truncation or padding is attempted.
pub fn pairwise_difference(reference: &[f64], current: &[f64]) -> Result<Vec<f64>, ChartError> {
    if reference.len() != current.len() {
        return Err(ChartError::LengthMismatch {
            reference: reference.len(),
            current: current.len(),
        });
    }
    Ok(reference
        .iter()
        .zip(current.iter())
        .map(|(r, c)| r - c)
        .collect())
}

/// Maximum relative deviation between reference and current samples, as a
/// percentage rounded to 3 decimals: `max |1 - ref/now| * 100`.
///
/// Samples where `now == 0` are skipped; a relative deviation against zero
/// is meaningless.
pub fn max_relative_delta_percent(reference: &[f64], current: &[f64]) -> f64 {
    let mut max_delta = 0.0_f64;
    for (r, c) in reference.iter().zip(current.iter()) {
        if *c != 0.0 {
            max_delta = max_delta.max((1.0 - r / c).abs());
        }
    }
    (max_delta * 100.0 * 1000.0).round() / 1000.0
}

/// Upper bound for the threshold slider over a whole report: ticks are
/// integers, so take `floor(delta) + 1` to leave room to slide past the
/// worst curve. An empty report yields 0.
pub fn suggested_slider_limit(deltas: impl IntoIterator<Item = f64>) -> u32 {
    deltas
        .into_iter()
        .map(|d| d.max(0.0) as u32 + 1)
        .max()
        .unwrap_or(0)
}
