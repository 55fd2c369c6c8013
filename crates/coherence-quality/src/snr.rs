//! Median signal-to-noise estimation

use coherence_core::{Error, Result};

/// Estimate the median signal-to-noise ratio from matched flux and error
/// arrays.
///
/// Entries contribute only when both flux and error are finite and the
/// error is positive. Returns NaN when no entry qualifies, and
/// `Error::InvalidInput` when the arrays differ in length.
pub fn median_snr(flux: &[f64], err: &[f64]) -> Result<f64> {
    if flux.len() != err.len() {
        return Err(Error::size_mismatch(flux.len(), err.len(), "error array"));
    }

    let mut ratios: Vec<f64> = flux
        .iter()
        .zip(err)
        .filter(|(f, e)| f.is_finite() && e.is_finite() && **e > 0.0)
        .map(|(f, e)| f / e)
        .collect();

    if ratios.is_empty() {
        return Ok(f64::NAN);
    }

    ratios.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = ratios.len();
    let median = if n % 2 == 0 {
        (ratios[n / 2 - 1] + ratios[n / 2]) / 2.0
    } else {
        ratios[n / 2]
    };

    Ok(median)
}
