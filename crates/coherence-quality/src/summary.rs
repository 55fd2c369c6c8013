//! Summary statistics over a C-Index series

use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics for one C-Index series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoherenceStats {
    /// Mean C-Index
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Coefficient of variation (std/mean when mean > 0, else 0)
    pub cv: f64,
    /// Two-sigma anomaly threshold (mean - 2*std)
    pub anomaly_threshold: f64,
    /// Number of values summarized
    pub n_values: usize,
}

impl CoherenceStats {
    /// Check whether the record was derived from at least one value
    pub fn has_samples(&self) -> bool {
        self.n_values > 0
    }

    fn nan() -> Self {
        Self {
            mean: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            cv: 0.0,
            anomaly_threshold: f64::NAN,
            n_values: 0,
        }
    }
}

impl fmt::Display for CoherenceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coherence Statistics:")?;
        writeln!(f, "  Mean C-Index: {:.4} ± {:.4}", self.mean, self.std_dev)?;
        writeln!(f, "  Range: [{:.4}, {:.4}]", self.min, self.max)?;
        writeln!(f, "  Coefficient of variation: {:.2}%", self.cv * 100.0)?;
        writeln!(f, "  Anomaly threshold: {:.4}", self.anomaly_threshold)?;
        writeln!(f, "  Windows: {}", self.n_values)?;
        Ok(())
    }
}

/// Reduce a sequence of C-Index values to descriptive statistics.
///
/// Uses the population standard deviation. The cv guard is `mean > 0`,
/// deliberately looser than the per-window `|mean| > 1e-10` stability guard;
/// the two must not be unified because they land inputs in different quality
/// buckets.
///
/// An empty input produces a NaN-filled record with `n_values = 0` and
/// `cv = 0` rather than an error; classifying such a record yields `Poor`.
/// Callers wanting an explicit failure should go through
/// `CoherenceAnalyzer::assess`, which rejects empty series up front.
pub fn summarize(values: &[f64]) -> CoherenceStats {
    if values.is_empty() {
        return CoherenceStats::nan();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let mut min = values[0];
    let mut max = values[0];
    for &v in &values[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let cv = if mean > 0.0 { std_dev / mean } else { 0.0 };

    CoherenceStats {
        mean,
        std_dev,
        min,
        max,
        cv,
        anomaly_threshold: mean - 2.0 * std_dev,
        n_values: values.len(),
    }
}
