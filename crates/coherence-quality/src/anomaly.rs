//! Statistical anomaly detection over a C-Index series

use coherence_core::{CoherenceSample, CoherenceSeries};
use serde::{Deserialize, Serialize};

/// Default number of standard deviations below the mean marking an anomaly
pub const DEFAULT_THRESHOLD_SIGMA: f64 = 2.0;

/// Flags windows whose C-Index falls below `mean - sigma * std`
///
/// The threshold is recomputed from the series it is applied to, never
/// reused from a previously summarized [`CoherenceStats`] record, so a
/// non-default sigma takes effect here without touching the summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyDetector {
    /// Number of standard deviations below the mean defining an anomaly
    pub threshold_sigma: f64,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self {
            threshold_sigma: DEFAULT_THRESHOLD_SIGMA,
        }
    }
}

impl AnomalyDetector {
    /// Create a detector with a custom sigma
    pub fn new(threshold_sigma: f64) -> Self {
        Self { threshold_sigma }
    }

    /// Return the samples strictly below the threshold, preserving order.
    ///
    /// An empty series yields an empty result; no single outlier can be
    /// flagged at 2 sigma in a series of 5 or fewer samples, since its
    /// z-score is bounded by `(n - 1) / sqrt(n)`.
    pub fn detect(&self, series: &CoherenceSeries) -> Vec<CoherenceSample> {
        let values = series.c_indices();
        if values.is_empty() {
            return Vec::new();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
        let threshold = mean - self.threshold_sigma * variance.sqrt();

        series
            .iter()
            .filter(|s| s.c_index < threshold)
            .copied()
            .collect()
    }
}
