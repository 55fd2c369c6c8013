//! Per-window coherence metrics
//!
//! The C-Index for one window combines three normalized components:
//! smoothness (inverse local gradient relative to the window's own spread),
//! stability (inverse coefficient of variation), and consistency (lag-1
//! autocorrelation mapped onto [0, 1]). Each component lies in [0, 1], so
//! their equal-weight mean does too.

/// Guard against division by zero on constant or zero-mean windows
const GUARD_EPS: f64 = 1e-10;

/// The three normalized sub-metrics for one analysis window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    /// Inverse of the mean absolute gradient, normalized by the window spread
    pub smoothness: f64,
    /// Inverse coefficient of variation; 0.5 when the mean is near zero
    pub stability: f64,
    /// Lag-1 autocorrelation rescaled from [-1, 1] to [0, 1]; 0.5 when
    /// undefined
    pub consistency: f64,
}

impl WindowMetrics {
    /// Compute the sub-metrics for one finite-valued window.
    ///
    /// The caller is expected to have filtered out non-finite entries; the
    /// scanner guarantees at least 10 samples. An empty segment scores the
    /// neutral 0.5 on every component.
    pub fn compute(segment: &[f64]) -> Self {
        if segment.is_empty() {
            return Self {
                smoothness: 0.5,
                stability: 0.5,
                consistency: 0.5,
            };
        }

        let mean_val = mean(segment);
        let std_val = population_std(segment, mean_val);

        let smoothness = 1.0 / (1.0 + mean_abs_gradient(segment) / (std_val + GUARD_EPS));

        let stability = if mean_val.abs() > GUARD_EPS {
            let cv = std_val / mean_val.abs();
            1.0 / (1.0 + cv)
        } else {
            0.5
        };

        let consistency = if segment.len() > 1 {
            let r = lag1_correlation(segment);
            if r.is_finite() {
                // sqrt rounding can push |r| a hair past 1 on perfectly
                // correlated segments
                ((r + 1.0) / 2.0).clamp(0.0, 1.0)
            } else {
                0.5
            }
        } else {
            0.5
        };

        Self {
            smoothness,
            stability,
            consistency,
        }
    }

    /// Combined C-Index: the equal-weight mean of the three components
    pub fn c_index(&self) -> f64 {
        (self.smoothness + self.stability + self.consistency) / 3.0
    }
}

/// Arithmetic mean of a non-empty slice
fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation around a precomputed mean
fn population_std(data: &[f64], mean_val: f64) -> f64 {
    let variance = data.iter().map(|&x| (x - mean_val).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Mean absolute successive difference; 0 when there are no pairs
fn mean_abs_gradient(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    data.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>() / (data.len() - 1) as f64
}

/// Pearson correlation of the segment with itself shifted by one sample.
/// Non-finite (NaN) for constant segments, matching the undefined 0/0 ratio.
fn lag1_correlation(segment: &[f64]) -> f64 {
    let n = segment.len() - 1;
    let x = &segment[..n];
    let y = &segment[1..];

    let x_mean = mean(x);
    let y_mean = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - x_mean;
        let dy = y[i] - y_mean;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x * var_y).sqrt()
}
