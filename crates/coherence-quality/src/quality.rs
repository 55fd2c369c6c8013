//! Categorical quality scoring from coherence statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative assessment of spectral coherence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLabel {
    /// mean > 0.85 and cv < 0.05
    Excellent,
    /// mean > 0.80 and cv < 0.10
    Good,
    /// mean > 0.70 and cv < 0.15
    Fair,
    /// Everything else
    Poor,
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityLabel::Excellent => write!(f, "Excellent"),
            QualityLabel::Good => write!(f, "Good"),
            QualityLabel::Fair => write!(f, "Fair"),
            QualityLabel::Poor => write!(f, "Poor"),
        }
    }
}

/// Map mean C-Index and its coefficient of variation to a quality label.
///
/// Rules are evaluated in order, first match wins. Total over all inputs:
/// NaN fails every comparison and falls through to `Poor`.
///
/// ```rust
/// use coherence_quality::{classify, QualityLabel};
///
/// assert_eq!(classify(0.90, 0.03), QualityLabel::Excellent);
/// assert_eq!(classify(0.65, 0.20), QualityLabel::Poor);
/// ```
pub fn classify(mean: f64, cv: f64) -> QualityLabel {
    if mean > 0.85 && cv < 0.05 {
        QualityLabel::Excellent
    } else if mean > 0.80 && cv < 0.10 {
        QualityLabel::Good
    } else if mean > 0.70 && cv < 0.15 {
        QualityLabel::Fair
    } else {
        QualityLabel::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_bucket() {
        assert_eq!(classify(0.90, 0.03), QualityLabel::Excellent);
        assert_eq!(classify(0.85, 0.07), QualityLabel::Good);
        assert_eq!(classify(0.75, 0.12), QualityLabel::Fair);
        assert_eq!(classify(0.65, 0.20), QualityLabel::Poor);
    }

    #[test]
    fn test_classify_boundaries_are_strict() {
        // Thresholds themselves do not qualify
        assert_eq!(classify(0.85, 0.03), QualityLabel::Good);
        assert_eq!(classify(0.90, 0.05), QualityLabel::Good);
        assert_eq!(classify(0.80, 0.07), QualityLabel::Fair);
        assert_eq!(classify(0.70, 0.12), QualityLabel::Poor);
    }

    #[test]
    fn test_high_mean_with_high_scatter_degrades() {
        // A high mean alone is not enough
        assert_eq!(classify(0.95, 0.12), QualityLabel::Fair);
        assert_eq!(classify(0.95, 0.30), QualityLabel::Poor);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(f64::NAN, 0.01), QualityLabel::Poor);
        assert_eq!(classify(0.9, f64::NAN), QualityLabel::Poor);
        assert_eq!(classify(f64::NAN, f64::NAN), QualityLabel::Poor);
        assert_eq!(classify(-1.0, 0.01), QualityLabel::Poor);
        assert_eq!(classify(f64::INFINITY, 0.0), QualityLabel::Excellent);
    }

    #[test]
    fn test_display() {
        assert_eq!(QualityLabel::Excellent.to_string(), "Excellent");
        assert_eq!(QualityLabel::Poor.to_string(), "Poor");
    }
}
