//! End-to-end coherence assessment
//!
//! Ties the scanner, summary statistics, anomaly detection, and quality
//! scoring together into a single pipeline over one flux array, plus a
//! batch layer that compares assessments across independent spectra.

use crate::anomaly::AnomalyDetector;
use crate::quality::{classify, QualityLabel};
use crate::summary::{summarize, CoherenceStats};
use coherence_core::{
    CoherenceSample, CoherenceScanner, CoherenceSeries, Error, Result, ScanConfig,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Full assessment of one spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceAssessment {
    /// The scored windows
    pub series: CoherenceSeries,
    /// Descriptive statistics over the series
    pub stats: CoherenceStats,
    /// Categorical quality judgment
    pub quality: QualityLabel,
    /// Windows flagged below the anomaly threshold
    pub anomalies: Vec<CoherenceSample>,
}

impl fmt::Display for CoherenceAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coherence Assessment:")?;
        writeln!(
            f,
            "  Mean C-Index: {:.4} ± {:.4}",
            self.stats.mean, self.stats.std_dev
        )?;
        writeln!(
            f,
            "  C-Index range: [{:.4}, {:.4}]",
            self.stats.min, self.stats.max
        )?;
        writeln!(
            f,
            "  Coefficient of variation: {:.2}%",
            self.stats.cv * 100.0
        )?;
        writeln!(f, "  Quality: {}", self.quality)?;
        writeln!(
            f,
            "  Anomalous windows: {} of {}",
            self.anomalies.len(),
            self.series.len()
        )?;
        Ok(())
    }
}

/// One-call analysis pipeline: scan, summarize, classify, flag
#[derive(Debug, Clone, Default)]
pub struct CoherenceAnalyzer {
    scanner: CoherenceScanner,
    detector: AnomalyDetector,
}

impl CoherenceAnalyzer {
    /// Create an analyzer with the given scan configuration and the
    /// default anomaly threshold
    pub fn new(config: ScanConfig) -> Result<Self> {
        Ok(Self {
            scanner: CoherenceScanner::new(config)?,
            detector: AnomalyDetector::default(),
        })
    }

    /// Override the anomaly threshold sigma
    pub fn with_threshold_sigma(mut self, threshold_sigma: f64) -> Self {
        self.detector = AnomalyDetector::new(threshold_sigma);
        self
    }

    /// Assess one flux array.
    ///
    /// Unlike the underlying scan, this entry point is fallible: when no
    /// window could be scored the caller gets an explicit error instead of
    /// a NaN-filled statistics record.
    pub fn assess(&self, flux: &[f64]) -> Result<CoherenceAssessment> {
        let series = self.scanner.scan(flux);

        if series.is_empty() {
            let finite = flux.iter().filter(|v| v.is_finite()).count();
            let window = self.scanner.config().window;
            if finite < window {
                return Err(Error::InsufficientData {
                    expected: window,
                    actual: finite,
                });
            }
            return Err(Error::Computation(
                "no window passed the validity filters".to_string(),
            ));
        }

        let stats = summarize(&series.c_indices());
        let quality = classify(stats.mean, stats.cv);
        let anomalies = self.detector.detect(&series);

        debug!(
            windows = series.len(),
            mean = stats.mean,
            cv = stats.cv,
            %quality,
            anomalies = anomalies.len(),
            "assessed spectrum"
        );

        Ok(CoherenceAssessment {
            series,
            stats,
            quality,
            anomalies,
        })
    }

    /// Assess several independent spectra, isolating per-spectrum failures
    #[cfg(not(feature = "parallel"))]
    pub fn assess_many(&self, spectra: &[Vec<f64>]) -> Vec<Result<CoherenceAssessment>> {
        spectra.iter().map(|flux| self.assess(flux)).collect()
    }

    /// Assess several independent spectra in parallel
    #[cfg(feature = "parallel")]
    pub fn assess_many(&self, spectra: &[Vec<f64>]) -> Vec<Result<CoherenceAssessment>> {
        spectra.par_iter().map(|flux| self.assess(flux)).collect()
    }
}

/// Agreement of coherence quality across a set of spectra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyRating {
    /// Cross-spectrum cv below 0.05
    High,
    /// Cross-spectrum cv between 0.05 and 0.15
    Moderate,
    /// Cross-spectrum cv above 0.15
    Low,
}

impl fmt::Display for ConsistencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyRating::High => write!(f, "High"),
            ConsistencyRating::Moderate => write!(f, "Moderate"),
            ConsistencyRating::Low => write!(f, "Low"),
        }
    }
}

/// Cross-spectrum statistics over per-spectrum mean C-Index values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of spectra summarized
    pub n_spectra: usize,
    /// Mean of the per-spectrum mean C-Index values
    pub overall_mean: f64,
    /// Population standard deviation of the per-spectrum means
    pub overall_std: f64,
    /// Cross-spectrum coefficient of variation
    pub overall_cv: f64,
    /// Categorical agreement rating
    pub consistency: ConsistencyRating,
}

impl BatchSummary {
    /// Summarize a set of per-spectrum assessments
    pub fn from_assessments(assessments: &[CoherenceAssessment]) -> Result<Self> {
        if assessments.is_empty() {
            return Err(Error::empty_input("batch summary"));
        }

        let means: Vec<f64> = assessments.iter().map(|a| a.stats.mean).collect();
        let stats = summarize(&means);

        let consistency = if stats.cv < 0.05 {
            ConsistencyRating::High
        } else if stats.cv > 0.15 {
            ConsistencyRating::Low
        } else {
            ConsistencyRating::Moderate
        };

        Ok(Self {
            n_spectra: assessments.len(),
            overall_mean: stats.mean,
            overall_std: stats.std_dev,
            overall_cv: stats.cv,
            consistency,
        })
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Summary:")?;
        writeln!(f, "  Spectra: {}", self.n_spectra)?;
        writeln!(
            f,
            "  Overall C-Index: {:.4} ± {:.4}",
            self.overall_mean, self.overall_std
        )?;
        writeln!(
            f,
            "  Cross-spectrum variation: {:.3} ({} consistency)",
            self.overall_cv, self.consistency
        )?;
        Ok(())
    }
}
