//! Sliding-window C-Index scanner
//!
//! Advances a fixed-size window across a flux array at a fixed step, filters
//! each window by data validity, and scores the surviving windows with
//! [`WindowMetrics`]. Degenerate inputs (shorter than one window, or entirely
//! non-finite) produce an empty series rather than an error.

use crate::error::Result;
use crate::types::{CoherenceSample, CoherenceSeries, ScanConfig};
use crate::window::WindowMetrics;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Hard floor on finite samples per window, independent of the configured
/// validity fraction
const MIN_WINDOW_SAMPLES: usize = 10;

/// Sliding-window scanner producing a [`CoherenceSeries`] per flux array
#[derive(Debug, Clone)]
pub struct CoherenceScanner {
    config: ScanConfig,
}

impl CoherenceScanner {
    /// Create a scanner with the given configuration.
    ///
    /// Fails with `Error::InvalidParameter` when the window or step is zero
    /// or the validity fraction is outside (0, 1].
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan one flux array.
    ///
    /// Offsets advance from 0 by `step` while a full window fits in the
    /// data. A window is scored only when enough of it is finite: at least
    /// `window * min_valid_fraction` entries, and never fewer than 10 after
    /// filtering. Each accepted window emits one sample at the real-valued
    /// window midpoint.
    ///
    /// The scan is deterministic and never fails; inputs shorter than one
    /// window, or with no finite stretch, yield an empty series.
    pub fn scan(&self, flux: &[f64]) -> CoherenceSeries {
        let ScanConfig {
            window,
            step,
            min_valid_fraction,
        } = self.config;

        let mut samples = Vec::new();
        let mut skipped = 0usize;

        let mut offset = 0;
        while offset + window <= flux.len() {
            let segment = &flux[offset..offset + window];

            let finite_count = segment.iter().filter(|v| v.is_finite()).count();
            if (finite_count as f64) < window as f64 * min_valid_fraction {
                skipped += 1;
                offset += step;
                continue;
            }

            let finite: Vec<f64> = segment.iter().copied().filter(|v| v.is_finite()).collect();
            if finite.len() < MIN_WINDOW_SAMPLES {
                skipped += 1;
                offset += step;
                continue;
            }

            let c_index = WindowMetrics::compute(&finite).c_index();
            samples.push(CoherenceSample::new(
                offset as f64 + window as f64 / 2.0,
                c_index,
            ));
            offset += step;
        }

        debug!(
            scored = samples.len(),
            skipped,
            input_len = flux.len(),
            window,
            step,
            "completed coherence scan"
        );

        CoherenceSeries::new(samples)
    }

    /// Scan several independent flux arrays
    #[cfg(not(feature = "parallel"))]
    pub fn scan_many(&self, spectra: &[Vec<f64>]) -> Vec<CoherenceSeries> {
        spectra.iter().map(|flux| self.scan(flux)).collect()
    }

    /// Scan several independent flux arrays in parallel
    #[cfg(feature = "parallel")]
    pub fn scan_many(&self, spectra: &[Vec<f64>]) -> Vec<CoherenceSeries> {
        spectra.par_iter().map(|flux| self.scan(flux)).collect()
    }
}

impl Default for CoherenceScanner {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }
}
