//! Types used for sliding-window coherence analysis

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scored analysis window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoherenceSample {
    /// Center position of the window, in pixel coordinates. This is the
    /// real-valued midpoint `offset + window/2` and is half-integer for
    /// odd window sizes.
    pub position: f64,
    /// C-Index value for this window (0.0 to 1.0)
    pub c_index: f64,
}

impl CoherenceSample {
    /// Create a new coherence sample
    pub fn new(position: f64, c_index: f64) -> Self {
        Self { position, c_index }
    }
}

impl fmt::Display for CoherenceSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoherenceSample {{ position: {:.1}, c_index: {:.4} }}",
            self.position, self.c_index
        )
    }
}

/// Result of one sliding-window scan over a flux array
///
/// Samples are ordered by strictly increasing position. Windows rejected by
/// the validity checks leave gaps rather than placeholder values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoherenceSeries {
    samples: Vec<CoherenceSample>,
}

impl CoherenceSeries {
    /// Create a new series from scored samples
    pub fn new(samples: Vec<CoherenceSample>) -> Self {
        Self { samples }
    }

    /// Get the scored samples
    pub fn samples(&self) -> &[CoherenceSample] {
        &self.samples
    }

    /// Get the number of scored windows
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check whether any window was scored
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the scored samples
    pub fn iter(&self) -> std::slice::Iter<'_, CoherenceSample> {
        self.samples.iter()
    }

    /// Get the window center positions
    pub fn positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Get the C-Index values
    pub fn c_indices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.c_index).collect()
    }
}

impl<'a> IntoIterator for &'a CoherenceSeries {
    type Item = &'a CoherenceSample;
    type IntoIter = std::slice::Iter<'a, CoherenceSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl fmt::Display for CoherenceSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coherence Series:")?;
        writeln!(f, "  Scored windows: {}", self.len())?;
        if let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) {
            writeln!(
                f,
                "  Position range: [{:.1}, {:.1}]",
                first.position, last.position
            )?;
        }
        Ok(())
    }
}

/// Parameters for the sliding-window scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Window size in pixels
    pub window: usize,
    /// Step size for window advancement
    pub step: usize,
    /// Minimum fraction of finite data points required per window
    pub min_valid_fraction: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window: 100,
            step: 50,
            min_valid_fraction: 0.8,
        }
    }
}

impl ScanConfig {
    /// Create a config with explicit window and step, default validity fraction
    pub fn new(window: usize, step: usize) -> Self {
        Self {
            window,
            step,
            ..Self::default()
        }
    }

    /// Short windows for localized structure
    pub fn fine() -> Self {
        Self {
            window: 50,
            step: 25,
            min_valid_fraction: 0.8,
        }
    }

    /// Long windows for broad-band coherence, suited to high-resolution
    /// echelle spectra
    pub fn broad() -> Self {
        Self {
            window: 200,
            step: 100,
            min_valid_fraction: 0.8,
        }
    }

    /// Check that the parameters describe a usable scan
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::InvalidParameter(
                "window must be positive".to_string(),
            ));
        }
        if self.step == 0 {
            return Err(Error::InvalidParameter("step must be positive".to_string()));
        }
        if !(self.min_valid_fraction > 0.0 && self.min_valid_fraction <= 1.0) {
            return Err(Error::invalid_fraction(self.min_valid_fraction));
        }
        Ok(())
    }
}
