//! # Coherence Core
//!
//! This crate computes the C-Index, a windowed coherence metric for
//! one-dimensional spectroscopic flux arrays. A fixed-size window slides
//! across the flux at a fixed step; each window with enough finite data is
//! scored on smoothness, stability, and consistency, and the equal-weight
//! mean of the three becomes that window's C-Index in [0, 1].
//!
//! ## Key Features
//!
//! - **Pure numeric boundary**: plain `f64` slices in, plain samples out —
//!   no knowledge of file formats, instruments, or pixels beyond positions
//! - **Validity filtering**: NaN/infinite entries are tolerated and
//!   filtered per window, with a configurable validity fraction
//! - **Deterministic**: identical input and configuration always yield
//!   identical output
//! - **Batch friendly**: independent spectra scan in parallel under the
//!   `parallel` feature
//!
//! ## Example
//!
//! ```rust
//! use coherence_core::{CoherenceScanner, ScanConfig};
//!
//! let flux: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin() + 1.0).collect();
//! let scanner = CoherenceScanner::new(ScanConfig::default()).unwrap();
//! let series = scanner.scan(&flux);
//!
//! assert!(!series.is_empty());
//! assert!(series.c_indices().iter().all(|c| (0.0..=1.0).contains(c)));
//! ```

pub mod error;
pub mod scanner;
pub mod types;
pub mod window;

// Re-exports
pub use error::{Error, Result};
pub use scanner::CoherenceScanner;
pub use types::{CoherenceSample, CoherenceSeries, ScanConfig};
pub use window::WindowMetrics;
