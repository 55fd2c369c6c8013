//! # spectro-coherence
//!
//! Windowed coherence (C-Index) analysis for one-dimensional spectroscopic
//! flux arrays: a sliding-window coherence metric, summary statistics,
//! statistical anomaly flagging, and categorical quality scoring.
//!
//! This crate re-exports the workspace members:
//!
//! - [`coherence_core`] — the C-Index window metric and sliding-window
//!   scanner over plain `f64` flux slices
//! - [`coherence_quality`] — summary statistics, anomaly detection,
//!   quality labels, and the end-to-end assessment pipeline
//!
//! ## Quick start
//!
//! ```rust
//! use spectro_coherence::{CoherenceAnalyzer, ScanConfig};
//!
//! let flux: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin() + 2.0).collect();
//! let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();
//! let assessment = analyzer.assess(&flux).unwrap();
//!
//! println!("{assessment}");
//! ```

pub use coherence_core;
pub use coherence_quality;

// Flat re-exports for the common path
pub use coherence_core::{
    CoherenceSample, CoherenceScanner, CoherenceSeries, Error, Result, ScanConfig, WindowMetrics,
};
pub use coherence_quality::{
    classify, median_snr, summarize, AnomalyDetector, BatchSummary, CoherenceAnalyzer,
    CoherenceAssessment, CoherenceStats, ConsistencyRating, QualityLabel,
};
