//! # Coherence Quality
//!
//! Turns a scanned C-Index series into judgments: descriptive statistics,
//! statistically flagged anomaly windows, a categorical quality label, and
//! an end-to-end assessment pipeline for one spectrum or a batch of them.
//!
//! ## Key Features
//!
//! - **Summary statistics**: mean, population std, range, coefficient of
//!   variation, and a two-sigma anomaly threshold per series
//! - **Anomaly detection**: flags windows falling below a configurable
//!   sigma threshold recomputed from the series itself
//! - **Quality scoring**: ordered threshold rules mapping (mean, cv) to
//!   Excellent / Good / Fair / Poor
//! - **Assessment pipeline**: scan + summarize + classify + flag in one
//!   call, with an explicit insufficient-data error instead of NaN output
//!
//! ## Example
//!
//! ```rust
//! use coherence_core::ScanConfig;
//! use coherence_quality::{CoherenceAnalyzer, QualityLabel};
//!
//! let flux: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin() + 2.0).collect();
//! let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();
//! let assessment = analyzer.assess(&flux).unwrap();
//!
//! assert_ne!(assessment.quality, QualityLabel::Poor);
//! ```

pub mod anomaly;
pub mod assessment;
pub mod quality;
pub mod snr;
pub mod summary;

// Re-exports
pub use anomaly::{AnomalyDetector, DEFAULT_THRESHOLD_SIGMA};
pub use assessment::{BatchSummary, CoherenceAnalyzer, CoherenceAssessment, ConsistencyRating};
pub use quality::{classify, QualityLabel};
pub use snr::median_snr;
pub use summary::{summarize, CoherenceStats};
