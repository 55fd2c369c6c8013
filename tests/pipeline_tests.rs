//! End-to-end smoke tests through the root re-exports

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spectro_coherence::{
    classify, summarize, AnomalyDetector, CoherenceAnalyzer, CoherenceScanner, QualityLabel,
    ScanConfig,
};

#[test]
fn test_pipeline_by_stages() {
    use rand::Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let flux: Vec<f64> = (0..1500)
        .map(|i| (i as f64 * 0.01).sin() + 2.0 + rng.gen_range(-0.01..0.01))
        .collect();

    let scanner = CoherenceScanner::new(ScanConfig::default()).unwrap();
    let series = scanner.scan(&flux);
    assert!(!series.is_empty());

    let stats = summarize(&series.c_indices());
    assert_eq!(stats.n_values, series.len());
    assert!(stats.mean > 0.7);
    assert_relative_eq!(stats.anomaly_threshold, stats.mean - 2.0 * stats.std_dev);

    let anomalies = AnomalyDetector::default().detect(&series);
    assert!(anomalies.len() <= series.len());

    let label = classify(stats.mean, stats.cv);
    assert_ne!(label, QualityLabel::Poor);
}

#[test]
fn test_analyzer_matches_stagewise_pipeline() {
    let flux: Vec<f64> = (0..1200).map(|i| (i as f64 * 0.02).cos() + 3.0).collect();

    let analyzer = CoherenceAnalyzer::new(ScanConfig::broad()).unwrap();
    let assessment = analyzer.assess(&flux).unwrap();

    let scanner = CoherenceScanner::new(ScanConfig::broad()).unwrap();
    let series = scanner.scan(&flux);
    let stats = summarize(&series.c_indices());

    assert_eq!(assessment.series, series);
    assert_eq!(assessment.stats, stats);
    assert_eq!(assessment.quality, classify(stats.mean, stats.cv));
}
