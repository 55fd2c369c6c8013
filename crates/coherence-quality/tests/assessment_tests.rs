//! Integration tests for the full assessment pipeline

use coherence_core::{Error, ScanConfig};
use coherence_quality::{
    classify, summarize, CoherenceAnalyzer, ConsistencyRating, QualityLabel,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn noisy_flux(n: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(mean, std).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

#[test]
fn test_constant_spectrum_is_good() {
    let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();
    let assessment = analyzer.assess(&vec![1.0; 1000]).unwrap();

    // Every window scores an identical (1 + 1 + 0.5) / 3, so the mean sits
    // at 0.8333 with essentially zero scatter: Good, one notch short of
    // the 0.85 Excellent cut
    assert!(assessment.stats.cv < 1e-12);
    assert!(assessment.stats.mean > 0.8);
    assert_eq!(assessment.quality, QualityLabel::Good);
    assert!(assessment.anomalies.is_empty());
}

#[test]
fn test_heavy_noise_degrades_quality() {
    let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();
    let clean = analyzer.assess(&vec![1.0; 1000]).unwrap();
    let noisy = analyzer.assess(&noisy_flux(1000, 1.0, 0.5, 42)).unwrap();

    assert!(noisy.stats.mean < clean.stats.mean);
    assert!(noisy.stats.mean < 0.9);
}

#[test]
fn test_gapped_spectrum_still_assessable() {
    let mut flux: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin() + 2.0).collect();
    for v in flux.iter_mut().skip(300).take(40) {
        *v = f64::NAN;
    }

    let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();
    let assessment = analyzer.assess(&flux).unwrap();

    assert!(!assessment.series.is_empty());
    assert!(assessment.stats.mean.is_finite());
}

#[test]
fn test_empty_flux_is_insufficient_data() {
    let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();

    match analyzer.assess(&[]).unwrap_err() {
        Error::InsufficientData { expected, actual } => {
            assert_eq!(expected, 100);
            assert_eq!(actual, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_nan_statistics_classify_as_poor() {
    // The infallible path propagates NaN instead of raising; quality
    // classification of such a record must still be deterministic
    let stats = summarize(&[]);
    assert_eq!(classify(stats.mean, stats.cv), QualityLabel::Poor);
}

#[test]
fn test_custom_sigma_flags_more_windows() {
    let mut flux: Vec<f64> = (0..2000).map(|i| (i as f64 * 0.005).sin() + 2.0).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let noise = Normal::new(0.0, 1.0).unwrap();
    for v in flux.iter_mut().skip(900).take(100) {
        *v += noise.sample(&mut rng);
    }

    let strict = CoherenceAnalyzer::new(ScanConfig::default())
        .unwrap()
        .with_threshold_sigma(3.0);
    let loose = CoherenceAnalyzer::new(ScanConfig::default())
        .unwrap()
        .with_threshold_sigma(1.0);

    let strict_count = strict.assess(&flux).unwrap().anomalies.len();
    let loose_count = loose.assess(&flux).unwrap().anomalies.len();

    assert!(loose_count >= strict_count);
    assert!(loose_count > 0, "a one-sigma cut should flag the dropout");
}

#[test]
fn test_batch_mixed_with_failures() {
    let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();
    let spectra = vec![vec![1.0; 1000], vec![f64::NAN; 1000], vec![1.0; 50]];

    let results = analyzer.assess_many(&spectra);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_err());
}

#[test]
fn test_batch_consistency_rating_degrades_with_spread() {
    let analyzer = CoherenceAnalyzer::new(ScanConfig::default()).unwrap();

    // Identical targets agree perfectly
    let uniform: Vec<_> = analyzer
        .assess_many(&vec![vec![1.0; 1000]; 4])
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    let batch = coherence_quality::BatchSummary::from_assessments(&uniform).unwrap();
    assert_eq!(batch.consistency, ConsistencyRating::High);
    assert!(batch.overall_cv < 1e-12);

    // A wildly noisy target pulls the batch apart
    let mixed_spectra = vec![
        vec![1.0; 1000],
        vec![1.0; 1000],
        noisy_flux(1000, 1.0, 0.8, 3),
    ];
    let mixed: Vec<_> = analyzer
        .assess_many(&mixed_spectra)
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    let batch = coherence_quality::BatchSummary::from_assessments(&mixed).unwrap();
    assert!(batch.overall_cv > 0.0);
    assert!(batch.overall_mean < 1.0);
    assert_eq!(batch.consistency, ConsistencyRating::Low);
}
