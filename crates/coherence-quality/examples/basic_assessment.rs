//! Basic coherence assessment example

use coherence_core::ScanConfig;
use coherence_quality::{median_snr, BatchSummary, CoherenceAnalyzer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Coherence Assessment Examples ===\n");

    let analyzer = CoherenceAnalyzer::new(ScanConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // Example 1: smooth continuum
    println!("1. Smooth continuum");
    let smooth: Vec<f64> = (0..2000).map(|i| (i as f64 * 0.005).sin() + 2.0).collect();
    let assessment = analyzer.assess(&smooth)?;
    print!("{assessment}");

    // Example 2: continuum with a noisy dropout region
    println!("\n2. Continuum with a localized dropout");
    let noise = Normal::new(0.0, 0.8)?;
    let mut degraded = smooth.clone();
    for v in degraded.iter_mut().skip(900).take(100) {
        *v += noise.sample(&mut rng);
    }
    let assessment = analyzer.assess(&degraded)?;
    print!("{assessment}");
    for anomaly in &assessment.anomalies {
        println!("    flagged: {anomaly}");
    }

    // Example 3: spectrum with a detector gap
    println!("\n3. Spectrum with a NaN gap");
    let mut gapped = smooth.clone();
    for v in gapped.iter_mut().skip(400).take(60) {
        *v = f64::NAN;
    }
    let assessment = analyzer.assess(&gapped)?;
    print!("{assessment}");

    // Example 4: batch comparison across targets
    println!("\n4. Batch comparison");
    let spectra = vec![smooth, degraded, gapped];
    let assessments: Vec<_> = analyzer
        .assess_many(&spectra)
        .into_iter()
        .filter_map(|r| r.ok())
        .collect();
    let batch = BatchSummary::from_assessments(&assessments)?;
    print!("{batch}");

    // Example 5: median signal-to-noise estimate
    println!("\n5. Median SNR");
    let flux: Vec<f64> = (0..500).map(|i| 100.0 + (i as f64 * 0.02).cos()).collect();
    let err: Vec<f64> = flux.iter().map(|f| f.sqrt()).collect();
    println!("  SNR (median): {:.1}", median_snr(&flux, &err)?);

    Ok(())
}
