//! Statistical helpers for applicant feature comparison.
//!
//! Means, sample standard deviations, per-feature summaries, and the
//! equal-width histogram plus bin-placement rule the dashboard uses to
//! highlight where a selected applicant falls within a distribution.

pub mod error;
pub mod histogram;
pub mod summary;

pub use error::StatsError;
pub use histogram::{Histogram, bin_index};
pub use summary::FeatureSummary;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator. Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator. Returns 0.0 if fewer
/// than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}
