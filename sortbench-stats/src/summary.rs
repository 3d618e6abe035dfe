//! Summary Statistics
//!
//! Mean and spread of a pooled sample list. The standard deviation uses the
//! unbiased (n - 1) estimator, so a single sample has zero spread rather than
//! an undefined one.

use crate::MIN_SAMPLES_FOR_STD_DEV;

/// Summary of one pooled sample list
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Number of samples summarized
    pub sample_count: usize,
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            sample_count: 0,
        }
    }
}

/// Arithmetic mean, `0.0` for an empty slice
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

/// Sample standard deviation around a precomputed mean
pub fn sample_std_dev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < MIN_SAMPLES_FOR_STD_DEV {
        return 0.0;
    }
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}

/// Compute summary statistics for a pooled sample list
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let mean = mean(samples);
    let std_dev = sample_std_dev(samples, mean);

    let min = samples
        .iter()
        .cloned()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);
    let max = samples
        .iter()
        .cloned()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);

    SummaryStatistics {
        mean,
        std_dev,
        min,
        max,
        sample_count: samples.len(),
    }
}

impl SummaryStatistics {
    /// Coefficient of variation (relative stddev, percent)
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }
}
