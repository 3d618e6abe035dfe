#![warn(missing_docs)]
//! SortBench Statistical Engine
//!
//! Summary statistics over pooled duration samples:
//! - Arithmetic mean
//! - Sample standard deviation (n - 1 denominator)
//! - Extremes and coefficient of variation for diagnostics

mod summary;

pub use summary::{SummaryStatistics, compute_summary, mean, sample_std_dev};

/// Minimum sample count for a non-zero standard deviation
pub const MIN_SAMPLES_FOR_STD_DEV: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MIN_SAMPLES_FOR_STD_DEV, 2);
    }
}
