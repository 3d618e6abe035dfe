//! Statistics Computation
//!
//! Summarizes each algorithm's pooled samples. Pools are independent, so
//! they are summarized in parallel with Rayon.

use super::aggregation::PooledSamples;
use rayon::prelude::*;
use sortbench_core::SortAlgorithm;
use sortbench_stats::{SummaryStatistics, compute_summary};

/// Summary for one algorithm at one input size
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: SortAlgorithm,
    pub stats: SummaryStatistics,
}

/// Result of comparing every algorithm at one input size
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub array_size: usize,
    /// In [`SortAlgorithm::ALL`] order
    pub summaries: Vec<AlgorithmSummary>,
}

impl ComparisonReport {
    /// Statistics for `algorithm`, if it was measured
    pub fn summary(&self, algorithm: SortAlgorithm) -> Option<&SummaryStatistics> {
        self.summaries
            .iter()
            .find(|s| s.algorithm == algorithm)
            .map(|s| &s.stats)
    }
}

/// Compute per-algorithm statistics over complete pools
pub fn compute_statistics(pooled: &PooledSamples) -> Vec<AlgorithmSummary> {
    SortAlgorithm::ALL
        .par_iter()
        .map(|&algorithm| AlgorithmSummary {
            algorithm,
            stats: compute_summary(pooled.for_algorithm(algorithm)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::BatchDurations;

    #[test]
    fn test_statistics_in_report_order() {
        let mut pooled = PooledSamples::default();
        pooled.extend(&BatchDurations {
            insertion: vec![1.0, 1.0, 1.0],
            selection: vec![2.0, 4.0, 6.0],
        });

        let summaries = compute_statistics(&pooled);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].algorithm, SortAlgorithm::Insertion);
        assert_eq!(summaries[1].algorithm, SortAlgorithm::Selection);

        assert!((summaries[0].stats.mean - 1.0).abs() < 1e-12);
        assert!(summaries[0].stats.std_dev.abs() < 1e-12);
        assert!((summaries[1].stats.mean - 4.0).abs() < 1e-12);
        assert!((summaries[1].stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_lookup() {
        let report = ComparisonReport {
            array_size: 10,
            summaries: vec![AlgorithmSummary {
                algorithm: SortAlgorithm::Selection,
                stats: SummaryStatistics::default(),
            }],
        };

        assert!(report.summary(SortAlgorithm::Selection).is_some());
        assert!(report.summary(SortAlgorithm::Insertion).is_none());
    }
}
