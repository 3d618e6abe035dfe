//! Harness configuration
//!
//! Fixed in code: the binary takes no flags, files or environment variables.
//! Tests build smaller configurations through the `with_*` methods.

use crate::error::HarnessError;
use std::time::Duration;

/// Input sizes compared by the default run, in report order
pub const DEFAULT_ARRAY_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Concurrent batch workers per input size
pub const DEFAULT_WORKERS: usize = 10;

/// Repetitions performed by each worker
pub const DEFAULT_BATCHES_PER_WORKER: usize = 100;

/// Benchmark harness configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Array sizes, run sequentially in this order
    pub array_sizes: Vec<usize>,
    /// Number of workers dispatched in parallel for each size
    pub workers: usize,
    /// Repetitions per worker
    pub batches_per_worker: usize,
    /// Longest wait for the next worker report; `None` waits indefinitely
    pub worker_timeout: Option<Duration>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            array_sizes: DEFAULT_ARRAY_SIZES.to_vec(),
            workers: DEFAULT_WORKERS,
            batches_per_worker: DEFAULT_BATCHES_PER_WORKER,
            worker_timeout: None,
        }
    }
}

impl HarnessConfig {
    /// Replace the array sizes
    pub fn with_array_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.array_sizes = sizes.into();
        self
    }

    /// Replace the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Replace the per-worker repetition count
    pub fn with_batches_per_worker(mut self, batches: usize) -> Self {
        self.batches_per_worker = batches;
        self
    }

    /// Bound the wait for each worker report
    pub fn with_worker_timeout(mut self, timeout: Duration) -> Self {
        self.worker_timeout = Some(timeout);
        self
    }

    /// Pooled samples per algorithm for one size (`workers * batches_per_worker`)
    pub fn samples_per_algorithm(&self) -> usize {
        self.workers * self.batches_per_worker
    }

    /// Reject configurations that could never produce a complete pool
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.workers == 0 {
            return Err(HarnessError::InvalidConfig(
                "workers must be > 0".to_string(),
            ));
        }
        if self.batches_per_worker == 0 {
            return Err(HarnessError::InvalidConfig(
                "batches_per_worker must be > 0".to_string(),
            ));
        }
        if self.array_sizes.is_empty() {
            return Err(HarnessError::InvalidConfig(
                "array_sizes must not be empty".to_string(),
            ));
        }
        if self.worker_timeout == Some(Duration::ZERO) {
            return Err(HarnessError::InvalidConfig(
                "worker_timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.array_sizes, vec![100, 1_000, 10_000, 100_000]);
        assert_eq!(config.workers, 10);
        assert_eq!(config.batches_per_worker, 100);
        assert_eq!(config.worker_timeout, None);
        assert_eq!(config.samples_per_algorithm(), 1_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = HarnessConfig::default()
            .with_array_sizes([5, 10])
            .with_workers(2)
            .with_batches_per_worker(3)
            .with_worker_timeout(Duration::from_secs(1));

        assert_eq!(config.array_sizes, vec![5, 10]);
        assert_eq!(config.samples_per_algorithm(), 6);
        assert_eq!(config.worker_timeout, Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = HarnessConfig::default().with_workers(0);
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_batches() {
        let config = HarnessConfig::default().with_batches_per_worker(0);
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_sizes() {
        let config = HarnessConfig::default().with_array_sizes(Vec::<usize>::new());
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = HarnessConfig::default().with_worker_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
