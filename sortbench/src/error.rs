//! Harness errors

use sortbench_core::SortAlgorithm;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while running a comparison
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Worker {worker} panicked: {message}")]
    WorkerPanicked { worker: usize, message: String },

    #[error("Timeout after {timeout:?} waiting for worker ({received}/{expected} reported)")]
    WorkerTimeout {
        received: usize,
        expected: usize,
        timeout: Duration,
    },

    #[error("Result channel closed early ({received}/{expected} workers reported)")]
    ChannelClosed { received: usize, expected: usize },

    #[error("Worker {worker} reported {got} repetitions, expected {expected}")]
    IncompleteBatch {
        worker: usize,
        expected: usize,
        got: usize,
    },

    #[error("{algorithm} pooled {got} samples, expected {expected}")]
    IncompletePool {
        algorithm: SortAlgorithm,
        expected: usize,
        got: usize,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
