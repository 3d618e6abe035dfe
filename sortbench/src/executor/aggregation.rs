//! Parallel Aggregation
//!
//! Fans a batch out to `W` workers on a dedicated Rayon pool and fans the
//! results back in over a bounded channel. The collector blocks until it has
//! read exactly `W` reports; arrival order does not matter because pooling
//! only concatenates.
//!
//! Beyond a plain fan-in, a worker panic is caught and reported as an error,
//! and an optional per-report timeout turns a hung worker into an error
//! instead of an indefinite wait. A pool is summarized only when it holds
//! exactly `W × B` samples per algorithm.

use super::statistics::{ComparisonReport, compute_statistics};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::ThreadPoolBuilder;
use sortbench_core::{BatchDurations, SortAlgorithm, run_batch};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info};

/// Durations reported by one worker
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub worker: usize,
    pub durations: BatchDurations,
}

/// What a worker sends back: its report, or the message of the panic that stopped it
type WorkerOutcome = Result<BatchReport, (usize, String)>;

/// Per-algorithm concatenation of every worker's durations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PooledSamples {
    insertion: Vec<f64>,
    selection: Vec<f64>,
}

impl PooledSamples {
    /// Empty pools with room for `capacity` samples each
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            insertion: Vec::with_capacity(capacity),
            selection: Vec::with_capacity(capacity),
        }
    }

    /// Append one batch
    pub fn extend(&mut self, durations: &BatchDurations) {
        self.insertion.extend_from_slice(&durations.insertion);
        self.selection.extend_from_slice(&durations.selection);
    }

    /// Pooled samples for `algorithm`
    pub fn for_algorithm(&self, algorithm: SortAlgorithm) -> &[f64] {
        match algorithm {
            SortAlgorithm::Insertion => &self.insertion,
            SortAlgorithm::Selection => &self.selection,
        }
    }

    /// Fail unless every algorithm holds exactly `expected` samples
    pub fn ensure_complete(&self, expected: usize) -> Result<(), HarnessError> {
        for algorithm in SortAlgorithm::ALL {
            let got = self.for_algorithm(algorithm).len();
            if got != expected {
                return Err(HarnessError::IncompletePool {
                    algorithm,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }
}

/// Compare both algorithms on arrays of `array_size` elements.
///
/// Each worker gets its own `StdRng` seeded from `rng`, so a fixed-seed
/// source makes the generated inputs reproducible.
pub fn compare_efficiency<R: RngCore + ?Sized>(
    array_size: usize,
    config: &HarnessConfig,
    rng: &mut R,
) -> Result<ComparisonReport, HarnessError> {
    compare_efficiency_with(array_size, config, rng, run_batch::<StdRng>)
}

/// [`compare_efficiency`] with a custom batch function.
///
/// `batch_fn(batch_size, array_size, rng)` runs on every worker thread.
pub fn compare_efficiency_with<R, F>(
    array_size: usize,
    config: &HarnessConfig,
    rng: &mut R,
    batch_fn: F,
) -> Result<ComparisonReport, HarnessError>
where
    R: RngCore + ?Sized,
    F: Fn(usize, usize, &mut StdRng) -> BatchDurations + Send + Sync + 'static,
{
    config.validate()?;

    let workers = config.workers;
    let batch_size = config.batches_per_worker;

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("sortbench-worker-{i}"))
        .build()?;

    let (tx, rx) = crossbeam_channel::bounded::<WorkerOutcome>(workers);
    let batch_fn = Arc::new(batch_fn);

    info!(array_size, workers, batch_size, "dispatching batch workers");

    for worker in 0..workers {
        let seed = rng.next_u64();
        let tx = tx.clone();
        let batch_fn = Arc::clone(&batch_fn);

        pool.spawn(move || {
            // Rayon aborts the process on an uncaught panic in a spawned task
            let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
                let mut worker_rng = StdRng::seed_from_u64(seed);
                batch_fn(batch_size, array_size, &mut worker_rng)
            }));

            let message = outcome
                .map(|durations| BatchReport { worker, durations })
                .map_err(|panic| (worker, panic_message(panic.as_ref())));

            // The collector may have given up already
            let _ = tx.send(message);
        });
    }
    drop(tx);

    let progress = worker_progress(workers, array_size);
    let pooled = match collect_reports(&rx, config, &progress) {
        Ok(pooled) => {
            progress.finish_and_clear();
            pooled
        }
        Err(e) => {
            progress.abandon_with_message(format!("n = {array_size} failed"));
            return Err(e);
        }
    };

    pooled.ensure_complete(config.samples_per_algorithm())?;

    let summaries = compute_statistics(&pooled);
    for summary in &summaries {
        debug!(
            array_size,
            algorithm = %summary.algorithm,
            mean = summary.stats.mean,
            std_dev = summary.stats.std_dev,
            min = summary.stats.min,
            max = summary.stats.max,
            cv_percent = summary.stats.coefficient_of_variation(),
            samples = summary.stats.sample_count,
            "pooled summary"
        );
    }

    Ok(ComparisonReport {
        array_size,
        summaries,
    })
}

/// Read exactly `config.workers` reports and pool them
fn collect_reports(
    rx: &Receiver<WorkerOutcome>,
    config: &HarnessConfig,
    progress: &ProgressBar,
) -> Result<PooledSamples, HarnessError> {
    let expected = config.workers;
    let mut pooled = PooledSamples::with_capacity(config.samples_per_algorithm());

    for received in 0..expected {
        let outcome = match config.worker_timeout {
            Some(timeout) => rx.recv_timeout(timeout).map_err(|e| match e {
                RecvTimeoutError::Timeout => HarnessError::WorkerTimeout {
                    received,
                    expected,
                    timeout,
                },
                RecvTimeoutError::Disconnected => {
                    HarnessError::ChannelClosed { received, expected }
                }
            })?,
            None => rx
                .recv()
                .map_err(|_| HarnessError::ChannelClosed { received, expected })?,
        };

        let report =
            outcome.map_err(|(worker, message)| HarnessError::WorkerPanicked { worker, message })?;

        if report.durations.len() != Some(config.batches_per_worker) {
            let durations = &report.durations;
            return Err(HarnessError::IncompleteBatch {
                worker: report.worker,
                expected: config.batches_per_worker,
                got: durations.insertion.len().min(durations.selection.len()),
            });
        }

        debug!(
            worker = report.worker,
            received = received + 1,
            expected,
            "worker reported"
        );

        pooled.extend(&report.durations);
        progress.inc(1);
    }

    Ok(pooled)
}

fn worker_progress(workers: usize, array_size: usize) -> ProgressBar {
    let pb = ProgressBar::new(workers as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(format!("n = {array_size}"));
    pb
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
