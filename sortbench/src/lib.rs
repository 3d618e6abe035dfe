//! SortBench
//!
//! Compares insertion sort and selection sort across input sizes. For every
//! size, ten workers each time 100 random arrays (every array sorted ten
//! times per algorithm), and the pooled per-algorithm durations are reduced
//! to a mean and sample standard deviation.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     sortbench::run()
//! }
//! ```

mod config;
mod error;
mod executor;

pub use config::*;
pub use error::HarnessError;
pub use executor::{
    AlgorithmSummary, BatchReport, ComparisonReport, PooledSamples, compare_efficiency,
    compare_efficiency_with, compute_statistics, format_report, write_report,
};

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Run the default comparison and print the report to stdout.
///
/// This is the entry point of the `sortbench` binary.
pub fn run() -> anyhow::Result<()> {
    init_logging();

    let config = HarnessConfig::default();
    let mut rng = StdRng::from_entropy();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run_with_config(&config, &mut rng, &mut out)
}

/// Run every configured size in order, writing each report to `out` as it completes.
pub fn run_with_config<R, W>(
    config: &HarnessConfig,
    rng: &mut R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: RngCore + ?Sized,
    W: Write,
{
    config.validate()?;

    let started = Instant::now();
    for &array_size in &config.array_sizes {
        let size_started = Instant::now();

        let report = compare_efficiency(array_size, config, rng)
            .with_context(|| format!("Comparison failed for n = {array_size}"))?;
        write_report(out, &report).context("Failed to write report")?;
        out.flush().context("Failed to flush report")?;

        info!(
            array_size,
            elapsed_secs = size_started.elapsed().as_secs_f64(),
            "size complete"
        );
    }

    info!(
        sizes = config.array_sizes.len(),
        elapsed_secs = started.elapsed().as_secs_f64(),
        "comparison complete"
    );
    Ok(())
}

/// Install the stderr log subscriber; stdout carries only the report.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("sortbench=info")
        .with_writer(std::io::stderr)
        .init();
}
