//! Comparison Executor
//!
//! Runs one input size end to end.
//!
//! ## Pipeline Overview
//!
//! ```text
//!        array size
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │     aggregation     │  W batch workers on a rayon pool, reports over a channel
//! └──────────┬──────────┘
//!            │ PooledSamples (W × B per algorithm)
//!            ▼
//! ┌─────────────────────┐
//! │     statistics      │  Mean and sample std dev per algorithm
//! └──────────┬──────────┘
//!            │ ComparisonReport
//!            ▼
//! ┌─────────────────────┐
//! │     formatting      │  One line per algorithm
//! └─────────────────────┘
//! ```

mod aggregation;
mod formatting;
mod statistics;

pub use aggregation::{BatchReport, PooledSamples, compare_efficiency, compare_efficiency_with};
pub use formatting::{format_report, write_report};
pub use statistics::{AlgorithmSummary, ComparisonReport, compute_statistics};
