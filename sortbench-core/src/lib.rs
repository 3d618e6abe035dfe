#![warn(missing_docs)]
//! SortBench Core - Measurement Runtime
//!
//! This crate provides everything a single worker needs:
//! - In-place insertion and selection sorts behind the [`SortAlgorithm`] selector
//! - Wall-clock [`Timer`] for one trial
//! - Trial runner averaging repeated timed sorts of a fresh copy
//! - Batch worker generating random inputs and measuring both algorithms

mod measure;
mod sort;
mod trial;
mod worker;

pub use measure::Timer;
pub use sort::{ParseAlgorithmError, SortAlgorithm, insertion_sort, selection_sort};
pub use trial::{TRIALS_PER_MEASUREMENT, measure, measure_trials};
pub use worker::{BatchDurations, VALUE_RANGE_FACTOR, random_array, run_batch};
