//! Batch Worker
//!
//! One unit of parallel dispatch: generates `batch_size` random arrays and
//! measures both algorithms on each. A worker owns its random source and its
//! arrays, so any number of workers can run concurrently.

use crate::sort::SortAlgorithm;
use crate::trial::measure;
use rand::Rng;

/// Upper bound multiplier for generated values: each value is `< len * VALUE_RANGE_FACTOR`
pub const VALUE_RANGE_FACTOR: usize = 10;

/// Per-algorithm duration samples produced by one batch, indexed by repetition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchDurations {
    /// Mean insertion sort seconds per repetition
    pub insertion: Vec<f64>,
    /// Mean selection sort seconds per repetition
    pub selection: Vec<f64>,
}

impl BatchDurations {
    /// Empty lists with room for `capacity` repetitions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            insertion: Vec::with_capacity(capacity),
            selection: Vec::with_capacity(capacity),
        }
    }

    /// Samples recorded for `algorithm`
    pub fn for_algorithm(&self, algorithm: SortAlgorithm) -> &[f64] {
        match algorithm {
            SortAlgorithm::Insertion => &self.insertion,
            SortAlgorithm::Selection => &self.selection,
        }
    }

    fn push(&mut self, algorithm: SortAlgorithm, secs: f64) {
        match algorithm {
            SortAlgorithm::Insertion => self.insertion.push(secs),
            SortAlgorithm::Selection => self.selection.push(secs),
        }
    }

    /// Number of repetitions recorded, or `None` if the two lists disagree
    pub fn len(&self) -> Option<usize> {
        (self.insertion.len() == self.selection.len()).then_some(self.insertion.len())
    }

    /// Whether no repetitions were recorded
    pub fn is_empty(&self) -> bool {
        self.insertion.is_empty() && self.selection.is_empty()
    }
}

/// Random array of `len` values uniformly drawn from `[0, len * VALUE_RANGE_FACTOR)`
pub fn random_array<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i64> {
    let upper = (len * VALUE_RANGE_FACTOR) as i64;
    (0..len).map(|_| rng.gen_range(0..upper)).collect()
}

/// Run `batch_size` repetitions on arrays of `array_size` elements.
///
/// Both algorithms see the same array within a repetition; the trial runner
/// copies it before every timed sort.
pub fn run_batch<R: Rng + ?Sized>(
    batch_size: usize,
    array_size: usize,
    rng: &mut R,
) -> BatchDurations {
    let mut durations = BatchDurations::with_capacity(batch_size);

    for _ in 0..batch_size {
        let array = random_array(array_size, rng);
        for algorithm in SortAlgorithm::ALL {
            durations.push(algorithm, measure(algorithm, &array));
        }
    }

    durations
}
