//! Trial Runner
//!
//! Times a sort on fresh copies of a reference array. Only the sort call is
//! inside the timed region; the copy happens before the timer starts.

use crate::measure::Timer;
use crate::sort::SortAlgorithm;
use sortbench_stats::mean;

/// Number of timed trials averaged into one duration sample
pub const TRIALS_PER_MEASUREMENT: usize = 10;

/// Mean seconds to sort `reference` over [`TRIALS_PER_MEASUREMENT`] trials.
///
/// `reference` is never mutated; every trial sorts its own copy.
pub fn measure<T: Ord + Clone>(algorithm: SortAlgorithm, reference: &[T]) -> f64 {
    measure_trials(algorithm, reference, TRIALS_PER_MEASUREMENT)
}

/// Mean seconds to sort `reference` over `trials` trials (`0.0` when `trials == 0`)
pub fn measure_trials<T: Ord + Clone>(
    algorithm: SortAlgorithm,
    reference: &[T],
    trials: usize,
) -> f64 {
    let mut run_times = Vec::with_capacity(trials);

    for _ in 0..trials {
        let mut buffer = reference.to_vec();

        let timer = Timer::start();
        algorithm.sort(std::hint::black_box(buffer.as_mut_slice()));
        let elapsed = timer.stop_secs();

        std::hint::black_box(&buffer);
        run_times.push(elapsed);
    }

    mean(&run_times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_not_mutated() {
        let reference = vec![9i64, 4, 7, 1, 8, 2, 2, 0];
        let snapshot = reference.clone();

        for _ in 0..3 {
            for alg in SortAlgorithm::ALL {
                let secs = measure(alg, &reference);
                assert!(secs >= 0.0);
            }
        }

        assert_eq!(reference, snapshot);
    }

    #[test]
    fn test_empty_reference_is_near_zero() {
        let reference: Vec<i64> = Vec::new();
        for alg in SortAlgorithm::ALL {
            let secs = measure(alg, &reference);
            assert!(secs >= 0.0);
            assert!(secs < 0.01, "empty sort took {secs}s");
        }
    }

    #[test]
    fn test_zero_trials() {
        assert_eq!(measure_trials(SortAlgorithm::Insertion, &[3i64, 1, 2], 0), 0.0);
    }

    #[test]
    fn test_larger_input_takes_longer() {
        // Reverse order is the worst case for both algorithms
        let small: Vec<i64> = (0..10).rev().collect();
        let large: Vec<i64> = (0..3_000).rev().collect();

        let small_secs = measure(SortAlgorithm::Selection, &small);
        let large_secs = measure(SortAlgorithm::Selection, &large);
        assert!(large_secs > small_secs);
    }
}
