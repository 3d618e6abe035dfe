//! In-place comparison sorts under test.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort `values` ascending by shifting each element left past larger predecessors.
///
/// Stable. Quadratic in the worst case, linear on already-sorted input.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sort `values` ascending by swapping the minimum of the unsorted suffix into place.
///
/// Quadratic on every input. Not stable.
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    let len = values.len();
    for i in 0..len {
        let mut min_index = i;
        for j in (i + 1)..len {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            values.swap(i, min_index);
        }
    }
}

/// Error returned when parsing an unknown algorithm name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAlgorithmError {
    /// Name matched neither `insertion` nor `selection`
    #[error("Unknown sort algorithm: {0:?} (expected \"insertion\" or \"selection\")")]
    UnknownAlgorithm(String),
}

/// Selector for the sorting algorithm being measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// [`insertion_sort`]
    Insertion,
    /// [`selection_sort`]
    Selection,
}

impl SortAlgorithm {
    /// Every algorithm, in report order
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Insertion, SortAlgorithm::Selection];

    /// Human-readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
        }
    }

    /// Sort `values` in place with this algorithm
    #[inline]
    pub fn sort<T: Ord>(self, values: &mut [T]) {
        match self {
            SortAlgorithm::Insertion => insertion_sort(values),
            SortAlgorithm::Selection => selection_sort(values),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(SortAlgorithm::Insertion),
            "selection" => Ok(SortAlgorithm::Selection),
            _ => Err(ParseAlgorithmError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_sorted<T: Ord>(values: &[T]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_empty_and_single() {
        for alg in SortAlgorithm::ALL {
            let mut empty: Vec<i64> = Vec::new();
            alg.sort(&mut empty);
            assert!(empty.is_empty());

            let mut single = vec![42i64];
            alg.sort(&mut single);
            assert_eq!(single, vec![42]);
        }
    }

    #[test]
    fn test_known_input() {
        let input = vec![5i64, 3, 9, 1, 3, 0, -2, 7];
        let expected = vec![-2i64, 0, 1, 3, 3, 5, 7, 9];

        let mut a = input.clone();
        insertion_sort(&mut a);
        assert_eq!(a, expected);

        let mut b = input;
        selection_sort(&mut b);
        assert_eq!(b, expected);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        // Order on the key only; payload records original position
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Keyed(u8, usize);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut values = vec![Keyed(2, 0), Keyed(1, 1), Keyed(2, 2), Keyed(1, 3)];
        insertion_sort(&mut values);
        let positions: Vec<usize> = values.iter().map(|k| k.1).collect();
        assert_eq!(positions, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("insertion".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Insertion));
        assert_eq!("Selection".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Selection));
        assert_eq!(
            "insertoin".parse::<SortAlgorithm>(),
            Err(ParseAlgorithmError::UnknownAlgorithm("insertoin".to_string()))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(SortAlgorithm::Insertion.to_string(), "Insertion Sort");
        assert_eq!(SortAlgorithm::Selection.to_string(), "Selection Sort");
        assert_eq!(SortAlgorithm::ALL[0], SortAlgorithm::Insertion);
    }

    proptest! {
        #[test]
        fn sorted_permutation(values in prop::collection::vec(any::<i64>(), 0..200)) {
            let mut expected = values.clone();
            expected.sort();

            for alg in SortAlgorithm::ALL {
                let mut actual = values.clone();
                alg.sort(&mut actual);
                prop_assert!(is_sorted(&actual));
                prop_assert_eq!(&actual, &expected);
            }
        }

        #[test]
        fn sorting_is_idempotent(values in prop::collection::vec(0i64..50, 0..100)) {
            for alg in SortAlgorithm::ALL {
                let mut once = values.clone();
                alg.sort(&mut once);
                let mut twice = once.clone();
                alg.sort(&mut twice);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
