//! Quick sort with Lomuto partitioning (pivot = last element of the range)

use super::{SortAlgorithm, SortCounters};
use crate::trace::{Step, Trace};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort_counted<T>(&self, input: &[T]) -> (Trace<Vec<T>>, SortCounters)
    where
        T: Ord + Clone + Display,
    {
        let mut run = QuickRun {
            array: input.to_vec(),
            trace: Trace::new(),
            counters: SortCounters::default(),
        };

        run.record("Initial array state", Vec::new());

        if !run.array.is_empty() {
            let high = run.array.len() - 1;
            run.sort_range(0, high);
        }

        run.record("Array completely sorted", Vec::new());
        (run.trace, run.counters)
    }
}

/// Mutable state of one quick sort invocation
struct QuickRun<T> {
    array: Vec<T>,
    trace: Trace<Vec<T>>,
    counters: SortCounters,
}

impl<T: Ord + Clone + Display> QuickRun<T> {
    fn record(&mut self, description: impl Into<String>, highlights: Vec<usize>) {
        self.trace
            .push(Step::new(self.array.clone(), description).with_highlights(highlights));
    }

    fn sort_range(&mut self, low: usize, high: usize) {
        if low >= high {
            return;
        }

        self.record(
            format!("Sorting subarray from index {} to {}", low, high),
            (low..=high).collect(),
        );

        let pivot_index = self.partition(low, high);

        self.record(
            format!(
                "Pivot {} is in its final position (index {})",
                self.array[pivot_index], pivot_index
            ),
            vec![pivot_index],
        );

        if pivot_index > low {
            self.sort_range(low, pivot_index - 1);
        }
        self.sort_range(pivot_index + 1, high);
    }

    /// Returns the final index of the pivot
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.array[high].clone();

        self.record(
            format!("Selecting pivot: {} (index {})", pivot, high),
            vec![high],
        );

        // Next slot for an element <= pivot
        let mut store = low;

        for j in low..high {
            self.record(
                format!("Comparing {} with pivot {}", self.array[j], pivot),
                vec![j, high],
            );
            self.counters.comparisons += 1;

            if self.array[j] <= pivot {
                if store != j {
                    self.array.swap(store, j);
                    self.counters.swaps += 1;
                    self.record(
                        format!(
                            "Swapping {} and {} (positions {} and {})",
                            self.array[store], self.array[j], store, j
                        ),
                        vec![store, j],
                    );
                }
                store += 1;
            }
        }

        self.array.swap(store, high);
        if store != high {
            self.counters.swaps += 1;
        }
        self.record(
            format!(
                "Placing pivot {} at its correct position (index {})",
                pivot, store
            ),
            vec![store, high],
        );

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions<T>(trace: &Trace<T>) -> Vec<&str> {
        trace.iter().map(|s| s.description.as_str()).collect()
    }

    #[test]
    fn partition_of_three_elements() {
        let (trace, counters) = QuickSort.sort_counted(&[3, 1, 2]);
        assert_eq!(
            descriptions(&trace),
            vec![
                "Initial array state",
                "Sorting subarray from index 0 to 2",
                "Selecting pivot: 2 (index 2)",
                "Comparing 3 with pivot 2",
                "Comparing 1 with pivot 2",
                "Swapping 1 and 3 (positions 0 and 1)",
                "Placing pivot 2 at its correct position (index 1)",
                "Pivot 2 is in its final position (index 1)",
                "Array completely sorted",
            ]
        );
        assert_eq!(trace.last().unwrap().data, vec![1, 2, 3]);
        // one partition swap plus the pivot placement
        assert_eq!(counters, SortCounters { comparisons: 2, swaps: 2 });
    }

    #[test]
    fn ties_with_pivot_go_left() {
        let (trace, _) = QuickSort.sort_counted(&[2, 2, 1, 2]);
        assert_eq!(trace.last().unwrap().data, vec![1, 2, 2, 2]);
        let placement = trace
            .iter()
            .find(|s| s.description.starts_with("Placing pivot"))
            .unwrap();
        // every element is <= 2, so the pivot stays last
        assert_eq!(placement.description, "Placing pivot 2 at its correct position (index 3)");
    }

    #[test]
    fn pivot_at_range_start_does_not_underflow() {
        let trace = QuickSort.sort(&[3, 2, 1]);
        assert!(trace
            .iter()
            .any(|s| s.description == "Pivot 1 is in its final position (index 0)"));
        assert_eq!(trace.last().unwrap().data, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_has_start_and_end_only() {
        assert_eq!(
            descriptions(&QuickSort.sort::<u8>(&[])),
            vec!["Initial array state", "Array completely sorted"]
        );
    }
}
