//! Selection sort: repeatedly move the suffix minimum into place

use super::{SortAlgorithm, SortCounters};
use crate::trace::{Step, Trace};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn sort_counted<T>(&self, input: &[T]) -> (Trace<Vec<T>>, SortCounters)
    where
        T: Ord + Clone + Display,
    {
        let mut array = input.to_vec();
        let mut trace = Trace::new();
        let mut counters = SortCounters::default();

        trace.push(Step::new(array.clone(), "Initial array state"));

        let n = array.len();
        for i in 0..n.saturating_sub(1) {
            let mut min_index = i;

            trace.push(
                Step::new(
                    array.clone(),
                    format!(
                        "Searching for the minimum of the unsorted part (from index {})",
                        i
                    ),
                )
                .with_highlights([i]),
            );

            for j in i + 1..n {
                trace.push(
                    Step::new(
                        array.clone(),
                        format!("Comparing elements at positions {} and {}", min_index, j),
                    )
                    .with_highlights([min_index, j]),
                );
                counters.comparisons += 1;

                if array[j] < array[min_index] {
                    min_index = j;
                    trace.push(
                        Step::new(
                            array.clone(),
                            format!("New minimum found at position {}", min_index),
                        )
                        .with_highlights([min_index]),
                    );
                }
            }

            if min_index != i {
                array.swap(i, min_index);
                counters.swaps += 1;
                trace.push(
                    Step::new(
                        array.clone(),
                        format!("Swapping elements at positions {} and {}", i, min_index),
                    )
                    .with_highlights([i, min_index]),
                );
            }

            trace.push(
                Step::new(
                    array.clone(),
                    format!("Element {} is in its final position", array[i]),
                )
                .with_highlights([i]),
            );
        }

        trace.push(Step::new(array, "Array sorted").with_highlights(0..n));
        (trace, counters)
    }
}
