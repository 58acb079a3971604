//! Bubble sort: adjacent compare-and-swap passes

use super::{SortAlgorithm, SortCounters};
use crate::trace::{Step, Trace};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
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
            for j in 0..n - i - 1 {
                trace.push(
                    Step::new(
                        array.clone(),
                        format!("Comparing elements at positions {} and {}", j, j + 1),
                    )
                    .with_highlights([j, j + 1]),
                );
                counters.comparisons += 1;

                if array[j] > array[j + 1] {
                    array.swap(j, j + 1);
                    counters.swaps += 1;
                    trace.push(
                        Step::new(
                            array.clone(),
                            format!("Swapping elements at positions {} and {}", j, j + 1),
                        )
                        .with_highlights([j, j + 1]),
                    );
                }
            }

            let fixed = n - i - 1;
            trace.push(
                Step::new(
                    array.clone(),
                    format!("Element {} is in its final position", array[fixed]),
                )
                .with_highlights([fixed]),
            );
        }

        trace.push(Step::new(array, "Array sorted"));
        (trace, counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_elements_out_of_order() {
        let (trace, counters) = BubbleSort.sort_counted(&[2, 1]);
        let descriptions: Vec<&str> = trace.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Initial array state",
                "Comparing elements at positions 0 and 1",
                "Swapping elements at positions 0 and 1",
                "Element 2 is in its final position",
                "Array sorted",
            ]
        );
        assert_eq!(counters, SortCounters { comparisons: 1, swaps: 1 });
    }

    #[test]
    fn equal_neighbours_are_not_swapped() {
        let (_, counters) = BubbleSort.sort_counted(&[3, 3, 3]);
        assert_eq!(counters.swaps, 0);
        assert_eq!(counters.comparisons, 3);
    }

    #[test]
    fn empty_and_single_inputs_still_have_start_and_end() {
        assert_eq!(BubbleSort.sort::<i32>(&[]).len(), 2);
        let single = BubbleSort.sort(&[7]);
        assert_eq!(single.len(), 2);
        assert_eq!(single.last().unwrap().data, vec![7]);
    }

    #[test]
    fn input_is_not_modified() {
        let input = vec![3, 2, 1];
        let trace = BubbleSort.sort(&input);
        assert_eq!(input, vec![3, 2, 1]);
        assert_eq!(trace.last().unwrap().data, vec![1, 2, 3]);
    }
}
