//! Side-by-side comparison of two sorting engines
//!
//! Both engines run over their own copy of the same input. Comparison and swap
//! counts come from the engines' [`SortCounters`], not from step descriptions.
//!
//! [`SortCounters`]: crate::sorting::SortCounters

use crate::errors::Result;
use crate::sorting::SortKind;
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetrics {
    pub comparisons: usize,
    pub swaps: usize,
    /// Wall-clock duration of the run, fractional milliseconds
    pub execution_time_ms: f64,
    pub total_steps: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult<T> {
    pub name: String,
    pub steps: Trace<Vec<T>>,
    pub metrics: AlgorithmMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmComparison<T> {
    pub algorithm1: AlgorithmResult<T>,
    pub algorithm2: AlgorithmResult<T>,
}

/// Run one engine and measure it
pub fn run_with_metrics<T>(input: &[T], kind: SortKind) -> AlgorithmResult<T>
where
    T: Ord + Clone + Display,
{
    let started = Instant::now();
    let (steps, counters) = kind.sort_counted(input);
    let elapsed = started.elapsed();

    tracing::debug!(
        algorithm = kind.name(),
        steps = steps.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "sort run measured"
    );

    AlgorithmResult {
        name: kind.name().to_string(),
        metrics: AlgorithmMetrics {
            comparisons: counters.comparisons,
            swaps: counters.swaps,
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
            total_steps: steps.len(),
        },
        steps,
    }
}

/// Compare two engines named `bubble`, `selection` or `quick` (any case)
///
/// An unknown name is a hard [`Error::UnknownAlgorithm`]; nothing runs.
///
/// [`Error::UnknownAlgorithm`]: crate::errors::Error::UnknownAlgorithm
pub fn compare_algorithms<T>(
    input: &[T],
    first: &str,
    second: &str,
) -> Result<AlgorithmComparison<T>>
where
    T: Ord + Clone + Display,
{
    let first_kind: SortKind = first.parse()?;
    let second_kind: SortKind = second.parse()?;
    tracing::debug!(
        first = first_kind.name(),
        second = second_kind.name(),
        len = input.len(),
        "comparing sorting algorithms"
    );

    Ok(AlgorithmComparison {
        algorithm1: run_with_metrics(input, first_kind),
        algorithm2: run_with_metrics(input, second_kind),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn bubble_versus_quick_on_reversed_input() {
        let comparison = compare_algorithms(&[4, 3, 2, 1], "bubble", "Quick").unwrap();
        assert_eq!(comparison.algorithm1.name, "Bubble Sort");
        assert_eq!(comparison.algorithm2.name, "Quick Sort");
        // bubble: n(n-1)/2 comparisons, one swap per inversion
        assert_eq!(comparison.algorithm1.metrics.comparisons, 6);
        assert_eq!(comparison.algorithm1.metrics.swaps, 6);
        assert_eq!(
            comparison.algorithm1.metrics.total_steps,
            comparison.algorithm1.steps.len()
        );
        assert_eq!(
            comparison.algorithm1.steps.last().unwrap().data,
            comparison.algorithm2.steps.last().unwrap().data
        );
    }

    #[test]
    fn same_algorithm_twice_gives_identical_counts() {
        let comparison = compare_algorithms(&[3, 1, 2], "selection", "selection").unwrap();
        assert_eq!(
            comparison.algorithm1.metrics.comparisons,
            comparison.algorithm2.metrics.comparisons
        );
        assert_eq!(comparison.algorithm1.steps, comparison.algorithm2.steps);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = compare_algorithms(&[1, 2], "bubble", "bogo").unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm { ref name } if name == "bogo"));
    }

    #[test]
    fn metrics_serialize_in_camel_case() {
        let result = run_with_metrics(&[2, 1], SortKind::Bubble);
        let json = serde_json::to_value(result.metrics).unwrap();
        assert_eq!(json["totalSteps"], 5);
        assert!(json.get("executionTimeMs").is_some());
    }
}
