//! Dijkstra's shortest paths, array-relaxation variant
//!
//! Each round linearly scans the unvisited nodes for the smallest tentative
//! distance (ties: lowest id). Weights must be non-negative; negative weights
//! are unsupported and give wrong answers.

use super::{join_ids, reject_invalid, GraphAlgorithm, GraphAlgorithmResult};
use crate::structures::GraphData;
use crate::trace::{Step, Trace};
use std::collections::BTreeMap;

/// Tentative distance of a node not reached yet
pub const UNREACHABLE: f64 = 999_999.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

struct DijkstraState<'g, T> {
    graph: &'g GraphData<T>,
    distances: BTreeMap<usize, f64>,
    previous: Vec<Option<usize>>,
    visited: Vec<usize>,
    seen: Vec<bool>,
}

impl<T: Clone> DijkstraState<'_, T> {
    fn snapshot(&self, current: Option<usize>, path: Vec<usize>) -> GraphAlgorithmResult<T> {
        GraphAlgorithmResult {
            visited_nodes: self.visited.clone(),
            current_node: current,
            path,
            distances: self.distances.clone(),
            ..GraphAlgorithmResult::new(self.graph.clone())
        }
    }

    fn distance(&self, id: usize) -> f64 {
        self.distances.get(&id).copied().unwrap_or(UNREACHABLE)
    }

    /// Closest unvisited node, or `None` when the rest is unreachable
    fn closest_unvisited(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (&id, &distance) in &self.distances {
            if self.seen[id] {
                continue;
            }
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }
        best.filter(|&(_, d)| d < UNREACHABLE).map(|(id, _)| id)
    }

    fn path_to(&self, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.previous[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

impl GraphAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra's Shortest Path"
    }

    fn execute<T: Clone>(
        &self,
        graph: &GraphData<T>,
        start: usize,
        end: Option<usize>,
    ) -> Trace<GraphAlgorithmResult<T>> {
        if let Some(trace) = reject_invalid(graph, self.name(), start) {
            return trace;
        }
        tracing::debug!(start, ?end, "dijkstra");

        let node_count = graph.node_count();
        let mut state = DijkstraState {
            graph,
            distances: graph
                .nodes
                .iter()
                .map(|n| (n.id, if n.id == start { 0.0 } else { UNREACHABLE }))
                .collect(),
            previous: vec![None; node_count],
            visited: Vec::new(),
            seen: vec![false; node_count],
        };
        let mut trace = Trace::new();
        let mut shortest: Option<Vec<usize>> = None;

        trace.push(Step::new(
            state.snapshot(None, Vec::new()),
            format!(
                "Initializing distances. Node {} has distance 0, every other node infinity",
                start
            ),
        ));

        while state.visited.len() < node_count {
            let Some(current) = state.closest_unvisited() else {
                break;
            };

            state.seen[current] = true;
            state.visited.push(current);
            trace.push(
                Step::new(
                    state.snapshot(Some(current), state.visited.clone()),
                    format!(
                        "Visiting node {} (distance: {})",
                        current,
                        state.distance(current)
                    ),
                )
                .with_highlights([current]),
            );

            if end == Some(current) {
                let path = state.path_to(current);
                trace.push(
                    Step::new(
                        state.snapshot(Some(current), path.clone()),
                        format!(
                            "Found the shortest path to {}! Distance: {}, path: {}",
                            current,
                            state.distance(current),
                            join_ids(&path, " → ")
                        ),
                    )
                    .with_highlights(path.clone()),
                );
                shortest = Some(path);
                break;
            }

            let base = state.distance(current);
            let mut relaxed = Vec::new();
            for edge in graph.outgoing(current) {
                if state.seen[edge.to] {
                    continue;
                }
                let candidate = base + edge.weight;
                if candidate < state.distance(edge.to) {
                    state.distances.insert(edge.to, candidate);
                    state.previous[edge.to] = Some(current);
                    relaxed.push(edge.to);
                }
            }

            if !relaxed.is_empty() {
                trace.push(
                    Step::new(
                        state.snapshot(Some(current), state.visited.clone()),
                        format!("Updating the distances of the neighbors of {}", current),
                    )
                    .with_highlights(relaxed),
                );
            }
        }

        let (path, description) = match (shortest, end) {
            (Some(path), Some(target)) => {
                let description = format!(
                    "Dijkstra's algorithm completed. Shortest distance to {}: {}, path: {}",
                    target,
                    state.distance(target),
                    join_ids(&path, " → ")
                );
                (path, description)
            }
            (None, Some(target)) => (
                state.visited.clone(),
                format!(
                    "Dijkstra's algorithm completed. Node {} is unreachable from {}",
                    target, start
                ),
            ),
            _ => (
                state.visited.clone(),
                format!(
                    "Dijkstra's algorithm completed. Visit order: {}",
                    join_ids(&state.visited, " → ")
                ),
            ),
        };
        trace.push(Step::new(state.snapshot(None, path), description));
        trace
    }
}
