//! Breadth-first search
//!
//! Nodes are marked visited when enqueued, so each node enters the queue once.

use super::{join_ids, reject_invalid, GraphAlgorithm, GraphAlgorithmResult};
use crate::structures::GraphData;
use crate::trace::{Step, Trace};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

struct BfsState<'g, T> {
    graph: &'g GraphData<T>,
    visited: Vec<usize>,
    seen: Vec<bool>,
    queue: VecDeque<usize>,
    path: Vec<usize>,
}

impl<T: Clone> BfsState<'_, T> {
    fn snapshot(&self, current: Option<usize>) -> GraphAlgorithmResult<T> {
        GraphAlgorithmResult {
            visited_nodes: self.visited.clone(),
            current_node: current,
            path: self.path.clone(),
            queue: self.queue.iter().copied().collect(),
            ..GraphAlgorithmResult::new(self.graph.clone())
        }
    }

    fn mark(&mut self, id: usize) {
        self.seen[id] = true;
        self.visited.push(id);
        self.queue.push_back(id);
    }
}

impl GraphAlgorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "Breadth-First Search (BFS)"
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
        tracing::debug!(start, ?end, "bfs");

        let mut state = BfsState {
            graph,
            visited: Vec::new(),
            seen: vec![false; graph.node_count()],
            queue: VecDeque::new(),
            path: Vec::new(),
        };
        let mut trace = Trace::new();

        trace.push(Step::new(
            state.snapshot(None),
            format!(
                "Initial state of the graph. Starting BFS from node {}",
                start
            ),
        ));

        state.mark(start);
        trace.push(
            Step::new(
                state.snapshot(None),
                format!(
                    "Enqueuing start node {} and marking it as visited",
                    start
                ),
            )
            .with_highlights([start]),
        );

        while let Some(current) = state.queue.pop_front() {
            state.path.push(current);
            trace.push(
                Step::new(
                    state.snapshot(Some(current)),
                    format!("Processing node {} (taken from the queue)", current),
                )
                .with_highlights([current]),
            );

            if end == Some(current) {
                trace.push(
                    Step::new(
                        state.snapshot(Some(current)),
                        format!("Found target node {}!", current),
                    )
                    .with_highlights([current]),
                );
                break;
            }

            let mut enqueued = Vec::new();
            for edge in graph.outgoing(current) {
                if !state.seen[edge.to] {
                    state.mark(edge.to);
                    enqueued.push(edge.to);
                }
            }

            if !enqueued.is_empty() {
                trace.push(
                    Step::new(
                        state.snapshot(Some(current)),
                        format!(
                            "Enqueuing the unvisited neighbors of {}: {}",
                            current,
                            join_ids(&enqueued, ", ")
                        ),
                    )
                    .with_highlights(enqueued),
                );
            }
        }

        trace.push(Step::new(
            state.snapshot(None),
            format!(
                "BFS completed. Visited order: {}",
                join_ids(&state.path, " → ")
            ),
        ));
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{sample_graph, Graph, UndirectedGraph};

    #[test]
    fn visits_sample_graph_in_fifo_order() {
        let graph = sample_graph().graph_data();
        let trace = BreadthFirstSearch.execute(&graph, 0, None);
        let last = trace.last().unwrap();
        assert_eq!(last.data.path, vec![0, 1, 2, 3, 4]);
        assert_eq!(last.data.current_node, None);
        assert!(last.data.queue.is_empty());
        assert_eq!(last.description, "BFS completed. Visited order: 0 → 1 → 2 → 3 → 4");
    }

    #[test]
    fn stops_when_target_is_dequeued() {
        let graph = sample_graph().graph_data();
        let trace = BreadthFirstSearch.execute(&graph, 0, Some(2));
        let found = trace.get(trace.len() - 2).unwrap();
        assert_eq!(found.description, "Found target node 2!");
        assert_eq!(trace.last().unwrap().data.path, vec![0, 1, 2]);
        // 3 was discovered from 1 before 2 was processed
        assert_eq!(trace.last().unwrap().data.queue, vec![3]);
    }

    #[test]
    fn visited_on_enqueue_prevents_duplicates() {
        let mut graph = UndirectedGraph::new();
        for v in ["a", "b", "c"] {
            graph.add_node(v);
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 2, 1.0);
        graph.add_edge(1, 2, 1.0);
        let trace = BreadthFirstSearch.execute(&graph.graph_data(), 0, None);
        assert!(trace.iter().all(|s| {
            let mut q = s.data.queue.clone();
            q.sort_unstable();
            q.windows(2).all(|w| w[0] != w[1])
        }));
        assert_eq!(trace.last().unwrap().data.visited_nodes, vec![0, 1, 2]);
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let mut graph = UndirectedGraph::new();
        graph.add_node("solo");
        let trace = BreadthFirstSearch.execute(&graph.graph_data(), 0, None);
        assert_eq!(trace.len(), 4);
        assert_eq!(trace.last().unwrap().data.path, vec![0]);
    }
}
