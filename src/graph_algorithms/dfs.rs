//! Depth-first search with an explicit stack
//!
//! Nodes are marked visited when popped, so a node may be popped again after it
//! was visited; that pop is recorded and skipped. Neighbours are pushed in
//! reverse so the first-inserted edge is explored first, and a neighbour already
//! waiting on the stack is not pushed twice.

use super::{join_ids, reject_invalid, GraphAlgorithm, GraphAlgorithmResult};
use crate::structures::GraphData;
use crate::trace::{Step, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

struct DfsState<'g, T> {
    graph: &'g GraphData<T>,
    visited: Vec<usize>,
    seen: Vec<bool>,
    stack: Vec<usize>,
}

impl<T: Clone> DfsState<'_, T> {
    fn snapshot(&self, current: Option<usize>) -> GraphAlgorithmResult<T> {
        GraphAlgorithmResult {
            visited_nodes: self.visited.clone(),
            current_node: current,
            // visit order doubles as the DFS path
            path: self.visited.clone(),
            stack: self.stack.clone(),
            ..GraphAlgorithmResult::new(self.graph.clone())
        }
    }
}

impl GraphAlgorithm for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "Depth-First Search (DFS)"
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
        tracing::debug!(start, ?end, "dfs");

        let mut state = DfsState {
            graph,
            visited: Vec::new(),
            seen: vec![false; graph.node_count()],
            stack: Vec::new(),
        };
        let mut trace = Trace::new();

        trace.push(Step::new(
            state.snapshot(None),
            format!(
                "Initial state of the graph. Starting DFS from node {}",
                start
            ),
        ));

        state.stack.push(start);
        trace.push(
            Step::new(
                state.snapshot(None),
                format!("Pushing start node {} onto the stack", start),
            )
            .with_highlights([start]),
        );

        while let Some(current) = state.stack.pop() {
            trace.push(
                Step::new(
                    state.snapshot(Some(current)),
                    format!("Popping node {} from the stack", current),
                )
                .with_highlights([current]),
            );

            if state.seen[current] {
                continue;
            }

            state.seen[current] = true;
            state.visited.push(current);
            trace.push(
                Step::new(
                    state.snapshot(Some(current)),
                    format!("Visiting node {} and adding it to the path", current),
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

            let neighbors: Vec<usize> = graph
                .outgoing(current)
                .map(|edge| edge.to)
                .filter(|&to| !state.seen[to])
                .collect();

            let mut pushed = Vec::new();
            for &neighbor in neighbors.iter().rev() {
                if !state.stack.contains(&neighbor) {
                    state.stack.push(neighbor);
                    pushed.push(neighbor);
                }
            }

            if !pushed.is_empty() {
                trace.push(
                    Step::new(
                        state.snapshot(Some(current)),
                        format!(
                            "Pushing the unvisited neighbors of {} onto the stack: {}",
                            current,
                            join_ids(&pushed, ", ")
                        ),
                    )
                    .with_highlights(pushed),
                );
            }
        }

        trace.push(Step::new(
            state.snapshot(None),
            format!(
                "DFS completed. Visited order: {}",
                join_ids(&state.visited, " → ")
            ),
        ));
        trace
    }
}
